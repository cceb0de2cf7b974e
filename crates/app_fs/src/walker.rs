//! Recursive subtree enumeration
//!
//! Walks a directory tree into a flat, deduplicated list of file records.
//! The traversal is iterative (explicit work stack, no call-stack
//! recursion) and synchronous; it is a standalone utility and is kept out
//! of the async request path, which it would block for the whole
//! traversal.

use crate::{FileRecord, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-traversal state: dedup set plus accumulated records.
///
/// Owned by exactly one traversal and threaded through it by mutable
/// reference; never shared between independent traversals.
#[derive(Debug, Default)]
pub struct WalkContext {
    visited: HashSet<PathBuf>,
    records: Vec<FileRecord>,
}

impl WalkContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records accumulated so far, in traversal order.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<FileRecord> {
        self.records
    }

    /// Marks a path as visited. Returns false if it already was.
    fn mark_visited(&mut self, path: &Path) -> bool {
        self.visited.insert(path.to_path_buf())
    }
}

/// Extension allow-list used to restrict walk results.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// Allow only the given extensions (without dot, case-insensitive).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Common video containers.
    pub fn videos() -> Self {
        Self::new(["mp4", "mkv", "avi", "mov", "webm", "wmv", "flv", "m4v"])
    }

    /// Whether the path's extension is on the allow-list.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .map_or(false, |e| self.extensions.contains(&e))
    }
}

/// Walk the subtree under `root`, returning one record per unique file.
///
/// Directories are recursion targets only and never appear in the result.
/// The `filter` predicate restricts which files are recorded; pass
/// `|_| true` to accept everything. Each call owns a fresh context.
pub fn walk<P, F>(root: P, filter: F) -> Result<Vec<FileRecord>>
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool,
{
    let mut ctx = WalkContext::new();
    walk_with(root.as_ref(), &mut ctx, &filter)?;
    Ok(ctx.into_records())
}

/// Walk into an existing context.
///
/// Dedup keys on the literal traversed path, not a resolved real path:
/// two symlink paths to the same file both produce records, and only a
/// re-visit of the same literal directory path stops recursion. The
/// classification probe follows symlinks. An unreadable directory or a
/// failed probe aborts the walk with the error; there are no partial
/// results.
pub fn walk_with<F>(root: &Path, ctx: &mut WalkContext, filter: &F) -> Result<()>
where
    F: Fn(&Path) -> bool + ?Sized,
{
    let mut stack = vec![root.to_path_buf()];
    ctx.mark_visited(root);

    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            let metadata = fs::metadata(&path)?;

            if metadata.is_dir() {
                if ctx.mark_visited(&path) {
                    stack.push(path);
                }
                continue;
            }

            if !filter(&path) {
                continue;
            }
            if !ctx.mark_visited(&path) {
                continue;
            }
            ctx.records.push(FileRecord::from_metadata(&path, &metadata));
        }
    }

    Ok(())
}
