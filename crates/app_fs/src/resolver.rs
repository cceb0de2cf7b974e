//! Path resolution and classification

use crate::{FsError, Result};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Existence/type classification of a resolved path.
///
/// Derived fresh on every request; the filesystem is the source of truth
/// and may change between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClassification {
    Missing,
    File,
    Directory,
}

/// A canonicalized absolute path together with its classification.
#[derive(Debug, Clone)]
pub struct ResolvedPath {
    pub path: PathBuf,
    pub classification: PathClassification,
}

impl ResolvedPath {
    pub fn is_missing(&self) -> bool {
        matches!(self.classification, PathClassification::Missing)
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.classification, PathClassification::Directory)
    }

    pub fn is_file(&self) -> bool {
        matches!(self.classification, PathClassification::File)
    }

    /// Display string used in error messages.
    pub fn display(&self) -> String {
        self.path.display().to_string()
    }
}

/// Resolve an input path to canonical absolute form and classify it.
///
/// Classification uses a single metadata probe that follows symlinks.
/// Callers act on the result without re-probing, so a concurrent request
/// can change the path between the check and the operation.
pub async fn resolve(input: &str) -> Result<ResolvedPath> {
    let path = normalize(Path::new(input))?;

    let classification = match tokio::fs::metadata(&path).await {
        Ok(metadata) if metadata.is_dir() => PathClassification::Directory,
        Ok(_) => PathClassification::File,
        Err(e) if e.kind() == ErrorKind::NotFound => PathClassification::Missing,
        Err(e) => return Err(FsError::Io(e)),
    };

    Ok(ResolvedPath {
        path,
        classification,
    })
}

/// Normalize to an absolute path, folding `.` and `..` lexically.
///
/// Relative inputs are taken against the process working directory.
/// Symlinks are not resolved: the result is the literal path the caller
/// asked about, which keeps it usable as a dedup key.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            _ => normalized.push(component),
        }
    }

    Ok(normalized)
}
