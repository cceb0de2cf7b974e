//! Async filesystem operations behind the HTTP handlers
//!
//! Every operation resolves its path exactly once, branches on the
//! classification, performs a single primitive, and returns a typed
//! error. There is no re-validation before the mutating step: two
//! concurrent requests against the same path race, and whichever
//! primitive completes last wins.

use crate::resolver::{self, PathClassification, ResolvedPath};
use crate::{FileRecord, FsError, Result};
use std::cmp::Ordering;
use std::path::PathBuf;
use tokio::fs;

/// A file's metadata together with its full text content.
#[derive(Debug)]
pub struct FileContent {
    pub record: FileRecord,
    pub content: String,
}

/// List the immediate children of a directory (single level).
///
/// Defaults to the process working directory. Directories sort before
/// files; within each group, ascending by name.
pub async fn list_dir(path: Option<&str>) -> Result<Vec<FileRecord>> {
    let resolved = resolver::resolve(path.unwrap_or(".")).await?;
    match resolved.classification {
        PathClassification::Missing => return Err(FsError::NotFound(resolved.display())),
        PathClassification::File => return Err(FsError::NotADirectory(resolved.display())),
        PathClassification::Directory => {}
    }

    let mut records = Vec::new();
    let mut entries = fs::read_dir(&resolved.path).await?;
    while let Some(entry) = entries.next_entry().await? {
        let child = entry.path();
        let metadata = fs::metadata(&child).await?;
        records.push(FileRecord::from_metadata(&child, &metadata));
    }

    records.sort_by(|a, b| {
        if a.is_dir != b.is_dir {
            return if a.is_dir {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        a.name.cmp(&b.name)
    });

    Ok(records)
}

/// Metadata for a single file, without touching its content.
pub async fn stat_file(path: &str) -> Result<FileRecord> {
    let resolved = require_file(path).await?;
    let metadata = fs::metadata(&resolved.path).await?;
    Ok(FileRecord::from_metadata(&resolved.path, &metadata))
}

/// Read a file's entire content as text, with its metadata.
///
/// The whole file is held in memory; unsuitable for very large files.
pub async fn read_file(path: &str) -> Result<FileContent> {
    let resolved = require_file(path).await?;
    let metadata = fs::metadata(&resolved.path).await?;
    let content = fs::read_to_string(&resolved.path).await?;

    Ok(FileContent {
        record: FileRecord::from_metadata(&resolved.path, &metadata),
        content,
    })
}

/// Create a file or directory.
///
/// Directory creation is recursive and idempotent: it succeeds when the
/// path and any missing ancestors already exist as directories. File
/// creation overwrites an existing file unconditionally; the asymmetry
/// with directories is intended.
pub async fn create_entry(path: &str, is_dir: bool, content: Option<&str>) -> Result<FileRecord> {
    let resolved = resolver::resolve(path).await?;

    if is_dir {
        fs::create_dir_all(&resolved.path).await?;
        tracing::info!("Created directory: {}", resolved.path.display());
    } else {
        fs::write(&resolved.path, content.unwrap_or_default()).await?;
        tracing::info!("Created file: {}", resolved.path.display());
    }

    let metadata = fs::metadata(&resolved.path).await?;
    Ok(FileRecord::from_metadata(&resolved.path, &metadata))
}

/// Overwrite an existing file's content. Never creates a file.
pub async fn update_file(path: &str, content: &str) -> Result<FileRecord> {
    let resolved = require_file(path).await?;

    fs::write(&resolved.path, content).await?;
    tracing::info!("Updated file: {}", resolved.path.display());

    let metadata = fs::metadata(&resolved.path).await?;
    Ok(FileRecord::from_metadata(&resolved.path, &metadata))
}

/// Delete a file, or a directory with its entire subtree.
pub async fn delete_entry(path: &str) -> Result<PathBuf> {
    let resolved = resolver::resolve(path).await?;
    match resolved.classification {
        PathClassification::Missing => return Err(FsError::NotFound(resolved.display())),
        PathClassification::Directory => {
            fs::remove_dir_all(&resolved.path).await?;
            tracing::warn!("Deleted directory tree: {}", resolved.path.display());
        }
        PathClassification::File => {
            fs::remove_file(&resolved.path).await?;
            tracing::info!("Deleted file: {}", resolved.path.display());
        }
    }

    Ok(resolved.path)
}

async fn require_file(path: &str) -> Result<ResolvedPath> {
    let resolved = resolver::resolve(path).await?;
    match resolved.classification {
        PathClassification::Missing => Err(FsError::NotFound(resolved.display())),
        PathClassification::Directory => Err(FsError::IsADirectory(resolved.display())),
        PathClassification::File => Ok(resolved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[tokio::test]
    async fn test_list_dir_sorts_directories_first() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("zeta.txt"), b"z").unwrap();
        std::fs::write(dir.path().join("alpha.txt"), b"a").unwrap();
        std::fs::create_dir(dir.path().join("beta")).unwrap();
        std::fs::create_dir(dir.path().join("alpha")).unwrap();

        let records = list_dir(Some(path_str(dir.path()))).await.unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "alpha.txt", "zeta.txt"]);
    }

    #[tokio::test]
    async fn test_list_dir_rejects_file_target() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.txt");
        std::fs::write(&file, b"x").unwrap();

        let err = list_dir(Some(path_str(&file))).await.unwrap_err();
        assert!(matches!(err, FsError::NotADirectory(_)));
    }

    #[tokio::test]
    async fn test_list_dir_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        let err = list_dir(Some(path_str(&missing))).await.unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c");

        let first = create_entry(path_str(&target), true, None).await.unwrap();
        let second = create_entry(path_str(&target), true, None).await.unwrap();
        assert!(first.is_dir);
        assert!(second.is_dir);
    }

    #[tokio::test]
    async fn test_create_file_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("f.txt");

        create_entry(path_str(&target), false, Some("first"))
            .await
            .unwrap();
        let record = create_entry(path_str(&target), false, Some("second"))
            .await
            .unwrap();

        assert_eq!(record.size, Some(6));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_create_file_defaults_to_empty_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("empty.txt");

        let record = create_entry(path_str(&target), false, None).await.unwrap();
        assert_eq!(record.size, Some(0));
    }

    #[tokio::test]
    async fn test_update_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("ghost.txt");

        let err = update_file(path_str(&target), "x").await.unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
        assert!(!target.exists(), "update must never create the file");
    }

    #[tokio::test]
    async fn test_update_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();

        let err = update_file(path_str(dir.path()), "x").await.unwrap_err();
        assert!(matches!(err, FsError::IsADirectory(_)));
    }

    #[tokio::test]
    async fn test_update_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("doc.txt");
        std::fs::write(&target, b"old").unwrap();

        update_file(path_str(&target), "new contents").await.unwrap();

        let file = read_file(path_str(&target)).await.unwrap();
        assert_eq!(file.content, "new contents");
        assert_eq!(file.record.size, Some(12));
    }

    #[tokio::test]
    async fn test_read_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();

        let err = read_file(path_str(dir.path())).await.unwrap_err();
        assert!(matches!(err, FsError::IsADirectory(_)));
    }

    #[tokio::test]
    async fn test_delete_file_then_stat_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("f.txt");
        std::fs::write(&target, b"x").unwrap();

        delete_entry(path_str(&target)).await.unwrap();

        let err = stat_file(path_str(&target)).await.unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_directory_subtree() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("tree");
        std::fs::create_dir_all(target.join("deep/deeper")).unwrap();
        std::fs::write(target.join("deep/f.txt"), b"x").unwrap();

        delete_entry(path_str(&target)).await.unwrap();
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_delete_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        let err = delete_entry(path_str(&missing)).await.unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }
}
