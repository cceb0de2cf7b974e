//! File metadata records

use serde::Serialize;
use std::fs::Metadata;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Metadata record for a single file or directory.
///
/// `id` is the canonical absolute path and is unique within one listing or
/// traversal result. `size` is only present for files. Timestamps are Unix
/// seconds; `modified_at` falls back to 0 where the platform cannot report
/// it, `created_at` stays absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub is_dir: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    pub modified_at: i64,
}

impl FileRecord {
    /// Build a record from a path and an already-fetched metadata probe.
    pub fn from_metadata<P: AsRef<Path>>(path: P, metadata: &Metadata) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        let is_dir = metadata.is_dir();

        let modified_at = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        let created_at = metadata
            .created()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64);

        Self {
            id: path.to_string_lossy().to_string(),
            name,
            is_dir,
            size: (!is_dir).then(|| metadata.len()),
            created_at,
            modified_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_record_fields() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, b"hello").unwrap();

        let metadata = fs::metadata(&file).unwrap();
        let record = FileRecord::from_metadata(&file, &metadata);

        assert_eq!(record.name, "notes.txt");
        assert_eq!(record.id, file.to_string_lossy());
        assert!(!record.is_dir);
        assert_eq!(record.size, Some(5));
        assert!(record.modified_at > 0);
    }

    #[test]
    fn test_serialized_shape() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, b"x").unwrap();

        let metadata = fs::metadata(&file).unwrap();
        let value = serde_json::to_value(FileRecord::from_metadata(&file, &metadata)).unwrap();

        assert!(value.get("id").is_some());
        assert!(value.get("isDir").is_some());
        assert!(value.get("modifiedAt").is_some());
        assert_eq!(value["size"], 1);
        // snake_case names must not leak onto the wire
        assert!(value.get("is_dir").is_none());
        assert!(value.get("modified_at").is_none());
    }

    #[test]
    fn test_directory_record_has_no_size() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = fs::metadata(dir.path()).unwrap();
        let record = FileRecord::from_metadata(dir.path(), &metadata);

        assert!(record.is_dir);
        assert_eq!(record.size, None);

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("size").is_none());
    }
}
