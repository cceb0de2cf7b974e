//! WebFiler File System Layer
//!
//! Provides the filesystem core behind the HTTP surface, including:
//! - FileRecord: the metadata unit for files and directories
//! - Path resolution and classification
//! - Recursive subtree walking with dedup
//! - Async operations backing the request handlers

mod entry;
mod ops;
mod resolver;
mod walker;

pub use entry::FileRecord;
pub use ops::{
    create_entry, delete_entry, list_dir, read_file, stat_file, update_file, FileContent,
};
pub use resolver::{normalize, resolve, PathClassification, ResolvedPath};
pub use walker::{walk, walk_with, ExtensionFilter, WalkContext};

use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Is a directory: {0}")]
    IsADirectory(String),
}

pub type Result<T> = std::result::Result<T, FsError>;
