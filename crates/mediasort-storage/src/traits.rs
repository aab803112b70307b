//! Storage abstraction trait
//!
//! This module defines the MediaStore trait used by the copy engine.

use async_trait::async_trait;
use std::path::Path;
use std::time::SystemTime;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Copy failed: {0}")]
    CopyFailed(String),

    #[error("Setting file times failed: {0}")]
    TimestampFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Destination store for sorted media files
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Create a folder and all missing parents; succeeds if it already exists
    async fn ensure_dir(&self, dir: &Path) -> StorageResult<()>;

    /// Whether anything exists at `path`
    async fn exists(&self, path: &Path) -> StorageResult<bool>;

    /// Copy `source` to `target`, then set the target's modification and access
    /// times to `file_time`. Returns the number of bytes copied.
    ///
    /// A missing source yields `StorageError::NotFound`.
    async fn copy_with_file_time(
        &self,
        source: &Path,
        target: &Path,
        file_time: SystemTime,
    ) -> StorageResult<u64>;
}
