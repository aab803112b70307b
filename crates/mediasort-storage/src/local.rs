use crate::traits::{MediaStore, StorageError, StorageResult};
use async_trait::async_trait;
use std::fs::{File, FileTimes};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs;

/// Local filesystem storage implementation
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        LocalStorage
    }

    /// Set both access and modification time of an existing file
    async fn set_file_time(path: &Path, file_time: SystemTime) -> StorageResult<()> {
        let path: PathBuf = path.to_path_buf();
        let display = path.display().to_string();

        tokio::task::spawn_blocking(move || {
            let times = FileTimes::new()
                .set_accessed(file_time)
                .set_modified(file_time);
            File::open(&path)?.set_times(times)
        })
        .await
        .map_err(|e| StorageError::TimestampFailed(format!("{}: {}", display, e)))?
        .map_err(|e| StorageError::TimestampFailed(format!("{}: {}", display, e)))
    }
}

#[async_trait]
impl MediaStore for LocalStorage {
    async fn ensure_dir(&self, dir: &Path) -> StorageResult<()> {
        fs::create_dir_all(dir).await?;
        Ok(())
    }

    async fn exists(&self, path: &Path) -> StorageResult<bool> {
        Ok(fs::try_exists(path).await?)
    }

    async fn copy_with_file_time(
        &self,
        source: &Path,
        target: &Path,
        file_time: SystemTime,
    ) -> StorageResult<u64> {
        let start = std::time::Instant::now();

        match fs::try_exists(source).await {
            Ok(true) => {}
            Ok(false) => return Err(StorageError::NotFound(source.display().to_string())),
            Err(e) => {
                return Err(StorageError::CopyFailed(format!(
                    "Failed to read {}: {}",
                    source.display(),
                    e
                )))
            }
        }

        let size = match fs::copy(source, target).await {
            Ok(size) => size,
            Err(e) => {
                // The source may have vanished between the check and the copy.
                let source_gone = e.kind() == std::io::ErrorKind::NotFound
                    && matches!(fs::try_exists(source).await, Ok(false));
                return Err(if source_gone {
                    StorageError::NotFound(source.display().to_string())
                } else {
                    StorageError::CopyFailed(format!(
                        "Failed to copy {} to {}: {}",
                        source.display(),
                        target.display(),
                        e
                    ))
                });
            }
        };

        Self::set_file_time(target, file_time).await?;

        tracing::debug!(
            source = %source.display(),
            target = %target.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage copy successful"
        );

        Ok(size)
    }
}
