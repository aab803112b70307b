//! Test helpers: in-memory asset and user tables plus a temporary library.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mediasort_core::models::{Asset, User};
use mediasort_core::{AppError, TargetTemplates};
use mediasort_db::{AssetSource, UserLookup};
use mediasort_services::{AssetSorter, UserCache};
use mediasort_storage::LocalStorage;
use tempfile::TempDir;

pub struct InMemoryAssets(pub Vec<Asset>);

#[async_trait]
impl AssetSource for InMemoryAssets {
    async fn fetch_assets(&self) -> Result<Vec<Asset>, AppError> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    users: HashMap<String, String>,
    queries: AtomicUsize,
}

impl InMemoryUsers {
    pub fn with(mut self, id: &str, name: &str) -> Self {
        self.users.insert(id.to_string(), name.to_string());
        self
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserLookup for InMemoryUsers {
    async fn fetch_user(&self, id: &str) -> Result<User, AppError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.users
            .get(id)
            .map(|name| User {
                id: id.to_string(),
                name: name.clone(),
            })
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
    }
}

/// Temporary source root plus image and video destination roots
pub struct TestLibrary {
    pub dir: TempDir,
}

impl TestLibrary {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn source_root(&self) -> PathBuf {
        self.dir.path().join("immich")
    }

    pub fn images(&self) -> PathBuf {
        self.dir.path().join("images")
    }

    pub fn videos(&self) -> PathBuf {
        self.dir.path().join("videos")
    }

    pub fn templates(&self) -> TargetTemplates {
        TargetTemplates::new(
            self.images().join("{}").to_string_lossy(),
            self.videos().join("{}").to_string_lossy(),
        )
    }

    /// Write an original at `original_path` with its `upload/` marker removed
    pub fn add_original(&self, original_path: &str, content: &[u8]) {
        let relative = original_path.strip_prefix("upload/").unwrap_or(original_path);
        let path = self.source_root().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// A fresh sorter, as a new process run would build it
    pub fn sorter(&self, assets: &[Asset], users: Arc<InMemoryUsers>) -> AssetSorter {
        AssetSorter::new(
            Arc::new(InMemoryAssets(assets.to_vec())),
            UserCache::new(users),
            Arc::new(LocalStorage::new()),
            self.templates(),
            self.source_root(),
        )
    }
}

pub fn asset(
    created: DateTime<Utc>,
    original_path: &str,
    file_name: &str,
    asset_type: &str,
    owner_id: &str,
) -> Asset {
    Asset {
        file_created_at: created,
        original_path: original_path.to_string(),
        original_file_name: file_name.to_string(),
        asset_type: asset_type.to_string(),
        owner_id: owner_id.to_string(),
    }
}

/// Every file under `root` with its contents, keyed by relative path
pub fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let relative = path.strip_prefix(root).unwrap().to_path_buf();
                out.push((relative, std::fs::read(&path).unwrap()));
            }
        }
    }

    let mut files = Vec::new();
    walk(root, root, &mut files);
    files.sort();
    files
}
