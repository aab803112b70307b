//! In-memory data sources for engine unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mediasort_core::models::{Asset, User};
use mediasort_core::AppError;
use mediasort_db::{AssetSource, UserLookup};

/// Fixed list of assets, returned as given
pub struct MockAssetSource {
    assets: Vec<Asset>,
}

impl MockAssetSource {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }
}

#[async_trait]
impl AssetSource for MockAssetSource {
    async fn fetch_assets(&self) -> Result<Vec<Asset>, AppError> {
        Ok(self.assets.clone())
    }
}

/// User table that counts every query it answers
pub struct MockUserLookup {
    users: HashMap<String, User>,
    queries: AtomicUsize,
}

impl MockUserLookup {
    pub fn with_users(users: &[(&str, &str)]) -> Self {
        Self {
            users: users
                .iter()
                .map(|(id, name)| {
                    (
                        id.to_string(),
                        User {
                            id: id.to_string(),
                            name: name.to_string(),
                        },
                    )
                })
                .collect(),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserLookup for MockUserLookup {
    async fn fetch_user(&self, id: &str) -> Result<User, AppError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.users
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
    }
}

/// Asset created at midnight UTC on the given day
pub fn asset(
    (year, month, day): (i32, u32, u32),
    original_path: &str,
    file_name: &str,
    asset_type: &str,
    owner_id: &str,
) -> Asset {
    Asset {
        file_created_at: Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap(),
        original_path: original_path.to_string(),
        original_file_name: file_name.to_string(),
        asset_type: asset_type.to_string(),
        owner_id: owner_id.to_string(),
    }
}
