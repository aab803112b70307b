//! Data source abstractions for the copy engine
//!
//! These traits define the minimal interface the engine needs from the
//! database, allowing for easy mocking and testing without a live store.

use async_trait::async_trait;
use mediasort_core::models::{Asset, User};
use mediasort_core::AppError;

use crate::db::{AssetRepository, UserRepository};

/// Source of the asset records to sort
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// All assets, oldest first
    async fn fetch_assets(&self) -> Result<Vec<Asset>, AppError>;
}

/// Lookup of a single owner record
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Fails with `AppError::NotFound` when no user has this id
    async fn fetch_user(&self, id: &str) -> Result<User, AppError>;
}

#[async_trait]
impl AssetSource for AssetRepository {
    async fn fetch_assets(&self) -> Result<Vec<Asset>, AppError> {
        AssetRepository::fetch_assets(self).await
    }
}

#[async_trait]
impl UserLookup for UserRepository {
    async fn fetch_user(&self, id: &str) -> Result<User, AppError> {
        UserRepository::fetch_user(self, id).await
    }
}
