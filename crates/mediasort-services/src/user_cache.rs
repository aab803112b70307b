//! Per-run owner cache
//!
//! Owners appear across many assets, so each one is fetched from the store at
//! most once per run. The cache has no eviction and no expiry; it is dropped
//! together with the sorter that owns it.

use std::collections::HashMap;
use std::sync::Arc;

use mediasort_core::{models::User, AppError};
use mediasort_db::UserLookup;

pub struct UserCache {
    lookup: Arc<dyn UserLookup>,
    users: HashMap<String, User>,
}

impl UserCache {
    pub fn new(lookup: Arc<dyn UserLookup>) -> Self {
        Self {
            lookup,
            users: HashMap::new(),
        }
    }

    /// Cached user, fetching it on first use. Failed lookups are not cached.
    pub async fn get_user(&mut self, id: &str) -> Result<User, AppError> {
        if let Some(user) = self.users.get(id) {
            return Ok(user.clone());
        }

        let user = self.lookup.fetch_user(id).await?;
        tracing::debug!(user_id = %id, name = %user.name, "Cached owner");
        self.users.insert(id.to_string(), user.clone());
        Ok(user)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
