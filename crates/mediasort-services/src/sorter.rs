//! Copy engine
//!
//! Each asset ends in exactly one [`CopyOutcome`]:
//!
//! 1. type other than IMAGE/VIDEO: `SkippedUnknownType`, nothing is created
//! 2. owner resolved through the [`UserCache`], month folder created
//! 3. file already at the target path: `SkippedExisting` (content is not compared)
//! 4. otherwise the original is copied and stamped with its creation time: `Copied`
//! 5. missing original: `FailedNotFound`; any other file error: `FailedOther`
//!
//! Per-asset failures are logged and the run moves on. Only data store errors
//! that are not about a single record abort the run.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

use mediasort_core::models::{Asset, CopyOutcome, RunSummary};
use mediasort_core::paths::{owner_folder_name, source_path, TargetTemplates};
use mediasort_core::{AppError, SorterConfig};
use mediasort_db::{AssetSource, UserLookup};
use mediasort_storage::{MediaStore, StorageError};

use crate::user_cache::UserCache;

pub struct AssetSorter {
    assets: Arc<dyn AssetSource>,
    users: UserCache,
    store: Arc<dyn MediaStore>,
    templates: TargetTemplates,
    source_root: PathBuf,
}

impl AssetSorter {
    pub fn new(
        assets: Arc<dyn AssetSource>,
        users: UserCache,
        store: Arc<dyn MediaStore>,
        templates: TargetTemplates,
        source_root: PathBuf,
    ) -> Self {
        Self {
            assets,
            users,
            store,
            templates,
            source_root,
        }
    }

    /// Sorter with a fresh owner cache, wired from the run configuration
    pub fn from_config(
        config: &SorterConfig,
        assets: Arc<dyn AssetSource>,
        user_lookup: Arc<dyn UserLookup>,
        store: Arc<dyn MediaStore>,
    ) -> Self {
        Self::new(
            assets,
            UserCache::new(user_lookup),
            store,
            config.target_templates(),
            config.source_base_path.clone(),
        )
    }

    pub fn user_cache(&self) -> &UserCache {
        &self.users
    }

    /// Fetch every asset once and process them in order
    #[tracing::instrument(skip(self), fields(source_root = %self.source_root.display()))]
    pub async fn run(&mut self) -> Result<RunSummary, AppError> {
        let assets = self.assets.fetch_assets().await?;
        tracing::info!(count = assets.len(), "Sorting assets");

        let mut summary = RunSummary::default();
        for asset in &assets {
            let outcome = self.process_asset(asset).await?;
            tracing::debug!(
                file = %asset.original_file_name,
                outcome = %outcome,
                "Asset processed"
            );
            summary.record(outcome);
        }

        tracing::info!(
            total = summary.total,
            copied = summary.copied,
            skipped_existing = summary.skipped_existing,
            skipped_unknown_type = summary.skipped_unknown_type,
            failed_not_found = summary.failed_not_found,
            failed_other = summary.failed_other,
            "Sorting run finished"
        );

        Ok(summary)
    }

    /// Decide and carry out what happens to a single asset
    pub async fn process_asset(&mut self, asset: &Asset) -> Result<CopyOutcome, AppError> {
        let file = asset.original_file_name.as_str();
        let asset_type = asset.asset_type();

        if !asset_type.is_supported() {
            tracing::warn!(
                asset_type = %asset_type,
                file = %file,
                "Unknown asset type \"{}\" for file {}, skipping",
                asset_type,
                file
            );
            return Ok(CopyOutcome::SkippedUnknownType);
        }

        let owner = match self.users.get_user(&asset.owner_id).await {
            Ok(owner) => owner,
            Err(e) if e.is_record_level() => {
                tracing::error!(
                    owner_id = %asset.owner_id,
                    file = %file,
                    error = %e,
                    "Owner lookup failed for {}",
                    file
                );
                return Ok(CopyOutcome::FailedOther);
            }
            Err(e) => return Err(e),
        };
        let owner_folder = owner_folder_name(&owner.name);

        let Some(target_folder) =
            self.templates
                .resolve_target_folder(&asset_type, &owner_folder, asset.file_created_at)
        else {
            return Ok(CopyOutcome::SkippedUnknownType);
        };

        if let Err(e) = self.store.ensure_dir(&target_folder).await {
            tracing::error!(
                folder = %target_folder.display(),
                file = %file,
                error = %e,
                "Error creating target folder for {}",
                file
            );
            return Ok(CopyOutcome::FailedOther);
        }

        let target_path = target_folder.join(file);

        match self.store.exists(&target_path).await {
            Ok(true) => {
                tracing::info!(
                    file = %file,
                    folder = %target_folder.display(),
                    "Skipping {} as it already exists in {}",
                    file,
                    target_folder.display()
                );
                return Ok(CopyOutcome::SkippedExisting);
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!(
                    file = %file,
                    target = %target_path.display(),
                    error = %e,
                    "Error checking target path {}: {}",
                    target_path.display(),
                    e
                );
                return Ok(CopyOutcome::FailedOther);
            }
        }

        let source = source_path(&self.source_root, &asset.original_path);
        let file_time = SystemTime::from(asset.file_created_at);

        match self
            .store
            .copy_with_file_time(&source, &target_path, file_time)
            .await
        {
            Ok(size_bytes) => {
                tracing::info!(
                    file = %file,
                    folder = %target_folder.display(),
                    size_bytes,
                    "Copied {} to {}",
                    file,
                    target_folder.display()
                );
                Ok(CopyOutcome::Copied)
            }
            Err(StorageError::NotFound(_)) => {
                tracing::warn!(
                    original_path = %asset.original_path,
                    source = %source.display(),
                    "File not found: {}",
                    asset.original_path
                );
                Ok(CopyOutcome::FailedNotFound)
            }
            Err(e) => {
                tracing::error!(file = %file, error = %e, "Error copying file {}: {}", file, e);
                Ok(CopyOutcome::FailedOther)
            }
        }
    }
}
