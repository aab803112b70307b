//! Path resolution for sorted assets
//!
//! Destination layout: `<template with owner folder>/<YYYY-MM>/<original file name>`.
//! Everything here is pure so repeated runs compute the same paths.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::constants::{MONTH_FOLDER_FORMAT, OWNER_SLOT, UPLOAD_PREFIX};
use crate::models::AssetType;

/// Folder name for an owner: lower-cased, spaces replaced with hyphens.
///
/// No other characters are touched, so names containing `/` still nest.
pub fn owner_folder_name(display_name: &str) -> String {
    display_name.to_lowercase().replace(' ', "-")
}

/// Remove the leading `upload/` marker from an asset's original path.
///
/// Only the exact prefix is removed: `uploaded/a.jpg` is returned unchanged.
pub fn strip_upload_prefix(original_path: &str) -> &str {
    original_path
        .strip_prefix(UPLOAD_PREFIX)
        .unwrap_or(original_path)
}

/// Location of an asset's original file under the source root.
pub fn source_path(source_root: &Path, original_path: &str) -> PathBuf {
    source_root.join(strip_upload_prefix(original_path))
}

/// Destination templates for the two supported media types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTemplates {
    image: String,
    video: String,
}

impl TargetTemplates {
    pub fn new(image: impl Into<String>, video: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            video: video.into(),
        }
    }

    /// Base folder for an owner, or `None` when the type has no template.
    pub fn base_folder(&self, asset_type: &AssetType, owner_folder: &str) -> Option<PathBuf> {
        let template = match asset_type {
            AssetType::Image => &self.image,
            AssetType::Video => &self.video,
            AssetType::Other(_) => return None,
        };
        Some(PathBuf::from(template.replace(OWNER_SLOT, owner_folder)))
    }

    /// Month folder an asset belongs in, or `None` for an unknown type.
    pub fn resolve_target_folder(
        &self,
        asset_type: &AssetType,
        owner_folder: &str,
        created_at: DateTime<Utc>,
    ) -> Option<PathBuf> {
        self.base_folder(asset_type, owner_folder)
            .map(|base| base.join(created_at.format(MONTH_FOLDER_FORMAT).to_string()))
    }
}
