use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Media type of an asset, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetType {
    Image,
    Video,
    /// Anything else, kept for reporting
    Other(String),
}

impl AssetType {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.to_uppercase();
        match normalized.as_str() {
            "IMAGE" => AssetType::Image,
            "VIDEO" => AssetType::Video,
            _ => AssetType::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AssetType::Image => "IMAGE",
            AssetType::Video => "VIDEO",
            AssetType::Other(raw) => raw,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, AssetType::Other(_))
    }
}

impl Display for AssetType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// One row of the `assets` table, projected to the columns the sorter reads
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct Asset {
    pub file_created_at: DateTime<Utc>,
    /// Path relative to the source root, starting with `upload/`
    pub original_path: String,
    pub original_file_name: String,
    /// Raw type column; see [`Asset::asset_type`]
    pub asset_type: String,
    pub owner_id: String,
}

impl Asset {
    pub fn asset_type(&self) -> AssetType {
        AssetType::parse(&self.asset_type)
    }
}
