//! Mediasort Core Library
//!
//! This crate provides the domain models, error types, configuration and path
//! resolution rules shared by the other mediasort crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod paths;

// Re-export commonly used types
pub use config::{DatabaseConfig, SorterConfig};
pub use error::{AppError, ConfigError};
pub use models::{Asset, AssetType, CopyOutcome, RunSummary, User};
pub use paths::{owner_folder_name, source_path, strip_upload_prefix, TargetTemplates};
