//! Error types module
//!
//! `ConfigError` covers everything that can go wrong while loading settings and is
//! always fatal. `AppError` covers the data store side of a run.
//!
//! The `Database` variant and `From<sqlx::Error>` are gated behind the `sqlx` feature.

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Startup configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set and non-empty")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Database error: {0}")]
    Database(String),

    #[error("Schema mismatch: {0}")]
    Schema(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Whether the error only concerns a single record, so a batch can move on
    pub fn is_record_level(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}
