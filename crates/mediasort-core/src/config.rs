//! Configuration module
//!
//! Settings come from the process environment (optionally seeded from a `.env`
//! file). Every setting is required; a missing or empty one stops the process
//! before the database or the file system is touched.

use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::constants::{
    ENV_DB_HOST, ENV_DB_NAME, ENV_DB_PASSWORD, ENV_DB_PORT, ENV_DB_USER,
    ENV_IMAGE_TARGET_TEMPLATE, ENV_SOURCE_BASE_PATH, ENV_VIDEO_TARGET_TEMPLATE, OWNER_SLOT,
};
use crate::error::ConfigError;
use crate::paths::TargetTemplates;

/// Connection settings for the asset database
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .finish()
    }
}

/// Full configuration for one sorting run
#[derive(Clone, Debug)]
pub struct SorterConfig {
    pub database: DatabaseConfig,
    /// Image destination, with `{}` standing for the owner folder
    pub image_target_template: String,
    /// Video destination, with `{}` standing for the owner folder
    pub video_target_template: String,
    pub source_base_path: PathBuf,
}

impl SorterConfig {
    /// Load `.env` if present, then read every setting from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let user = required(ENV_DB_USER)?;
        let password = required(ENV_DB_PASSWORD)?;
        let host = required(ENV_DB_HOST)?;
        let port = required(ENV_DB_PORT)?;
        let name = required(ENV_DB_NAME)?;
        let image_target_template = required(ENV_IMAGE_TARGET_TEMPLATE)?;
        let video_target_template = required(ENV_VIDEO_TARGET_TEMPLATE)?;
        let source_base_path = required(ENV_SOURCE_BASE_PATH)?;

        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                key: ENV_DB_PORT,
                reason: format!("'{}' is not a port number ({})", port, e),
            })?;

        let config = SorterConfig {
            database: DatabaseConfig {
                user,
                password,
                host,
                port,
                name,
            },
            image_target_template,
            video_target_template,
            source_base_path: PathBuf::from(source_base_path),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, template) in [
            (ENV_IMAGE_TARGET_TEMPLATE, &self.image_target_template),
            (ENV_VIDEO_TARGET_TEMPLATE, &self.video_target_template),
        ] {
            if !template.contains(OWNER_SLOT) {
                return Err(ConfigError::Invalid {
                    key,
                    reason: format!("template '{}' has no '{}' slot", template, OWNER_SLOT),
                });
            }
        }

        Ok(())
    }

    pub fn target_templates(&self) -> TargetTemplates {
        TargetTemplates::new(
            self.image_target_template.clone(),
            self.video_target_template.clone(),
        )
    }
}
