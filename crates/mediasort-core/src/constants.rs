//! Environment variable names and fixed path markers.

pub const ENV_DB_USER: &str = "DBUSER";
pub const ENV_DB_PASSWORD: &str = "DBPASS";
pub const ENV_DB_HOST: &str = "DBHOST";
pub const ENV_DB_PORT: &str = "DBPORT";
pub const ENV_DB_NAME: &str = "DBNAME";
pub const ENV_IMAGE_TARGET_TEMPLATE: &str = "BASE_TARGET_PATH_IMAGES";
pub const ENV_VIDEO_TARGET_TEMPLATE: &str = "BASE_TARGET_PATH_VIDEOS";
pub const ENV_SOURCE_BASE_PATH: &str = "SOURCE_BASE_PATH";

/// Placeholder in a target template that receives the owner folder name.
pub const OWNER_SLOT: &str = "{}";

/// Marker prepended to every `originalPath` by the upload service.
pub const UPLOAD_PREFIX: &str = "upload/";

/// strftime pattern for the per-month folder.
pub const MONTH_FOLDER_FORMAT: &str = "%Y-%m";
