//! Database repositories and connection setup
//
// Connection pool and schema contract check
pub mod connection;
pub mod schema;
//
// Read repositories
pub mod asset;
pub mod user;

pub use asset::AssetRepository;
pub use connection::{connect, connect_options};
pub use schema::verify_schema;
pub use user::UserRepository;
