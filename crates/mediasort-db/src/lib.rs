//! Mediasort data access layer
//!
//! Read-only access to the `assets` and `users` tables. The repositories map
//! rows onto the declared records in `mediasort_core::models`; the traits in
//! [`traits`] let the copy engine run against in-memory sources in tests.

pub mod db;
pub mod traits;

pub use db::{connect, connect_options, verify_schema, AssetRepository, UserRepository};
pub use traits::{AssetSource, UserLookup};
