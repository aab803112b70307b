//! Data models for the application
//!
//! Records read from the asset database, plus the per-asset outcome types the
//! copy engine reports.

mod asset;
mod outcome;
mod user;

pub use asset::*;
pub use outcome::*;
pub use user::*;
