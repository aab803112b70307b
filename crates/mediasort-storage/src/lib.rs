//! Mediasort Storage Library
//!
//! File-system side of the copy engine: folder creation, existence checks and
//! copies that carry the asset's creation time over to the copied file.
//!
//! Paths are absolute (or relative to the working directory); resolving where
//! an asset belongs is done by `mediasort_core::paths`.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{MediaStore, StorageError, StorageResult};
