//! Mediasort Services Layer
//!
//! Orchestration for a sorting run: the per-run owner cache and the copy
//! engine that walks every asset and files it into the destination tree.

pub mod sorter;
pub mod user_cache;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use sorter::AssetSorter;
pub use user_cache::UserCache;
