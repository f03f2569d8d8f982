//! Content loaders for reading house data from files.
//!
//! Each loader parses a file into house-core types. Catalog records are
//! keyed by name; a record sharing its name with an earlier one replaces it.

pub mod config;
pub mod factory;
pub mod mobs;
pub mod rooms;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use mobs::MobClassLoader;
pub use rooms::RoomLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
