//! Data-driven content definitions and loaders.
//!
//! This crate reads the house's catalogs from a data directory:
//! - Rooms (`rooms.json`)
//! - Mob classes (`mobs.json`)
//! - Game configuration (`config.toml`, optional)
//!
//! Content is turned into house-core types and handed to the registry; the
//! files themselves are never consulted again after startup.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, MobClassLoader, RoomLoader};
