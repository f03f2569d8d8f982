//! Content factory for building a house from data files.

use std::path::{Path, PathBuf};

use house_core::{GameConfig, House, MobCatalog, Room};

use crate::loaders::{ConfigLoader, LoadResult, MobClassLoader, RoomLoader};

/// Content factory that loads all house content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── rooms.json
/// └── mobs.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const ROOMS_FILE: &'static str = "rooms.json";
    pub const MOBS_FILE: &'static str = "mobs.json";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load the room catalog from `rooms.json`.
    pub fn load_rooms(&self) -> LoadResult<Vec<Room>> {
        RoomLoader::load(&self.data_dir.join(Self::ROOMS_FILE))
    }

    /// Load the mob class catalog from `mobs.json`.
    pub fn load_mob_classes(&self) -> LoadResult<MobCatalog> {
        MobClassLoader::load(&self.data_dir.join(Self::MOBS_FILE))
    }

    /// Load both catalogs and build a house from them.
    ///
    /// Fails if either catalog cannot be read or parsed, or if any exit leads
    /// to a room that was never loaded. No mobs are spawned.
    pub fn build_house(&self) -> LoadResult<House> {
        let rooms = self.load_rooms()?;
        tracing::info!("{} room(s) loaded.", rooms.len());

        let catalog = self.load_mob_classes()?;
        tracing::info!("{} mob class(es) loaded.", catalog.len());

        let house = House::from_catalogs(rooms, catalog);
        house
            .validate_exits()
            .map_err(|e| anyhow::anyhow!("Invalid room catalog in {}: {}", self.data_dir.display(), e))?;

        Ok(house)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_catalogs(dir: &Path, rooms: &str, mobs: &str) {
        std::fs::write(dir.join(ContentFactory::ROOMS_FILE), rooms).unwrap();
        std::fs::write(dir.join(ContentFactory::MOBS_FILE), mobs).unwrap();
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn test_empty_catalogs_build_empty_house() {
        let dir = tempfile::tempdir().unwrap();
        write_catalogs(dir.path(), "[]", "[]");

        let house = ContentFactory::new(dir.path()).build_house().unwrap();
        assert_eq!(house.room_count(), 0);
        assert_eq!(house.mob_count(), 0);
    }

    #[test]
    fn test_build_house() {
        let dir = tempfile::tempdir().unwrap();
        write_catalogs(
            dir.path(),
            r#"[
                {"name": "Kitchen", "desc": "", "exits": {"west": "Hall"}},
                {"name": "Hall", "desc": "", "exits": {"east": "Kitchen"}}
            ]"#,
            r#"[{"class": "Rat", "avatar": 128000, "desc": "", "max_hp": 3}]"#,
        );

        let mut house = ContentFactory::new(dir.path()).build_house().unwrap();
        assert_eq!(house.room_count(), 2);
        assert!(house.mob_class("Rat").is_some());

        house.spawn("Rat", "ratty", Some("Kitchen")).unwrap();
        assert_eq!(house.location("ratty"), Some("Kitchen"));
    }

    #[test]
    fn test_dangling_exit_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        write_catalogs(
            dir.path(),
            r#"[{"name": "Kitchen", "desc": "", "exits": {"down": "Cellar"}}]"#,
            "[]",
        );

        let err = ContentFactory::new(dir.path()).build_house().unwrap_err();
        assert!(err.to_string().contains("Cellar"));
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ContentFactory::ROOMS_FILE), "[]").unwrap();

        assert!(ContentFactory::new(dir.path()).build_house().is_err());
    }
}
