//! Room catalog loader.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use house_core::{Direction, Room};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Room record as written in `rooms.json`.
///
/// Exit keys are direction tokens; they are canonicalized while loading.
#[derive(Debug, Clone, Deserialize)]
struct RoomRecord {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    exits: BTreeMap<String, String>,
}

impl RoomRecord {
    fn into_room(self) -> LoadResult<Room> {
        let mut room = Room::new(self.name, self.desc);
        for (token, destination) in self.exits {
            let direction = Direction::parse(&token).map_err(|e| {
                anyhow::anyhow!("Invalid exit in room '{}': {}", room.name(), e)
            })?;
            room = room.with_exit(direction, destination);
        }
        Ok(room)
    }
}

/// Loader for the room catalog.
pub struct RoomLoader;

impl RoomLoader {
    /// Load rooms from a JSON file containing an array of room records.
    ///
    /// # Returns
    ///
    /// Returns rooms in file order. Later rooms with a repeated name will
    /// overwrite earlier ones once inserted into a house.
    pub fn load(path: &Path) -> LoadResult<Vec<Room>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Error parsing room description file {}: {}", path.display(), e)
        })
    }

    /// Parse rooms from JSON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Room>> {
        let records: Vec<RoomRecord> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse room catalog JSON: {}", e))?;

        let mut seen = HashSet::new();
        let mut rooms = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.name.clone()) {
                tracing::warn!(room = %record.name, "Duplicate room record overwrites an earlier one");
            }
            rooms.push(record.into_room()?);
        }

        Ok(rooms)
    }
}
