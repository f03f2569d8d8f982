//! Mob class catalog loader.

use std::collections::HashSet;
use std::num::NonZeroU32;
use std::path::Path;

use house_core::{MobCatalog, MobClass};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Mob class record as written in `mobs.json`.
#[derive(Debug, Clone, Deserialize)]
struct MobClassRecord {
    class: String,
    /// Unicode code point of the display glyph.
    avatar: u32,
    #[serde(default)]
    desc: String,
    max_hp: u32,
}

impl MobClassRecord {
    fn into_class(self) -> LoadResult<MobClass> {
        let avatar = char::from_u32(self.avatar).ok_or_else(|| {
            anyhow::anyhow!(
                "Mob class '{}' has invalid avatar code point {}",
                self.class,
                self.avatar
            )
        })?;
        let max_hp = NonZeroU32::new(self.max_hp)
            .ok_or_else(|| anyhow::anyhow!("Mob class '{}' must have max_hp > 0", self.class))?;

        Ok(MobClass::new(self.class, avatar, self.desc, max_hp))
    }
}

/// Loader for the mob class catalog.
pub struct MobClassLoader;

impl MobClassLoader {
    /// Load mob classes from a JSON file containing an array of class records.
    pub fn load(path: &Path) -> LoadResult<MobCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!(
                "Error parsing mob class description file {}: {}",
                path.display(),
                e
            )
        })
    }

    /// Parse mob classes from JSON text.
    pub fn parse(content: &str) -> LoadResult<MobCatalog> {
        let records: Vec<MobClassRecord> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse mob class JSON: {}", e))?;

        let mut seen = HashSet::new();
        let mut catalog = MobCatalog::new();
        for record in records {
            if !seen.insert(record.class.clone()) {
                tracing::warn!(class = %record.class, "Duplicate mob class overwrites an earlier one");
            }
            catalog.insert(record.into_class()?);
        }

        Ok(catalog)
    }
}
