//! Authoritative world registry.
//!
//! The [`House`] owns every room, every mob and the relation recording where
//! each mob currently is. Runtime layers query it freely but mutate it only
//! through the engine (or the validated helpers below while setting up).
//!
//! A `House` is not synchronized. Whoever owns it drives one tick at a time.
mod error;
pub mod types;

use std::collections::BTreeMap;

pub use error::{HouseError, InitializationError, OrphanedExit};
pub use types::{
    Direction, DirectionError, ExitError, HealthDescriptor, Mob, MobCatalog, MobClass, Room,
};

/// Every room, every mob, and who is where.
#[derive(Clone, Debug, Default)]
pub struct House {
    /// The rooms in the house, by name.
    rooms: BTreeMap<String, Room>,

    /// Templates that mobs are instantiated from.
    catalog: MobCatalog,

    /// The mobs in the house, by instance name.
    mobs: BTreeMap<String, Mob>,

    /// Current room of each mob. Mobs without an entry are nowhere yet.
    locations: BTreeMap<String, String>,
}

impl House {
    /// Creates an empty house with no rooms and no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a house from loaded catalogs.
    ///
    /// Rooms sharing a name overwrite each other in iteration order. No mobs
    /// exist until [`House::spawn`] is called.
    pub fn from_catalogs(rooms: impl IntoIterator<Item = Room>, catalog: MobCatalog) -> Self {
        let rooms = rooms
            .into_iter()
            .map(|room| (room.name().to_owned(), room))
            .collect();

        Self {
            rooms,
            catalog,
            mobs: BTreeMap::new(),
            locations: BTreeMap::new(),
        }
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn mob(&self, name: &str) -> Option<&Mob> {
        self.mobs.get(name)
    }

    pub fn mob_count(&self) -> usize {
        self.mobs.len()
    }

    pub fn mob_class(&self, name: &str) -> Option<&MobClass> {
        self.catalog.get(name).map(|class| class.as_ref())
    }

    pub fn catalog(&self) -> &MobCatalog {
        &self.catalog
    }

    /// Name of the room `mob` is in, if it has been placed anywhere.
    pub fn location(&self, mob: &str) -> Option<&str> {
        self.locations.get(mob).map(String::as_str)
    }

    /// Mobs currently in `room`, ordered by name.
    pub fn occupants<'a>(&'a self, room: &'a str) -> impl Iterator<Item = &'a Mob> + 'a {
        self.locations
            .iter()
            .filter(move |(_, location)| location.as_str() == room)
            .filter_map(move |(mob, _)| self.mobs.get(mob))
    }

    /// Instantiates `class` as a new mob called `name`, optionally placing it.
    ///
    /// Nothing is changed unless every name checks out.
    pub fn spawn(
        &mut self,
        class: &str,
        name: &str,
        location: Option<&str>,
    ) -> Result<&Mob, HouseError> {
        if self.mobs.contains_key(name) {
            return Err(HouseError::DuplicateMob(name.to_owned()));
        }
        let class = self
            .catalog
            .get(class)
            .ok_or_else(|| HouseError::UnknownClass(class.to_owned()))?;
        if let Some(room) = location
            && !self.rooms.contains_key(room)
        {
            return Err(HouseError::UnknownRoom(room.to_owned()));
        }

        let mob = class.instantiate(name);
        if let Some(room) = location {
            self.locations.insert(name.to_owned(), room.to_owned());
        }
        Ok(self.mobs.entry(name.to_owned()).or_insert(mob))
    }

    /// Records that `mob` is now in `room`, returning where it was before.
    ///
    /// Both names must already be registered; on error nothing changes.
    pub fn set_location(&mut self, mob: &str, room: &str) -> Result<Option<String>, HouseError> {
        if !self.mobs.contains_key(mob) {
            return Err(HouseError::UnknownMob(mob.to_owned()));
        }
        if !self.rooms.contains_key(room) {
            return Err(HouseError::UnknownRoom(room.to_owned()));
        }

        Ok(self.locations.insert(mob.to_owned(), room.to_owned()))
    }

    /// Checks that every exit leads to a loaded room.
    pub fn validate_exits(&self) -> Result<(), InitializationError> {
        let rooms = &self.rooms;
        let orphans: Vec<OrphanedExit> = self
            .rooms()
            .flat_map(move |room| {
                room.exits()
                    .filter(move |(_, target)| !rooms.contains_key(*target))
                    .map(move |(direction, target)| OrphanedExit {
                        room: room.name().to_owned(),
                        direction,
                        target: target.to_owned(),
                    })
            })
            .collect();

        if orphans.is_empty() {
            Ok(())
        } else {
            Err(InitializationError::DanglingExits(orphans))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    fn house() -> House {
        let rooms = [
            Room::new("Kitchen", "Smells of garlic.").with_exit(Direction::West, "Hall"),
            Room::new("Hall", "Long and dark.").with_exit(Direction::East, "Kitchen"),
        ];
        let catalog = [MobClass::new(
            "Dastardly Auger",
            '🐍',
            "It bores.",
            NonZeroU32::new(10).unwrap(),
        )]
        .into_iter()
        .collect();

        House::from_catalogs(rooms, catalog)
    }

    #[test]
    fn empty_house_has_nothing() {
        let house = House::from_catalogs(Vec::new(), MobCatalog::new());
        assert_eq!(house.room_count(), 0);
        assert_eq!(house.mob_count(), 0);
        assert!(house.validate_exits().is_ok());
    }

    #[test]
    fn later_rooms_overwrite_earlier_ones() {
        let house = House::from_catalogs(
            [Room::new("Attic", "first"), Room::new("Attic", "second")],
            MobCatalog::new(),
        );
        assert_eq!(house.room_count(), 1);
        assert_eq!(house.room("Attic").unwrap().description(), "second");
    }

    #[test]
    fn spawn_registers_mob_without_location() {
        let mut house = house();
        let mob = house.spawn("Dastardly Auger", "larry", None).unwrap();

        assert_eq!(mob.current_hp(), 10);
        assert_eq!(house.mob_count(), 1);
        assert_eq!(house.location("larry"), None);
    }

    #[test]
    fn spawn_rejects_duplicates_and_unknown_names() {
        let mut house = house();
        house.spawn("Dastardly Auger", "larry", Some("Hall")).unwrap();

        assert_eq!(
            house.spawn("Dastardly Auger", "larry", None).unwrap_err(),
            HouseError::DuplicateMob("larry".into())
        );
        assert_eq!(
            house.spawn("Ghost", "casper", None).unwrap_err(),
            HouseError::UnknownClass("Ghost".into())
        );
        assert_eq!(
            house
                .spawn("Dastardly Auger", "moe", Some("Basement"))
                .unwrap_err(),
            HouseError::UnknownRoom("Basement".into())
        );
        assert!(house.mob("moe").is_none());
        assert_eq!(house.location("larry"), Some("Hall"));
    }

    #[test]
    fn set_location_is_all_or_nothing() {
        let mut house = house();
        house.spawn("Dastardly Auger", "larry", Some("Hall")).unwrap();

        assert!(house.set_location("larry", "Basement").is_err());
        assert!(house.set_location("ghost", "Kitchen").is_err());
        assert_eq!(house.location("larry"), Some("Hall"));

        let previous = house.set_location("larry", "Kitchen").unwrap();
        assert_eq!(previous.as_deref(), Some("Hall"));
        assert_eq!(house.location("larry"), Some("Kitchen"));
    }

    #[test]
    fn occupants_lists_mobs_in_room() {
        let mut house = house();
        house.spawn("Dastardly Auger", "larry", Some("Hall")).unwrap();
        house.spawn("Dastardly Auger", "moe", Some("Kitchen")).unwrap();
        house.spawn("Dastardly Auger", "curly", Some("Hall")).unwrap();

        let names: Vec<&str> = house.occupants("Hall").map(Mob::name).collect();
        assert_eq!(names, ["curly", "larry"]);
    }

    #[test]
    fn validate_exits_enumerates_orphans() {
        let house = House::from_catalogs(
            [
                Room::new("Kitchen", "")
                    .with_exit(Direction::North, "Pantry")
                    .with_exit(Direction::Down, "Cellar"),
                Room::new("Cellar", "").with_exit(Direction::Up, "Kitchen"),
                Room::new("Porch", "").with_exit(Direction::South, "Garden"),
            ],
            MobCatalog::new(),
        );

        let InitializationError::DanglingExits(orphans) = house.validate_exits().unwrap_err();
        assert_eq!(orphans.len(), 2);
        assert!(orphans.contains(&OrphanedExit {
            room: "Kitchen".into(),
            direction: Direction::North,
            target: "Pantry".into(),
        }));
        assert!(orphans.iter().any(|orphan| orphan.target == "Garden"));
    }
}
