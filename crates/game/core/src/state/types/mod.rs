//! Entity types owned by the [`crate::House`].
mod direction;
mod mob;
mod room;

pub use direction::{Direction, DirectionError};
pub use mob::{HealthDescriptor, Mob, MobCatalog, MobClass};
pub use room::{ExitError, Room};
