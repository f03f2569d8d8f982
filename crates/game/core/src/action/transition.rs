use crate::error::GameError;
use crate::state::House;

/// Defines how a concrete action variant reads and mutates the house.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the mutation. `pre_validate` runs
/// against the untouched house, so an action that fails there leaves no trace.
pub trait ActionTransition {
    type Error: GameError;
    type Result;

    /// Validates pre-conditions using the house **before** mutation.
    fn pre_validate(&self, _house: &House) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action. Implementations may assume `pre_validate` passed.
    fn apply(&self, house: &mut House) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the house **after** mutation.
    fn post_validate(&self, _house: &House) -> Result<(), Self::Error> {
        Ok(())
    }
}
