//! Common error infrastructure for house-core.
//!
//! Domain-specific errors (e.g. `MoveError`, `ExitError`) are defined in their
//! respective modules alongside the operations they validate. This module only
//! provides the classification shared by all of them.

/// Severity level of an error, used for reporting and recovery strategies.
///
/// - **Validation**: the request referenced something that does not exist or is
///   malformed. When a player issued it, the player made a mistake.
/// - **Internal**: the world itself is inconsistent (a scripted action pointing at
///   stale data, a dangling exit). These indicate bugs in content or scripts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not be retried without changes.
    Validation,

    /// Unexpected inconsistency between the registry and its content.
    Internal,
}

/// Common trait for all house-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who is at fault, not by impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
