//! Common error infrastructure for arena-core.
//!
//! Domain errors (`CatalogError`, `SkillError`, `ArenaError`) live next to the
//! code that raises them. This module only carries the shared classification
//! so hosts can decide how to surface or recover from a failure.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry or pick another command
/// - **Validation**: invalid input or data, reject without retry
/// - **Internal**: an invariant of the fight was broken, indicates a bug
/// - **Fatal**: the fight cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable, machine-readable code (e.g. `"CATALOG_NOT_FOUND"`).
    fn error_code(&self) -> &'static str;

    /// Convenience wrapper over [`ErrorSeverity::is_recoverable`].
    fn is_recoverable(&self) -> bool {
        self.severity().is_recoverable()
    }
}
