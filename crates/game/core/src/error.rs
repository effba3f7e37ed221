//! Classification shared by every game-core error.
//!
//! The concrete enums (`ActionError`, `InitializationError`, `SetupError`,
//! `DiceError`) live next to the operations that raise them.

/// How a caller should treat a rejected request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same request may succeed once the grid changes (occupied cell, target too far).
    Recoverable,
    /// Malformed input such as out-of-bounds coordinates or an unknown slot.
    Validation,
    /// The grid and registries disagree.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Implemented by every game-core error.
///
/// Request layers surface [`GameError::error_code`] to clients verbatim, so
/// codes are stable identifiers and never reworded.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant.
    fn error_code(&self) -> &'static str;
}
