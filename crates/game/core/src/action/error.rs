//! Action execution errors.
//!
//! Every engine operation fails with one of these named precondition
//! violations. Variant names double as the client-visible error codes.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Cell, EntityId, Position};

/// Errors raised while validating or applying an action.
///
/// Each variant identifies one checkable precondition. A rejected action
/// never leaves partial changes behind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("position {position} is outside the map")]
    OutOfBounds { position: Position },

    #[error("destination {position} holds {cell} and cannot be entered")]
    TargetBlockedOrOccupied { position: Position, cell: Cell },

    #[error("entity {entity} is not on the map")]
    EntityNotFoundOnMap { entity: EntityId },

    #[error("attacker {attacker} or target {target} is not on the map")]
    AttackerOrTargetNotFound { attacker: EntityId, target: EntityId },

    #[error("{attacker} and {target} are {distance} apart, not adjacent")]
    NotAdjacent {
        attacker: EntityId,
        target: EntityId,
        distance: u32,
    },

    #[error("expected {target} at {position}, found {found}")]
    TargetMismatch {
        target: EntityId,
        position: Position,
        found: Cell,
    },

    #[error("character {entity} is already on the map")]
    CharacterAlreadyActive { entity: EntityId },

    #[error("location {position} holds {cell}")]
    LocationBlockedOrOccupied { position: Position, cell: Cell },

    #[error("no character sheet at index {index}")]
    CharacterIndexMissing { index: usize },

    #[error("every monster is already on the map")]
    NoAvailableMonsters,

    #[error("nothing to destroy at {position}")]
    EmptyCell { position: Position },

    #[error("{cell} at {position} cannot be destroyed")]
    CannotDestroyWaterOrHole { position: Position, cell: Cell },

    #[error("{entity} is not a character id")]
    NotACharacterId { entity: EntityId },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            TargetBlockedOrOccupied { .. }
            | LocationBlockedOrOccupied { .. }
            | NotAdjacent { .. }
            | CharacterAlreadyActive { .. }
            | NoAvailableMonsters => ErrorSeverity::Recoverable,
            TargetMismatch { .. } => ErrorSeverity::Internal,
            OutOfBounds { .. }
            | EntityNotFoundOnMap { .. }
            | AttackerOrTargetNotFound { .. }
            | CharacterIndexMissing { .. }
            | EmptyCell { .. }
            | CannotDestroyWaterOrHole { .. }
            | NotACharacterId { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        self.into()
    }
}
