//! State construction errors.
//!
//! Errors raised while building a [`GameState`](super::GameState) from a map,
//! sheets, or a persisted snapshot. A state that constructs successfully
//! satisfies the grid/registry invariants.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, EntityKind, Position};

/// Errors that occur while constructing or restoring game state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    /// The grid holds a different number of rows than its declared height.
    #[error("map declares {expected} rows but holds {actual}")]
    RowCountMismatch {
        /// Declared height.
        expected: u32,
        /// Rows present.
        actual: usize,
    },

    /// A grid row holds a different number of cells than the declared width.
    #[error("map row {row} holds {actual} cells, expected {expected}")]
    RowWidthMismatch {
        /// Offending row index.
        row: usize,
        /// Declared width.
        expected: u32,
        /// Cells present.
        actual: usize,
    },

    /// An entity token appears on more than one cell.
    #[error("entity {entity} appears at both {first} and {second}")]
    DuplicateEntity {
        /// Duplicated id.
        entity: EntityId,
        /// First occurrence in row-major order.
        first: Position,
        /// Second occurrence.
        second: Position,
    },

    /// Persisted active ids disagree with the tokens on the grid.
    #[error("saved active {kind} list {saved:?} does not match the map {on_map:?}")]
    RegistryMismatch {
        /// Which registry disagrees.
        kind: EntityKind,
        /// Ids listed in the snapshot.
        saved: Vec<EntityId>,
        /// Ids found on the grid.
        on_map: Vec<EntityId>,
    },
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            RowCountMismatch { .. } => "STATE_ROW_COUNT_MISMATCH",
            RowWidthMismatch { .. } => "STATE_ROW_WIDTH_MISMATCH",
            DuplicateEntity { .. } => "STATE_DUPLICATE_ENTITY",
            RegistryMismatch { .. } => "STATE_REGISTRY_MISMATCH",
        }
    }
}
