//! Encounter actions.
//!
//! Each operation the engine exposes is a small command struct implementing
//! [`ActionTransition`]. `pre_validate` runs every precondition in a fixed
//! order and reports the first failure; `apply` mutates the state only after
//! every lookup it needs has succeeded, so a rejected action leaves no trace.
//!
//! # Module Structure
//!
//! - `movement`: [`MoveAction`]
//! - `combat`: [`ReplaceAction`] (melee resolution)
//! - `spawn`: [`SpawnCharacterAction`], [`SpawnMonsterAction`]
//! - `destroy`: [`DestroyAction`]
//! - `sheet`: [`UpdateCharacterAction`] and the typed partial update
mod combat;
mod destroy;
mod error;
mod movement;
mod sheet;
mod spawn;

pub use combat::ReplaceAction;
pub use destroy::DestroyAction;
pub use error::ActionError;
pub use movement::MoveAction;
pub use sheet::{CharacterUpdate, StatsUpdate, UpdateCharacterAction};
pub use spawn::{SpawnCharacterAction, SpawnMonsterAction};

use crate::state::{Cell, EntityId, GameState, Position};

/// Defines how a concrete action validates against and mutates game state.
pub trait ActionTransition {
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError>;

    /// Applies the action by mutating the game state directly. Implementations
    /// re-resolve what they need and fail before their first write.
    fn apply(&self, state: &mut GameState) -> Result<Self::Result, ActionError>;
}

/// Requests the engine can execute.
///
/// Monster spawns carry no random draw; the engine supplies it at execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Replace(ReplaceAction),
    SpawnCharacter(SpawnCharacterAction),
    SpawnMonster { position: Position },
    Destroy(DestroyAction),
    UpdateCharacter(UpdateCharacterAction),
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Replace(_) => "replace",
            Action::SpawnCharacter(_) => "spawn_character",
            Action::SpawnMonster { .. } => "spawn_monster",
            Action::Destroy(_) => "destroy",
            Action::UpdateCharacter(_) => "update_character",
        }
    }
}

/// What a successful action changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum ActionOutcome {
    Moved {
        entity: EntityId,
        from: Position,
        to: Position,
    },
    Replaced {
        attacker: EntityId,
        defeated: EntityId,
        position: Position,
    },
    Spawned {
        entity: EntityId,
        position: Position,
    },
    Destroyed {
        position: Position,
        previous: Cell,
    },
    CharacterUpdated {
        entity: EntityId,
    },
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::state::{CharacterSheet, Grid, MonsterSheet, Sheets};

    use super::*;

    /// An empty `width` × `height` state with the requested sheet counts.
    pub(crate) fn state_with_sheets(
        width: u32,
        height: u32,
        characters: usize,
        monsters: usize,
    ) -> GameState {
        let sheets = Sheets::new(
            vec![CharacterSheet::default(); characters],
            vec![MonsterSheet::default(); monsters],
        );
        GameState::new(Grid::new(width, height), sheets).expect("empty grid is valid")
    }

    /// A state with four sheets of each kind and the listed cells painted in.
    pub(crate) fn state_with(width: u32, height: u32, cells: &[((i32, i32), Cell)]) -> GameState {
        let mut map = Grid::new(width, height);
        for &((x, y), cell) in cells {
            assert!(map.set(Position::new(x, y), cell), "cell inside grid");
        }
        let sheets = Sheets::new(
            vec![CharacterSheet::default(); 4],
            vec![MonsterSheet::default(); 4],
        );
        GameState::new(map, sheets).expect("fixture is consistent")
    }
}
