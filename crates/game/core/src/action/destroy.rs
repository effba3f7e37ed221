use crate::state::{Cell, GameState, Position};

use super::{ActionError, ActionOutcome, ActionTransition};

/// Clears a cell to empty, removing terrain or defeating the entity standing there.
///
/// Water and holes are permanent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestroyAction {
    pub position: Position,
}

impl DestroyAction {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    fn target(&self, state: &GameState) -> Result<Cell, ActionError> {
        let cell = state.cell(self.position).ok_or(ActionError::OutOfBounds {
            position: self.position,
        })?;
        match cell {
            Cell::Empty => Err(ActionError::EmptyCell {
                position: self.position,
            }),
            Cell::Water | Cell::Hole => Err(ActionError::CannotDestroyWaterOrHole {
                position: self.position,
                cell,
            }),
            other => Ok(other),
        }
    }
}

impl ActionTransition for DestroyAction {
    type Result = ActionOutcome;

    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        self.target(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState) -> Result<ActionOutcome, ActionError> {
        let previous = self.target(state)?;
        if let Some(entity) = previous.entity() {
            state.registry_mut().remove(entity);
        }
        state.map_mut().set(self.position, Cell::Empty);

        Ok(ActionOutcome::Destroyed {
            position: self.position,
            previous,
        })
    }
}
