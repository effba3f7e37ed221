use crate::state::{Cell, EntityId, GameState, Position};

use super::{ActionError, ActionOutcome, ActionTransition};

/// Relocates an active entity to any free in-bounds cell.
///
/// Distance is not restricted; path legality is the caller's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub entity: EntityId,
    pub destination: Position,
}

impl MoveAction {
    pub fn new(entity: EntityId, destination: Position) -> Self {
        Self {
            entity,
            destination,
        }
    }

    fn origin(&self, state: &GameState) -> Result<Position, ActionError> {
        state
            .locate(self.entity)
            .ok_or(ActionError::EntityNotFoundOnMap {
                entity: self.entity,
            })
    }
}

impl ActionTransition for MoveAction {
    type Result = ActionOutcome;

    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        let cell = state
            .cell(self.destination)
            .ok_or(ActionError::OutOfBounds {
                position: self.destination,
            })?;
        if !cell.is_free() {
            return Err(ActionError::TargetBlockedOrOccupied {
                position: self.destination,
                cell,
            });
        }
        self.origin(state)?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<ActionOutcome, ActionError> {
        let from = self.origin(state)?;
        let map = state.map_mut();
        map.set(from, Cell::Empty);
        map.set(self.destination, Cell::Entity(self.entity));

        Ok(ActionOutcome::Moved {
            entity: self.entity,
            from,
            to: self.destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::tests::state_with;

    fn run(action: MoveAction, state: &mut GameState) -> Result<ActionOutcome, ActionError> {
        action.pre_validate(state)?;
        action.apply(state)
    }

    #[test]
    fn moves_any_distance() {
        let mut state = state_with(5, 5, &[((0, 0), Cell::Entity(EntityId(10)))]);

        let outcome = run(MoveAction::new(EntityId(10), Position::new(4, 3)), &mut state)
            .expect("free destination");

        assert_eq!(
            outcome,
            ActionOutcome::Moved {
                entity: EntityId(10),
                from: Position::new(0, 0),
                to: Position::new(4, 3),
            }
        );
        assert_eq!(state.cell(Position::new(0, 0)), Some(Cell::Empty));
        assert_eq!(
            state.cell(Position::new(4, 3)),
            Some(Cell::Entity(EntityId(10)))
        );
    }

    #[test]
    fn checks_bounds_before_presence() {
        let mut state = state_with(3, 3, &[]);
        let error = run(MoveAction::new(EntityId(10), Position::new(3, 0)), &mut state)
            .expect_err("outside the map");
        assert!(matches!(error, ActionError::OutOfBounds { .. }));
    }

    #[test]
    fn rejects_blocked_and_occupied_destinations() {
        let mut state = state_with(
            3,
            3,
            &[
                ((0, 0), Cell::Entity(EntityId(10))),
                ((1, 0), Cell::Tree),
                ((2, 0), Cell::Entity(EntityId(100))),
            ],
        );
        let before = state.clone();

        for x in [1, 2] {
            let error = run(MoveAction::new(EntityId(10), Position::new(x, 0)), &mut state)
                .expect_err("destination taken");
            assert!(matches!(error, ActionError::TargetBlockedOrOccupied { .. }));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn rejects_entities_missing_from_map() {
        let mut state = state_with(3, 3, &[]);
        let error = run(MoveAction::new(EntityId(11), Position::new(1, 1)), &mut state)
            .expect_err("not on map");
        assert_eq!(
            error,
            ActionError::EntityNotFoundOnMap {
                entity: EntityId(11)
            }
        );
    }
}
