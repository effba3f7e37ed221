use crate::map::manhattan;
use crate::state::{Cell, EntityId, GameState, Position};

use super::{ActionError, ActionOutcome, ActionTransition};

/// Melee resolution: the attacker defeats an adjacent target and takes its square.
///
/// There is no damage model; the target always leaves the encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplaceAction {
    pub attacker: EntityId,
    pub target: EntityId,
}

/// Resolved positions of both participants.
struct Engagement {
    attacker: Position,
    target: Position,
}

impl ReplaceAction {
    pub fn new(attacker: EntityId, target: EntityId) -> Self {
        Self { attacker, target }
    }

    fn engage(&self, state: &GameState) -> Result<Engagement, ActionError> {
        let (Some(attacker), Some(target)) = (state.locate(self.attacker), state.locate(self.target))
        else {
            return Err(ActionError::AttackerOrTargetNotFound {
                attacker: self.attacker,
                target: self.target,
            });
        };

        let distance = manhattan(attacker, target);
        if distance != 1 {
            return Err(ActionError::NotAdjacent {
                attacker: self.attacker,
                target: self.target,
                distance,
            });
        }

        let found = state.cell(target).unwrap_or_default();
        if found != Cell::Entity(self.target) {
            return Err(ActionError::TargetMismatch {
                target: self.target,
                position: target,
                found,
            });
        }

        Ok(Engagement { attacker, target })
    }
}

impl ActionTransition for ReplaceAction {
    type Result = ActionOutcome;

    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        self.engage(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState) -> Result<ActionOutcome, ActionError> {
        let Engagement { attacker, target } = self.engage(state)?;

        let map = state.map_mut();
        map.set(attacker, Cell::Empty);
        map.set(target, Cell::Entity(self.attacker));
        state.registry_mut().remove(self.target);

        Ok(ActionOutcome::Replaced {
            attacker: self.attacker,
            defeated: self.target,
            position: target,
        })
    }
}
