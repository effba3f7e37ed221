//! Action execution pipeline.
//!
//! The [`GameEngine`] is the sole mutator of [`GameState`]. Every operation
//! runs its transition through `pre_validate` then `apply`; the first failing
//! precondition is returned and the state is left untouched.

use rand::Rng;

use crate::action::{
    Action, ActionError, ActionOutcome, ActionTransition, CharacterUpdate, DestroyAction,
    MoveAction, ReplaceAction, SpawnCharacterAction, SpawnMonsterAction, UpdateCharacterAction,
};
use crate::state::{EntityId, GameState, Position};

/// Runs a transition through both phases.
#[inline]
fn drive_transition<T>(transition: &T, state: &mut GameState) -> Result<T::Result, ActionError>
where
    T: ActionTransition,
{
    transition.pre_validate(state)?;
    transition.apply(state)
}

/// Game engine borrowing the state it mutates.
///
/// The engine performs no locking; callers serialize access to a state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action. `rng` is consulted only by monster spawns.
    pub fn execute<R>(&mut self, action: &Action, rng: &mut R) -> Result<ActionOutcome, ActionError>
    where
        R: Rng + ?Sized,
    {
        match action {
            Action::Move(transition) => drive_transition(transition, self.state),
            Action::Replace(transition) => drive_transition(transition, self.state),
            Action::SpawnCharacter(transition) => drive_transition(transition, self.state),
            Action::SpawnMonster { position } => {
                drive_transition(&SpawnMonsterAction::roll(*position, rng), self.state)
            }
            Action::Destroy(transition) => drive_transition(transition, self.state),
            Action::UpdateCharacter(transition) => drive_transition(transition, self.state),
        }
    }

    pub fn move_entity(
        &mut self,
        entity: EntityId,
        destination: Position,
    ) -> Result<ActionOutcome, ActionError> {
        drive_transition(&MoveAction::new(entity, destination), self.state)
    }

    /// Melee resolution: `attacker` defeats the adjacent `target` and takes its square.
    pub fn replace(
        &mut self,
        attacker: EntityId,
        target: EntityId,
    ) -> Result<ActionOutcome, ActionError> {
        drive_transition(&ReplaceAction::new(attacker, target), self.state)
    }

    pub fn spawn_character(
        &mut self,
        index: usize,
        position: Position,
    ) -> Result<ActionOutcome, ActionError> {
        drive_transition(&SpawnCharacterAction::new(index, position), self.state)
    }

    pub fn spawn_monster_random<R>(
        &mut self,
        position: Position,
        rng: &mut R,
    ) -> Result<ActionOutcome, ActionError>
    where
        R: Rng + ?Sized,
    {
        drive_transition(&SpawnMonsterAction::roll(position, rng), self.state)
    }

    pub fn destroy_at(&mut self, position: Position) -> Result<ActionOutcome, ActionError> {
        drive_transition(&DestroyAction::new(position), self.state)
    }

    pub fn update_character(
        &mut self,
        entity: EntityId,
        update: CharacterUpdate,
    ) -> Result<ActionOutcome, ActionError> {
        drive_transition(&UpdateCharacterAction::new(entity, update), self.state)
    }
}
