//! Spawning characters by sheet index and monsters by random slot.

use rand::Rng;

use crate::state::{Cell, EntityId, GameState, Position};

use super::{ActionError, ActionOutcome, ActionTransition};

/// Checks that `position` exists and is free to receive a new token.
fn free_location(state: &GameState, position: Position) -> Result<(), ActionError> {
    let cell = state
        .cell(position)
        .ok_or(ActionError::OutOfBounds { position })?;
    if !cell.is_free() {
        return Err(ActionError::LocationBlockedOrOccupied { position, cell });
    }
    Ok(())
}

fn place(state: &mut GameState, entity: EntityId, position: Position) -> ActionOutcome {
    state.map_mut().set(position, Cell::Entity(entity));
    state.registry_mut().insert(entity);
    ActionOutcome::Spawned { entity, position }
}

/// Places the character whose sheet sits at `index` onto the map as id `10 + index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnCharacterAction {
    pub index: usize,
    pub position: Position,
}

impl SpawnCharacterAction {
    pub fn new(index: usize, position: Position) -> Self {
        Self { index, position }
    }
}

impl ActionTransition for SpawnCharacterAction {
    type Result = ActionOutcome;

    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        if state.cell(self.position).is_none() {
            return Err(ActionError::OutOfBounds {
                position: self.position,
            });
        }

        let entity = EntityId::character(self.index);
        if let Some(entity) = entity.filter(|id| state.registry().contains(*id)) {
            return Err(ActionError::CharacterAlreadyActive { entity });
        }

        free_location(state, self.position)?;

        if entity.is_none() || self.index >= state.sheets().characters.len() {
            return Err(ActionError::CharacterIndexMissing { index: self.index });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<ActionOutcome, ActionError> {
        let entity = EntityId::character(self.index)
            .ok_or(ActionError::CharacterIndexMissing { index: self.index })?;
        Ok(place(state, entity, self.position))
    }
}

/// Places a random inactive monster onto the map.
///
/// `roll` is a uniform draw in `[0, 1)` that selects among the inactive
/// monster slots at apply time; [`SpawnMonsterAction::roll`] draws it from an
/// injected random source.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnMonsterAction {
    pub position: Position,
    pub roll: f64,
}

impl SpawnMonsterAction {
    pub fn new(position: Position, roll: f64) -> Self {
        Self { position, roll }
    }

    pub fn roll<R>(position: Position, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::new(position, rng.gen_range(0.0..1.0))
    }

    fn choose(&self, state: &GameState) -> Result<EntityId, ActionError> {
        let slots = state.available_monster_slots();
        if slots.is_empty() {
            return Err(ActionError::NoAvailableMonsters);
        }
        let pick = ((self.roll.clamp(0.0, 1.0) * slots.len() as f64) as usize).min(slots.len() - 1);
        slots
            .get(pick)
            .copied()
            .and_then(EntityId::monster)
            .ok_or(ActionError::NoAvailableMonsters)
    }
}

impl ActionTransition for SpawnMonsterAction {
    type Result = ActionOutcome;

    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        free_location(state, self.position)?;
        self.choose(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState) -> Result<ActionOutcome, ActionError> {
        let entity = self.choose(state)?;
        Ok(place(state, entity, self.position))
    }
}
