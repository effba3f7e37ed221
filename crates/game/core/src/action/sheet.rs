//! Partial character sheet updates.

use crate::state::{CharacterSheet, EntityId, GameState, Stats};

use super::{ActionError, ActionOutcome, ActionTransition};

/// Field-by-field stat changes; `None` keeps the current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct StatsUpdate {
    pub strength: Option<i32>,
    pub dexterity: Option<i32>,
    pub constitution: Option<i32>,
    pub intelligence: Option<i32>,
    pub wisdom: Option<i32>,
    pub charisma: Option<i32>,
}

impl StatsUpdate {
    pub fn apply_to(&self, stats: &mut Stats) {
        merge(&mut stats.strength, self.strength);
        merge(&mut stats.dexterity, self.dexterity);
        merge(&mut stats.constitution, self.constitution);
        merge(&mut stats.intelligence, self.intelligence);
        merge(&mut stats.wisdom, self.wisdom);
        merge(&mut stats.charisma, self.charisma);
    }
}

/// Named optional fields of a character sheet. Decoding rejects unknown fields.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct CharacterUpdate {
    pub name: Option<String>,
    pub class: Option<String>,
    pub race: Option<String>,
    pub level: Option<u32>,
    pub xp: Option<u32>,
    pub stats: Option<StatsUpdate>,
    pub health: Option<i32>,
    pub description: Option<String>,
}

impl CharacterUpdate {
    /// Merges the present fields into `sheet`, stats field-by-field.
    pub fn apply_to(&self, sheet: &mut CharacterSheet) {
        merge(&mut sheet.name, self.name.clone());
        merge(&mut sheet.class, self.class.clone());
        merge(&mut sheet.race, self.race.clone());
        merge(&mut sheet.level, self.level);
        merge(&mut sheet.xp, self.xp);
        if let Some(stats) = &self.stats {
            stats.apply_to(&mut sheet.stats);
        }
        merge(&mut sheet.health, self.health);
        merge(&mut sheet.description, self.description.clone());
    }
}

fn merge<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Applies a [`CharacterUpdate`] to the sheet behind a character id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateCharacterAction {
    pub entity: EntityId,
    pub update: CharacterUpdate,
}

impl UpdateCharacterAction {
    pub fn new(entity: EntityId, update: CharacterUpdate) -> Self {
        Self { entity, update }
    }

    fn slot(&self, state: &GameState) -> Result<usize, ActionError> {
        if !self.entity.is_character() {
            return Err(ActionError::NotACharacterId {
                entity: self.entity,
            });
        }
        let index = self.entity.slot().ok_or(ActionError::NotACharacterId {
            entity: self.entity,
        })?;
        if index >= state.sheets().characters.len() {
            return Err(ActionError::CharacterIndexMissing { index });
        }
        Ok(index)
    }
}

impl ActionTransition for UpdateCharacterAction {
    type Result = ActionOutcome;

    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        self.slot(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState) -> Result<ActionOutcome, ActionError> {
        let index = self.slot(state)?;
        let sheet = state
            .sheets_mut()
            .characters
            .get_mut(index)
            .ok_or(ActionError::CharacterIndexMissing { index })?;
        self.update.apply_to(sheet);

        Ok(ActionOutcome::CharacterUpdated {
            entity: self.entity,
        })
    }
}
