use std::collections::{BTreeMap, BTreeSet};

use crate::state::InitializationError;

use super::{EntityId, EntityKind, Grid, Position};

/// Active character and monster ids, kept in lockstep with grid contents.
///
/// Only the engine mutates a registry, always in the same step as the grid
/// write that places or removes the token.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EntityRegistry {
    characters: BTreeSet<EntityId>,
    monsters: BTreeSet<EntityId>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the registry from the tokens present on `grid`.
    ///
    /// Fails when a token appears on more than one cell.
    pub fn scan(grid: &Grid) -> Result<Self, InitializationError> {
        let mut seen: BTreeMap<EntityId, Position> = BTreeMap::new();
        let mut registry = Self::new();
        for (position, cell) in grid.cells() {
            let Some(id) = cell.entity() else {
                continue;
            };
            if let Some(first) = seen.insert(id, position) {
                return Err(InitializationError::DuplicateEntity {
                    entity: id,
                    first,
                    second: position,
                });
            }
            registry.insert(id);
        }
        Ok(registry)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        match id.kind() {
            Some(EntityKind::Character) => self.characters.contains(&id),
            Some(EntityKind::Monster) => self.monsters.contains(&id),
            None => false,
        }
    }

    /// Adds `id` to the registry matching its range. Returns `false` if it was
    /// already present or is not an entity id.
    pub fn insert(&mut self, id: EntityId) -> bool {
        match id.kind() {
            Some(EntityKind::Character) => self.characters.insert(id),
            Some(EntityKind::Monster) => self.monsters.insert(id),
            None => false,
        }
    }

    /// Removes `id` from the registry matching its range.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match id.kind() {
            Some(EntityKind::Character) => self.characters.remove(&id),
            Some(EntityKind::Monster) => self.monsters.remove(&id),
            None => false,
        }
    }

    /// Active character ids, ascending.
    pub fn active_characters(&self) -> Vec<EntityId> {
        self.characters.iter().copied().collect()
    }

    /// Active monster ids, ascending.
    pub fn active_monsters(&self) -> Vec<EntityId> {
        self.monsters.iter().copied().collect()
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }
}
