//! Authoritative encounter state representation.
//!
//! This module owns the grid, sheets, and active-entity registries together
//! with their construction and snapshot helpers. Runtime layers clone or query
//! this state but mutate it exclusively through the engine.
mod error;
mod snapshot;
pub mod types;

pub use error::InitializationError;
pub use snapshot::EncounterSnapshot;
pub use types::{
    Cell, CharacterSheet, EntityId, EntityKind, EntityRegistry, EntitySheet, Grid,
    InvalidCellCode, MonsterSheet, Position, Sheets, Stats,
};

/// Canonical encounter state: grid, sheets and the registries derived from the grid.
///
/// Invariant: every entity token on the grid appears exactly once and is listed
/// in the registry matching its id range; the registries list nothing else.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GameState {
    map: Grid,
    sheets: Sheets,
    registry: EntityRegistry,
}

impl GameState {
    /// Creates a state from a map and sheets, registering every token on the map.
    pub fn new(map: Grid, sheets: Sheets) -> Result<Self, InitializationError> {
        let registry = EntityRegistry::scan(&map)?;
        Ok(Self {
            map,
            sheets,
            registry,
        })
    }

    /// Restores a persisted snapshot.
    ///
    /// The saved active lists must name exactly the tokens present on the map.
    pub fn from_snapshot(snapshot: EncounterSnapshot) -> Result<Self, InitializationError> {
        let EncounterSnapshot {
            map,
            sheets,
            mut active_characters,
            mut active_monsters,
        } = snapshot;

        let state = Self::new(map, sheets)?;

        active_characters.sort_unstable();
        active_monsters.sort_unstable();
        let on_map = state.registry.active_characters();
        if active_characters != on_map {
            return Err(InitializationError::RegistryMismatch {
                kind: EntityKind::Character,
                saved: active_characters,
                on_map,
            });
        }
        let on_map = state.registry.active_monsters();
        if active_monsters != on_map {
            return Err(InitializationError::RegistryMismatch {
                kind: EntityKind::Monster,
                saved: active_monsters,
                on_map,
            });
        }

        Ok(state)
    }

    /// Full copy of the state in its persisted form.
    pub fn snapshot(&self) -> EncounterSnapshot {
        EncounterSnapshot {
            map: self.map.clone(),
            sheets: self.sheets.clone(),
            active_characters: self.registry.active_characters(),
            active_monsters: self.registry.active_monsters(),
        }
    }

    pub fn map(&self) -> &Grid {
        &self.map
    }

    pub fn sheets(&self) -> &Sheets {
        &self.sheets
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Cell at `position`, or `None` when out of bounds.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.map.get(position)
    }

    /// Current position of `entity`, found by scanning the grid.
    pub fn locate(&self, entity: EntityId) -> Option<Position> {
        self.map.find_entity(entity)
    }

    /// Sheet for `entity`, dispatched by id range. A missing slot is a lookup miss.
    pub fn entity_sheet(&self, entity: EntityId) -> Option<EntitySheet<'_>> {
        let slot = entity.slot()?;
        match entity.kind()? {
            EntityKind::Character => self.sheets.characters.get(slot).map(EntitySheet::Character),
            EntityKind::Monster => self.sheets.monsters.get(slot).map(EntitySheet::Monster),
        }
    }

    /// Active character ids, ascending.
    pub fn active_characters(&self) -> Vec<EntityId> {
        self.registry.active_characters()
    }

    /// Active monster ids, ascending.
    pub fn active_monsters(&self) -> Vec<EntityId> {
        self.registry.active_monsters()
    }

    /// Character ids with a sheet that are not on the map, ascending.
    pub fn available_characters(&self) -> Vec<EntityId> {
        (0..self.sheets.characters.len())
            .map_while(EntityId::character)
            .filter(|id| !self.registry.contains(*id))
            .collect()
    }

    /// Monster slots with a sheet whose id is not on the map, ascending.
    pub fn available_monster_slots(&self) -> Vec<usize> {
        (0..self.sheets.monsters.len())
            .map_while(|slot| EntityId::monster(slot).map(|id| (slot, id)))
            .filter(|(_, id)| !self.registry.contains(*id))
            .map(|(slot, _)| slot)
            .collect()
    }

    pub(crate) fn map_mut(&mut self) -> &mut Grid {
        &mut self.map
    }

    pub(crate) fn sheets_mut(&mut self) -> &mut Sheets {
        &mut self.sheets
    }

    pub(crate) fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }
}
