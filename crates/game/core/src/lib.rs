//! Encounter rules and grid state shared by the runtime and offline tools.
//!
//! `game-core` defines the canonical rules (actions, engine, grid state) and
//! exposes pure APIs free of I/O. All state mutation flows through
//! [`engine::GameEngine`]; the procedural generator in [`map`] produces the
//! grids an encounter starts from.
pub mod action;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod map;
pub mod state;

pub use action::{
    Action, ActionError, ActionOutcome, ActionTransition, CharacterUpdate, DestroyAction,
    MoveAction, ReplaceAction, SpawnCharacterAction, SpawnMonsterAction, StatsUpdate,
    UpdateCharacterAction,
};
pub use config::GameConfig;
pub use dice::{DiceError, DiceOutcome, DiceRoll};
pub use engine::GameEngine;
pub use error::{ErrorSeverity, GameError};
pub use map::{
    EncounterSetup, Placement, Reachability, SetupError, begin_encounter, flood_fill_reachable,
    generate_map, is_adjacent, manhattan, neighbors4, place_entities,
};
pub use state::{
    Cell, CharacterSheet, EncounterSnapshot, EntityId, EntityKind, EntityRegistry, EntitySheet,
    GameState, Grid, InitializationError, InvalidCellCode, MonsterSheet, Position, Sheets, Stats,
};
