//! Fresh encounter setup: generate a map, seat the starting party and monsters.

use rand::Rng;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, GameState, InitializationError, Sheets};

use super::generator::{Placement, generate_map, place_entities};

/// Dimensions and obstacle density of a newly generated encounter map.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct EncounterSetup {
    pub width: u32,
    pub height: u32,
    pub obstacle_density: f64,
}

impl EncounterSetup {
    pub const DEFAULT_WIDTH: u32 = 12;
    pub const DEFAULT_HEIGHT: u32 = 12;
    pub const DEFAULT_OBSTACLE_DENSITY: f64 = 0.12;
}

impl Default for EncounterSetup {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            obstacle_density: Self::DEFAULT_OBSTACLE_DENSITY,
        }
    }
}

/// Errors raised while beginning a new encounter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("map too small: {width}x{height} (minimum side {min})", min = GameConfig::MIN_ENCOUNTER_SIDE)]
    MapTooSmall { width: u32, height: u32 },

    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MapTooSmall { .. } => ErrorSeverity::Validation,
            Self::Initialization(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MapTooSmall { .. } => "MapTooSmall",
            Self::Initialization(error) => error.error_code(),
        }
    }
}

/// Builds a new encounter from `sheets`.
///
/// The first `config.starting_characters` character slots and the first
/// `config.starting_monsters` monster slots (each bounded by the sheets on
/// hand) are placed with [`place_entities`]; anything that finds no room is
/// reported in the returned [`Placement`] and stays available.
pub fn begin_encounter<R>(
    setup: &EncounterSetup,
    config: &GameConfig,
    sheets: Sheets,
    rng: &mut R,
) -> Result<(GameState, Placement), SetupError>
where
    R: Rng + ?Sized,
{
    if setup.width < GameConfig::MIN_ENCOUNTER_SIDE || setup.height < GameConfig::MIN_ENCOUNTER_SIDE
    {
        return Err(SetupError::MapTooSmall {
            width: setup.width,
            height: setup.height,
        });
    }

    let characters: Vec<EntityId> = (0..config.starting_characters.min(sheets.characters.len()))
        .map_while(EntityId::character)
        .collect();
    let monsters: Vec<EntityId> = (0..config.starting_monsters.min(sheets.monsters.len()))
        .map_while(EntityId::monster)
        .collect();

    let mut map = generate_map(setup.width, setup.height, setup.obstacle_density, rng);
    let placement = place_entities(&mut map, &characters, &monsters, rng);
    let state = GameState::new(map, sheets)?;

    Ok((state, placement))
}
