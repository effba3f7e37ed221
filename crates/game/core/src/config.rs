/// Encounter rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    /// Characters placed when a new encounter begins (bounded by available sheets).
    pub starting_characters: usize,
    /// Monsters placed when a new encounter begins (bounded by available sheets).
    pub starting_monsters: usize,
}

impl GameConfig {
    // ===== identifier encoding =====
    pub const CHARACTER_ID_BASE: u32 = 10;
    pub const CHARACTER_ID_MAX: u32 = 99;
    pub const MONSTER_ID_BASE: u32 = 100;
    pub const MONSTER_ID_MAX: u32 = 999;

    // ===== map generation =====
    /// Side of the open square kept free of obstacles at the top-left corner.
    pub const STAGING_AREA_SIZE: i32 = 2;
    /// Side of the top-left block characters are placed into.
    pub const CHARACTER_START_BLOCK: i32 = 3;
    /// Random draws per monster before it is dropped.
    pub const MONSTER_PLACEMENT_ATTEMPTS: u32 = 1000;
    /// Unreachable non-empty cells, as a fraction of the map area, that trigger a repair pass.
    pub const REPAIR_UNREACHABLE_RATIO: f64 = 0.2;
    /// Chance that the repair pass knocks down each wall.
    pub const WALL_CLEAR_PROBABILITY: f64 = 0.5;
    /// Smallest width or height accepted when beginning an encounter.
    pub const MIN_ENCOUNTER_SIDE: u32 = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_CHARACTERS: usize = 3;
    pub const DEFAULT_STARTING_MONSTERS: usize = 4;

    pub fn new() -> Self {
        Self {
            starting_characters: Self::DEFAULT_STARTING_CHARACTERS,
            starting_monsters: Self::DEFAULT_STARTING_MONSTERS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
