//! Command-line surface of the `encounter` binary.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use game_core::{EncounterSetup, Position};

#[derive(Debug, Parser)]
#[command(name = "encounter", version, about = "Grid encounter engine")]
pub struct Cli {
    /// Directory with map.json, sheets.json and the current session
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Seed for map generation, monster selection and dice
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Coordinates of a target cell. Negative values are accepted and rejected by the rules.
#[derive(Clone, Copy, Debug, Args)]
pub struct Coords {
    #[arg(allow_negative_numbers = true)]
    pub x: i32,
    #[arg(allow_negative_numbers = true)]
    pub y: i32,
}

impl From<Coords> for Position {
    fn from(coords: Coords) -> Self {
        Position::new(coords.x, coords.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CharacterList {
    Active,
    Available,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current grid
    Map,

    /// Move a character or monster to a free cell
    Move {
        entity: u32,
        #[command(flatten)]
        to: Coords,
    },

    /// Attacker defeats an orthogonally adjacent target and takes its cell
    Attack { attacker: u32, target: u32 },

    /// List character ids on the map or waiting to be spawned
    Characters {
        #[arg(value_enum)]
        which: CharacterList,
    },

    /// Show the sheet behind an entity id
    Sheet { entity: u32 },

    /// Merge a JSON object of sheet fields into a character sheet
    UpdateCharacter {
        entity: u32,
        /// e.g. '{"level": 4, "stats": {"strength": 16}}'
        updates: String,
    },

    /// Place the character at sheet slot INDEX
    SpawnCharacter {
        index: usize,
        #[command(flatten)]
        at: Coords,
    },

    /// Place a random inactive monster
    SpawnMonster {
        #[command(flatten)]
        at: Coords,
    },

    /// List monster ids on the map
    Monsters,

    /// Clear a tree, rock, wall or entity token
    Destroy {
        #[command(flatten)]
        at: Coords,
    },

    /// Roll COUNT dice with SIDES faces and add MODIFIER
    Dice {
        #[arg(long, default_value_t = 20)]
        sides: u32,
        #[arg(long, default_value_t = 1)]
        count: u32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        modifier: i64,
    },

    /// Store the current encounter under NAME
    Save { name: String },

    /// Replace the current encounter with the save NAME
    Load { name: String },

    /// List stored saves
    Saves,

    /// Generate a fresh map and seat the starting party and monsters
    Begin {
        #[arg(long, default_value_t = EncounterSetup::DEFAULT_WIDTH)]
        width: u32,
        #[arg(long, default_value_t = EncounterSetup::DEFAULT_HEIGHT)]
        height: u32,
        #[arg(long, default_value_t = EncounterSetup::DEFAULT_OBSTACLE_DENSITY)]
        density: f64,
    },
}

impl Command {
    /// Whether the command can change the encounter and must be persisted.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Move { .. }
                | Self::Attack { .. }
                | Self::UpdateCharacter { .. }
                | Self::SpawnCharacter { .. }
                | Self::SpawnMonster { .. }
                | Self::Destroy { .. }
                | Self::Load { .. }
                | Self::Begin { .. }
        )
    }
}
