//! Map generation, geometry and connectivity.
//!
//! Everything here is pure over a [`Grid`](crate::state::Grid) plus an
//! injected random source; state mutation stays with the engine.
mod encounter;
mod generator;
mod geometry;
mod reachability;

pub use encounter::{EncounterSetup, SetupError, begin_encounter};
pub use generator::{Placement, generate_map, place_entities};
pub use geometry::{is_adjacent, manhattan, neighbors4};
pub use reachability::{Reachability, flood_fill_reachable};
