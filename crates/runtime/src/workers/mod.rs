//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker is the single owner of the encounter state.

mod simulation;

pub use simulation::{Command, SimulationWorker};
