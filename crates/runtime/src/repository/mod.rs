//! Persistence adapters for encounter snapshots.
//!
//! Saves are addressed by name and stored as the full
//! [`EncounterSnapshot`](game_core::EncounterSnapshot): grid, sheets and the
//! sorted active id lists.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepo;
pub use traits::{SaveRepository, validate_save_name};
