//! Repository contract for named encounter saves.

use game_core::EncounterSnapshot;

use super::{RepositoryError, Result};

/// Repository for encounter snapshots indexed by save name.
pub trait SaveRepository: Send + Sync {
    /// Store `snapshot` under `name`, replacing any previous save.
    fn save(&self, name: &str, snapshot: &EncounterSnapshot) -> Result<()>;

    /// Load the save called `name`, or `None` when it does not exist.
    fn load(&self, name: &str) -> Result<Option<EncounterSnapshot>>;

    fn exists(&self, name: &str) -> bool;

    /// Remove a save. Deleting a missing save is not an error.
    fn delete(&self, name: &str) -> Result<()>;

    /// Names of every stored save, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

/// Rejects names that are empty or could escape the save directory.
pub fn validate_save_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.contains("..")
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control);
    if invalid {
        return Err(RepositoryError::InvalidName(name.to_owned()));
    }
    Ok(())
}
