//! In-memory SaveRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use game_core::EncounterSnapshot;

use super::{RepositoryError, Result, SaveRepository, validate_save_name};

/// In-memory implementation of SaveRepository.
pub struct InMemorySaveRepo {
    saves: RwLock<BTreeMap<String, EncounterSnapshot>>,
}

impl InMemorySaveRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            saves: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemorySaveRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveRepository for InMemorySaveRepo {
    fn save(&self, name: &str, snapshot: &EncounterSnapshot) -> Result<()> {
        validate_save_name(name)?;
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.insert(name.to_owned(), snapshot.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<EncounterSnapshot>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.get(name).cloned())
    }

    fn exists(&self, name: &str) -> bool {
        self.saves
            .read()
            .map(|saves| saves.contains_key(name))
            .unwrap_or(false)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.remove(name);
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.keys().cloned().collect())
    }
}
