//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::EncounterSnapshot;

use super::{RepositoryError, Result, SaveRepository, validate_save_name};

/// File-based implementation of SaveRepository.
///
/// Saves are stored as `<name>.json` in pretty-printed JSON, the same layout
/// the map and sheet files use, so they can be inspected and hand-edited.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    const EXTENSION: &'static str = "json";

    /// Create a new file-based save repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a save file.
    fn save_path(&self, name: &str) -> Result<PathBuf> {
        validate_save_name(name)?;
        Ok(self
            .base_dir
            .join(format!("{}.{}", name, Self::EXTENSION)))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, name: &str, snapshot: &EncounterSnapshot) -> Result<()> {
        let path = self.save_path(name)?;
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(snapshot)?;

        // Write to temp file
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved encounter[{}] to {}", name, path.display());

        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<EncounterSnapshot>> {
        let path = self.save_path(name)?;

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        let snapshot: EncounterSnapshot = serde_json::from_str(&content)?;

        tracing::debug!("Loaded encounter[{}] from {}", name, path.display());

        Ok(Some(snapshot))
    }

    fn exists(&self, name: &str) -> bool {
        self.save_path(name).is_ok_and(|path| path.exists())
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.save_path(name)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted encounter[{}]", name);
        }

        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            let is_save = path.extension().and_then(|ext| ext.to_str()) == Some(Self::EXTENSION);
            if let (true, Some(stem)) = (is_save, path.file_stem().and_then(|s| s.to_str())) {
                names.push(stem.to_owned());
            }
        }

        names.sort_unstable();
        Ok(names)
    }
}
