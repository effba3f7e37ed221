//! Content factory for loading an encounter's data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, Grid, Sheets};

use crate::loaders::{ConfigLoader, LoadResult, MapLoader, SheetsLoader};

/// Content factory that loads all encounter content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── map.json
/// └── sheets.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const MAP_FILE: &'static str = "map.json";
    pub const SHEETS_FILE: &'static str = "sheets.json";
    pub const CONFIG_FILE: &'static str = "config.toml";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the starting map from `map.json`.
    pub fn load_map(&self) -> LoadResult<Grid> {
        MapLoader::load(&self.data_dir.join(Self::MAP_FILE))
    }

    /// Load character and monster sheets from `sheets.json`.
    pub fn load_sheets(&self) -> LoadResult<Sheets> {
        SheetsLoader::load(&self.data_dir.join(Self::SHEETS_FILE))
    }

    /// Load rule tuning from `config.toml`, falling back to defaults when absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }
}
