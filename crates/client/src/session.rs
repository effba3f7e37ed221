//! The encounter carried between invocations of the binary.
//!
//! Each run restores `session/current.json` when present and otherwise starts
//! from the data directory's `map.json` and `sheets.json`.
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use game_content::ContentFactory;
use game_core::GameState;
use runtime::{FileSaveRepository, RuntimeHandle, SaveRepository};

pub struct Session {
    store: FileSaveRepository,
}

impl Session {
    pub const CURRENT: &'static str = "current";

    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let store = FileSaveRepository::new(dir)
            .with_context(|| format!("failed to open session directory {}", dir.display()))?;
        Ok(Self { store })
    }

    /// State the next command runs against.
    pub fn initial_state(&self, content: &ContentFactory) -> Result<GameState> {
        if let Some(snapshot) = self
            .store
            .load(Self::CURRENT)
            .context("failed to read current session")?
        {
            debug!("Resuming session from {}", self.store.base_dir().display());
            return GameState::from_snapshot(snapshot).context("current session is inconsistent");
        }

        let map = content
            .load_map()
            .with_context(|| format!("failed to load {}", ContentFactory::MAP_FILE))?;
        let sheets = content
            .load_sheets()
            .with_context(|| format!("failed to load {}", ContentFactory::SHEETS_FILE))?;
        info!(
            data_dir = %content.data_dir().display(),
            "Starting session from content files"
        );
        GameState::new(map, sheets).context("starting map is inconsistent")
    }

    /// Writes the runtime's current state as the session.
    pub async fn persist(&self, handle: &RuntimeHandle) -> Result<()> {
        let snapshot = handle.snapshot().await?;
        self.store
            .save(Self::CURRENT, &snapshot)
            .context("failed to write current session")
    }
}
