//! Client configuration resolved from the environment and command-line flags.
use std::env;
use std::path::{Path, PathBuf};

/// Directories and seed the `encounter` binary runs with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Holds `map.json`, `sheets.json`, the optional `config.toml` and the session.
    pub data_dir: PathBuf,
    pub saves_dir: PathBuf,
    pub log_dir: PathBuf,
    /// Seed for the runtime RNG; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl ClientConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    const SESSION_DIR: &'static str = "session";

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATA_DIR` - Content and session directory (default: `data`)
    /// - `SAVES_DIR` - Named saves (default: `$DATA_DIR/saves`)
    /// - `ENCOUNTER_SEED` - Fixed RNG seed for reproducible runs
    /// - `LOG_DIR` - Log files (default: platform cache dir, else `$DATA_DIR/logs`)
    pub fn from_env() -> Self {
        let data_dir = read_env::<PathBuf>("DATA_DIR")
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DATA_DIR));
        let saves_dir = read_env::<PathBuf>("SAVES_DIR");
        let log_dir = read_env::<PathBuf>("LOG_DIR");
        let seed = read_env::<u64>("ENCOUNTER_SEED");

        Self::resolve(data_dir, saves_dir, log_dir, seed)
    }

    fn resolve(
        data_dir: PathBuf,
        saves_dir: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Self {
        let saves_dir = saves_dir.unwrap_or_else(|| data_dir.join("saves"));
        let log_dir = log_dir.unwrap_or_else(|| default_log_dir(&data_dir));
        Self {
            data_dir,
            saves_dir,
            log_dir,
            seed,
        }
    }

    /// Applies `--data-dir` and `--seed`.
    ///
    /// A new data directory moves the saves directory with it unless
    /// `SAVES_DIR` pinned it elsewhere.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(data_dir) = data_dir {
            if self.saves_dir == self.data_dir.join("saves") {
                self.saves_dir = data_dir.join("saves");
            }
            self.data_dir = data_dir;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Directory holding the auto-persisted current encounter.
    pub fn session_dir(&self) -> PathBuf {
        self.data_dir.join(Self::SESSION_DIR)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(PathBuf::from(Self::DEFAULT_DATA_DIR), None, None, None)
    }
}

fn default_log_dir(data_dir: &Path) -> PathBuf {
    directories::ProjectDirs::from("", "", "encounter")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| data_dir.join("logs"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_default_under_data_dir() {
        let config = ClientConfig::resolve(PathBuf::from("/srv/encounter"), None, None, Some(7));
        assert_eq!(config.saves_dir, Path::new("/srv/encounter/saves"));
        assert_eq!(config.session_dir(), Path::new("/srv/encounter/session"));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn data_dir_override_moves_default_saves() {
        let config = ClientConfig::default().with_overrides(Some(PathBuf::from("/tmp/run")), None);
        assert_eq!(config.data_dir, Path::new("/tmp/run"));
        assert_eq!(config.saves_dir, Path::new("/tmp/run/saves"));
    }

    #[test]
    fn pinned_saves_dir_survives_override() {
        let config = ClientConfig::resolve(
            PathBuf::from("data"),
            Some(PathBuf::from("/var/saves")),
            Some(PathBuf::from("/var/log/encounter")),
            None,
        )
        .with_overrides(Some(PathBuf::from("/tmp/run")), Some(42));

        assert_eq!(config.saves_dir, Path::new("/var/saves"));
        assert_eq!(config.log_dir, Path::new("/var/log/encounter"));
        assert_eq!(config.seed, Some(42));
    }
}
