//! Command-line client for the encounter runtime.
//!
//! # Architecture
//!
//! ```text
//! Client (one invocation)
//!   ├─→ Session (current encounter carried between runs)
//!   └─→ Runtime (worker owning the state, driven through RuntimeHandle)
//! ```
//!
//! Every invocation restores the session, runs a single [`cli::Command`],
//! persists the session when the command may have changed it, and shuts the
//! runtime down again.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod session;

use serde_json::Value;
use tracing::{error, info, warn};

use game_content::ContentFactory;
use runtime::{FileSaveRepository, Runtime, RuntimeConfig, RuntimeError};

pub use cli::{Cli, Command};
pub use commands::CommandError;
pub use config::ClientConfig;
pub use session::Session;

/// Runtime plus the session it was restored from.
pub struct Client {
    runtime: Runtime,
    session: Session,
}

impl Client {
    /// Restore the session and start a runtime over it.
    pub async fn open(config: &ClientConfig) -> Result<Self, CommandError> {
        let content = ContentFactory::new(&config.data_dir);
        let session = Session::open(config.session_dir()).map_err(CommandError::Session)?;
        let state = session
            .initial_state(&content)
            .map_err(CommandError::Session)?;
        let game_config = content.load_config().map_err(CommandError::Session)?;
        let saves = FileSaveRepository::new(&config.saves_dir).map_err(RuntimeError::from)?;

        let runtime = Runtime::builder()
            .config(RuntimeConfig {
                game_config,
                rng_seed: config.seed,
                ..RuntimeConfig::default()
            })
            .initial_state(state)
            .repository(saves)
            .build()
            .await?;

        Ok(Self { runtime, session })
    }

    /// Execute `command`, persist the session if needed, and stop the runtime.
    pub async fn run(self, command: Command) -> Result<Value, CommandError> {
        let handle = self.runtime.handle();
        let mutates = command.mutates();

        let result = match commands::execute(&handle, command).await {
            Ok(reply) if mutates => self
                .session
                .persist(&handle)
                .await
                .map(|()| reply)
                .map_err(CommandError::Session),
            other => other,
        };
        match &result {
            Ok(_) if mutates => info!("Session updated"),
            Ok(_) => {}
            Err(failure) if failure.severity().is_internal() => {
                error!(code = failure.error_code(), "Command failed: {failure:#}");
            }
            Err(failure) => warn!(
                code = failure.error_code(),
                severity = failure.severity().as_str(),
                "Command rejected: {failure}"
            ),
        }

        // The runtime stops even when the command or the session write failed.
        drop(handle);
        self.runtime.shutdown().await?;
        result
    }
}
