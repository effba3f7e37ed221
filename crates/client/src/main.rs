//! `encounter` binary.
//!
//! Runs one command against the current encounter and prints a JSON reply on
//! stdout: `{"ok": true, ...}` on success, `{"error": "<Code>"}` with a
//! failing exit status otherwise.
//!
//! # Examples
//!
//! ```bash
//! encounter spawn-character 0 0 0
//! encounter move 10 1 1
//! encounter attack 10 100
//! encounter dice --sides 6 --count 3 --modifier -2
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use encounter_client::{Cli, Client, ClientConfig, logging};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ClientConfig::from_env().with_overrides(cli.data_dir, cli.seed);

    logging::setup_logging(&config.log_dir)?;
    tracing::debug!("Data directory: {}", config.data_dir.display());

    let result = match Client::open(&config).await {
        Ok(client) => client.run(cli.command).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(reply) => {
            println!("{reply}");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::debug!("{error:?}");
            println!("{}", error.to_json());
            Ok(ExitCode::FAILURE)
        }
    }
}
