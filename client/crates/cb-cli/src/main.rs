//! cookbook - recipe app command-line client
//!
//! # Examples
//!
//! ```bash
//! # Sign in (the session is remembered under .cookbook/store/)
//! cookbook --api-url http://127.0.0.1:8080 auth login --email me@example.com --password secret
//!
//! # Browse soups
//! cookbook recipe list --category Soup --pretty
//!
//! # Bookmark a recipe, then list bookmarks
//! cookbook bookmark toggle 65f0c1d2e4
//! cookbook bookmark list
//! ```

use cb_cli::{App, Cli, CliResult, initialize_logger};
use cb_config::Config;
use cb_session::SessionManager;
use cb_store::{FileStore, KeyValueStore};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::error;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let pretty = cli.pretty;

    // Handle result
    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    // Load and validate configuration
    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = Some(url);
    }
    config.validate()?;

    let log_file = match &config.logging.file {
        Some(file) => Some(Config::config_dir()?.join(file)),
        None => None,
    };
    initialize_logger(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.store_path()?));
    let session = Arc::new(SessionManager::from_config(&config, store));
    session.init().await;

    App::new(session).run(cli.command).await
}
