//! doorman - dual-write login CLI
//!
//! Logs users in against a remote server with an authoritative local
//! fallback, and manages the local user store and saved session.
//!
//! # Examples
//!
//! ```bash
//! # Log in (remote first, local fallback)
//! doorman login --email a@x.com --password secret
//!
//! # Who is logged in right now?
//! doorman whoami
//!
//! # Inspect the local store
//! doorman users list --pretty
//! doorman users latest
//! ```

mod cli;
mod commands;
mod error;
mod logger;

use crate::{
    cli::Cli,
    commands::{Commands, UserCommands},
    error::{CliError, CliResult},
};

use doorman_client::{LoginFlow, RemoteAuth, SessionState};
use doorman_config::{Config, SessionFile};
use doorman_core::Credentials;
use doorman_db::UserStore;

use std::process::ExitCode;

use clap::Parser;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Explicit flag beats config.toml
    if let Some(url) = cli.server {
        config.server.url = url;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        return ExitCode::FAILURE;
    }

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error resolving log file: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger::initialize(config.logging.level, log_file) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    match run(&config, cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
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
                    eprintln!("Error serializing output: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config, command: Commands) -> CliResult<Value> {
    let store = UserStore::open(config.database_path()?).await?;
    let mut session = SessionState::load(SessionFile::in_config_dir()?)?;

    match command {
        Commands::Login {
            email,
            password,
            name,
            phone,
        } => {
            let remote = RemoteAuth::from_config(&config.server);
            let mut flow = LoginFlow::new(&remote, &store, &mut session);

            let credentials = Credentials {
                email,
                password,
                full_name: name,
                phone,
            };

            let outcome = flow.login(credentials).await?;
            let message = if outcome.was_fallback() {
                "Login successful (local fallback)"
            } else {
                "Login successful"
            };
            Ok(json!({ "message": message, "user": outcome.record() }))
        }

        Commands::Logout => {
            session.clear()?;
            Ok(json!({ "message": "Logged out" }))
        }

        Commands::Whoami => match session.current() {
            Some(record) => Ok(serde_json::to_value(record)?),
            None => Ok(json!({ "message": "Not logged in" })),
        },

        Commands::Users { action } => match action {
            UserCommands::List => Ok(serde_json::to_value(store.all_users().await?)?),

            UserCommands::Count => {
                let count = store.user_count().await?;
                Ok(json!({ "count": count }))
            }

            UserCommands::Latest => match store.latest_user().await? {
                Some(record) => Ok(serde_json::to_value(record)?),
                None => Ok(Value::Null),
            },

            UserCommands::Export { out } => {
                let users = store.all_users().await?;
                match out {
                    Some(path) => {
                        let json = serde_json::to_string_pretty(&users)?;
                        std::fs::write(&path, json)?;
                        Ok(json!({
                            "message": format!("Exported to {}", path.display()),
                            "count": users.len(),
                        }))
                    }
                    None => Ok(serde_json::to_value(users)?),
                }
            }

            UserCommands::Clear { yes } => {
                if !yes {
                    return Err(CliError::Usage {
                        message: String::from(
                            "users clear deletes every stored user; re-run with --yes to confirm",
                        ),
                    });
                }
                let removed = store.clear_all().await?;
                session.clear()?;
                log::info!("Store cleared, {} users removed", removed);
                Ok(json!({ "message": "Store cleared", "removed": removed }))
            }
        },
    }
}
