use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "doorman")]
#[command(about = "Dual-write login and local user store")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL override (default comes from config.toml)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
