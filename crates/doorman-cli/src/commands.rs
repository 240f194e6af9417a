use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in: try the remote server, fall back to the local store
    Login {
        /// Email address (used as the unique account key)
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Full name (defaults to the email's local part)
        #[arg(long)]
        name: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Clear the saved session
    Logout,

    /// Show the currently logged-in user
    Whoami,

    /// Local user store operations
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum UserCommands {
    /// List all stored users in insertion order
    List,

    /// Count stored users
    Count,

    /// Show the most recently added user
    Latest,

    /// Export all users as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Delete every stored user
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
