use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, CaseCommands, CatalogCommands, ChatCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out and manage the API token.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Talk to the service assistant.
    Chat {
        #[command(subcommand)]
        action: ChatCommands,
    },
    /// Locally tracked service requests.
    Case {
        #[command(subcommand)]
        action: CaseCommands,
    },
    /// Read-only listings from the services backend.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
}
