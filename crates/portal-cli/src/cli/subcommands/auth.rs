use clap::Subcommand;

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with a national ID and email.
    Login {
        /// Qatar ID number.
        #[arg(long)]
        qid: String,
        #[arg(long)]
        email: String,
    },
    /// Clear the signed-in user.
    Logout,
    /// Show current auth status.
    Status,
    /// Manage the bearer token sent to the API.
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum TokenCommands {
    /// Store a bearer token.
    Set { token: String },
    /// Remove the stored bearer token.
    Clear,
}
