use clap::Subcommand;

/// Chat session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Send a message, optionally with attachments.
    Send {
        /// Message text. May be omitted when attaching files.
        text: Option<String>,
        /// File to attach (PDF, PNG or JPEG). Repeatable.
        #[arg(long)]
        attach: Vec<String>,
    },
    /// Show the current conversation.
    Show,
    /// Discard the conversation and start a new session.
    Reset,
}
