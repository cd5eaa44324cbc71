mod login;
mod logout;
mod status;
mod token;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AuthCommands, TokenCommands};
use crate::context::AppContext;

/// Handle `portal auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login { qid, email } => login::run(qid, email, ctx, flags),
        AuthCommands::Logout => logout::run(ctx, flags),
        AuthCommands::Status => status::run(ctx, flags),
        AuthCommands::Token { action } => match action {
            TokenCommands::Set { token } => token::set(token, ctx, flags),
            TokenCommands::Clear => token::clear(ctx, flags),
        },
    }
}
