mod create;
mod document;
mod get;
mod list;
mod message;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CaseCommands;
use crate::context::AppContext;

/// Handle `portal case <subcommand>`.
pub async fn handle(
    action: &CaseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CaseCommands::Create {
            service,
            service_name_ar,
        } => create::run(service, service_name_ar, ctx, flags),
        CaseCommands::Status { id, status, note } => {
            status::run(id, status, note.as_deref(), ctx, flags)
        }
        CaseCommands::Message { id, role, content } => message::run(id, role, content, ctx, flags),
        CaseCommands::Document { id, path } => document::run(id, path, ctx, flags),
        CaseCommands::Get { id } => get::run(id, ctx, flags),
        CaseCommands::List {
            status,
            search,
            limit,
        } => list::run(status.as_deref(), search.as_deref(), *limit, ctx, flags),
    }
}
