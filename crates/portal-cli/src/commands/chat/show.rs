use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// Print the stored conversation without contacting the backend.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx.sessions().load()?.unwrap_or_default();
    let response = super::exchange_response(record, ctx.language());
    super::print_exchange(&response, flags)
}
