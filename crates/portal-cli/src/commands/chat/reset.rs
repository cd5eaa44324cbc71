use portal_core::responses::ActionResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Drop the stored conversation; the next `chat send` starts a new session.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sessions = ctx.sessions();
    let previous = sessions.load()?.map(|record| record.session_id);
    sessions.clear()?;

    let detail = match previous {
        Some(id) if !id.is_empty() => format!("session {id} discarded"),
        _ => "no stored session".to_string(),
    };
    output(&ActionResponse { ok: true, detail }, flags.format)
}
