use std::path::Path;

use anyhow::Context;
use portal_chat::{ChatSession, SendOutcome};

use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub async fn run(
    text: &str,
    attachments: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.api_client()?;
    let sessions = ctx.sessions();
    let mut session = ChatSession::resume(client, &sessions)?;

    for path in attachments {
        let document = session
            .attach(Path::new(path))
            .with_context(|| format!("cannot attach '{path}'"))?;
        tracing::debug!(name = %document.name, size = document.size, "queued attachment");
    }

    let result = session.send(text).await;
    if matches!(result, Ok(SendOutcome::Skipped)) {
        anyhow::bail!("nothing to send: give message text or at least one --attach");
    }
    // The user's message is kept even when the exchange fails.
    session.save(&sessions)?;
    result.context("chat exchange failed")?;

    let response = super::exchange_response(session.to_record(), ctx.language());
    super::print_exchange(&response, flags)
}
