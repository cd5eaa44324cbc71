use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(qid: &str, email: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.auth().login(qid, email).context("login failed")?;
    tracing::debug!(user = %user.id, "signed in");
    output(&user, flags.format)
}
