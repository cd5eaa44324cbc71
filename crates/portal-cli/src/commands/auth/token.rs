use portal_core::responses::ActionResponse;
use portal_store::token::TOKEN_ENV_VAR;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn set(token: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.tokens().store(token)?;
    output(
        &ActionResponse {
            ok: true,
            detail: format!("token stored in {}", ctx.storage.dir().display()),
        },
        flags.format,
    )
}

pub fn clear(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.tokens().clear()?;

    let detail = if std::env::var_os(TOKEN_ENV_VAR).is_some() {
        format!("stored token cleared; {TOKEN_ENV_VAR} is still set")
    } else {
        "stored token cleared".to_string()
    };

    output(&ActionResponse { ok: true, detail }, flags.format)
}
