use portal_core::i18n::t;
use portal_core::responses::ActionResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Sign out. The API token is kept; `auth token clear` removes it.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let auth = ctx.auth();
    let was_signed_in = auth.is_authenticated()?;
    auth.logout()?;

    let detail = if was_signed_in {
        format!("{}: {}", t("logout", ctx.language()), t("success", ctx.language()))
    } else {
        "not signed in".to_string()
    };

    output(&ActionResponse { ok: true, detail }, flags.format)
}
