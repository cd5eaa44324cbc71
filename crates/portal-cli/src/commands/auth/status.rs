use portal_core::responses::AuthStatusResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.auth().current_user()?;
    let token = ctx.tokens().load_with_source();

    let status = AuthStatusResponse {
        authenticated: user.is_some(),
        user,
        has_token: token.is_some(),
        token_source: token.map(|(_, source)| source.as_str().to_string()),
    };

    output(&status, flags.format)
}
