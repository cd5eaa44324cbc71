use portal_core::entities::NewMessage;
use portal_core::enums::MessageRole;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    role: &str,
    content: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role = parse_enum::<MessageRole>(role, "role")?;
    if content.trim().is_empty() {
        anyhow::bail!("message content must not be empty");
    }

    let mut cases = ctx.cases()?;
    let case_id = cases.require_case(id)?.id.clone();
    let message = cases.add_message(&case_id, NewMessage::new(role, content))?;
    output(&message, flags.format)
}
