use portal_core::enums::CaseStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    status: &str,
    note: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<CaseStatus>(status, "status")?;
    let mut cases = ctx.cases()?;
    let case_id = cases.require_case(id)?.id.clone();
    let case = cases.update_case_status(&case_id, status, note)?;
    output(&case, flags.format)
}
