use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    service: &str,
    service_name_ar: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let case = ctx.cases()?.create_case(service, service_name_ar)?;
    tracing::debug!(case = %case.case_number, "created case");
    output(&case, flags.format)
}
