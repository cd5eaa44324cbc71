use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `portal catalog <subcommand>`.
pub async fn handle(
    action: &CatalogCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.api_client()?;
    match action {
        CatalogCommands::Services => {
            let services = client.fetch_services().await.context("failed to fetch services")?;
            print_limited(services, ctx, flags)
        }
        CatalogCommands::Steps => {
            let steps = client.fetch_steps().await.context("failed to fetch steps")?;
            print_limited(steps, ctx, flags)
        }
        CatalogCommands::Cases => {
            let cases = client.fetch_cases().await.context("failed to fetch cases")?;
            print_limited(cases, ctx, flags)
        }
    }
}

fn print_limited<T: Serialize>(
    mut items: Vec<T>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    items.truncate(usize::try_from(limit)?);
    output(&items, flags.format)
}
