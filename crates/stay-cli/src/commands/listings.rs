use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListingsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `stay listings`.
pub async fn handle(
    args: &ListingsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut establishments = ctx
        .api
        .list_establishments()
        .await
        .context("failed to load accommodation listings")?;

    if let Some(limit) = args.limit {
        establishments.truncate(limit);
    }

    output(&establishments, flags.format)
}
