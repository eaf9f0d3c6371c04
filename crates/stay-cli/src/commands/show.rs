use anyhow::Context;
use stay_api::EnquiryApi;
use stay_core::entities::EstablishmentId;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `stay show <id>`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = EstablishmentId::new(args.id.as_str());
    let establishment = ctx
        .api
        .fetch_establishment(&id)
        .await
        .with_context(|| format!("failed to load establishment {id}"))?;

    output(&establishment, flags.format)
}
