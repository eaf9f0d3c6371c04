use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Listings(args) => commands::listings::handle(&args, ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
        Commands::Enquire(args) => commands::enquire::handle(&args, ctx, flags).await,
        Commands::Confirmation(args) => commands::confirmation::handle(&args, ctx, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
