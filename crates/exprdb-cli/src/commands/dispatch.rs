use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: &Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Init => commands::init::handle(ctx, flags),
        Commands::Feature(args) => commands::feature::handle(args, ctx, flags).await,
        Commands::Xrefs(args) => commands::xrefs::handle(args, ctx, flags).await,
        Commands::Entropy(args) => commands::entropy::handle(args, ctx, flags).await,
        Commands::Link(args) => commands::link::handle(args, ctx, flags).await,
    }
}
