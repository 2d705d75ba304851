use serde::Serialize;

use exprdb_core::entities::ExpressionLink;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LinkArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LinkResponse {
    link: ExpressionLink,
    sample: String,
}

/// Handle `exprdb link`.
///
/// The source type is passed through untyped so the store can reject unknown
/// discriminators before anything is written.
pub async fn handle(args: &LinkArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dataset = ctx.dataset(&args.dataset).await?;
    let sample = ctx.sample(&dataset, &args.sample).await?;

    let link = ctx
        .service
        .create_expression_link_tagged(&args.source_type, args.source_id, sample.id, args.fpkm)
        .await?;
    if !flags.quiet {
        tracing::info!(id = link.id, source = %link.source(), sample = %sample.name, "expression link created");
    }

    output(
        &LinkResponse {
            link,
            sample: sample.name,
        },
        flags.format,
    )
}
