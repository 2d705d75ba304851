use serde::Serialize;

use exprdb_core::entities::{AlignFeature, Feature, FeatureXref};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FeatureArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FeatureResponse {
    feature: Feature,
    expression_links: usize,
    xrefs: Vec<FeatureXref>,
    align_features: Vec<AlignFeature>,
}

/// Handle `exprdb feature`.
pub async fn handle(args: &FeatureArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (feature, _) = ctx.feature(args).await?;
    let expression_links = ctx.service.expression_links(&feature).await?.len();
    let xrefs = ctx.service.feature_xrefs(&feature).await?;
    let align_features = ctx.service.align_features(&feature).await?;

    output(
        &FeatureResponse {
            feature,
            expression_links,
            xrefs,
            align_features,
        },
        flags.format,
    )
}
