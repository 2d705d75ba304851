use anyhow::Context;
use serde::Serialize;

use exprdb_core::entities::ExpressionLink;
use exprdb_core::entropy::{normalized_entropy, shannon_entropy};
use exprdb_core::ids::FeatureRef;
use exprdb_db::filter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{EntropyArgs, FeatureArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EntropyResponse {
    feature: FeatureRef,
    dataset: String,
    samples: usize,
    entropy: f64,
    normalized: f64,
}

/// Handle `exprdb entropy`.
pub async fn handle(args: &EntropyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (feature, dataset) = ctx
        .feature(&FeatureArgs {
            kind: args.kind.clone(),
            accession: args.accession.clone(),
            dataset: Some(args.dataset.clone()),
        })
        .await?;
    let dataset = dataset.context("dataset was not resolved")?;
    let reference = FeatureRef::from(&feature);

    let links = ctx.service.xrefs_by_dataset(reference, &dataset).await?;
    output(&summarize(reference, dataset.name, &links), flags.format)
}

fn summarize(feature: FeatureRef, dataset: String, links: &[ExpressionLink]) -> EntropyResponse {
    let entropy = shannon_entropy(filter::measurements(links));
    EntropyResponse {
        feature,
        dataset,
        samples: links.len(),
        entropy,
        normalized: normalized_entropy(entropy, links.len()),
    }
}
