use std::collections::HashMap;

use anyhow::Context;
use serde::Serialize;

use exprdb_core::entities::{ExpressionLink, Sample};
use exprdb_core::ids::FeatureRef;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::XrefsArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct XrefRow {
    link_id: i64,
    sample: String,
    dataset_id: i64,
    fpkm: f64,
}

#[derive(Debug, Serialize)]
struct XrefsResponse {
    feature: FeatureRef,
    links: Vec<XrefRow>,
}

/// Handle `exprdb xrefs`.
///
/// With `--dataset` the links are narrowed to that dataset's samples (and to
/// one sample with `--sample`); without it every link of the feature is listed.
pub async fn handle(args: &XrefsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (feature, dataset) = ctx.feature(&args.feature).await?;
    let reference = FeatureRef::from(&feature);

    let links = match (&dataset, &args.sample) {
        (Some(dataset), Some(name)) => {
            let sample = ctx.sample(dataset, name).await?;
            ctx.service.xrefs_by_sample(reference, &sample).await?
        }
        (Some(dataset), None) => ctx.service.xrefs_by_dataset(reference, dataset).await?,
        (None, _) => ctx.service.expression_links(reference).await?,
    };

    let links = rows(ctx, links).await?;
    output(
        &XrefsResponse {
            feature: reference,
            links,
        },
        flags.format,
    )
}

async fn rows(ctx: &AppContext, links: Vec<ExpressionLink>) -> anyhow::Result<Vec<XrefRow>> {
    let mut samples: HashMap<i64, Sample> = HashMap::new();
    let mut rows = Vec::with_capacity(links.len());
    for link in links {
        if !samples.contains_key(&link.sample_id) {
            let sample = ctx
                .service
                .find_sample(link.sample_id)
                .await?
                .with_context(|| format!("expression link {} has no sample", link.id))?;
            samples.insert(sample.id, sample);
        }
        let sample = &samples[&link.sample_id];
        rows.push(XrefRow {
            link_id: link.id,
            sample: sample.name.clone(),
            dataset_id: sample.dataset_id,
            fpkm: link.fpkm,
        });
    }
    Ok(rows)
}
