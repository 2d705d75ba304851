//! Narrowing and ordering of a feature's resolved expression links.
//!
//! Every function here borrows its input and returns a fresh vector, so the
//! resolved set can be filtered any number of times with identical results.

use std::collections::HashMap;

use exprdb_core::entities::{ExpressionLink, Sample};

use crate::error::DatabaseError;

/// Index samples by id.
#[must_use]
pub fn index_samples(samples: Vec<Sample>) -> HashMap<i64, Sample> {
    samples.into_iter().map(|s| (s.id, s)).collect()
}

/// Links whose sample belongs to dataset `dataset_id`, ordered by sample name.
///
/// `samples` must contain the sample of every link.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if a link's sample is missing from
/// `samples`.
pub fn links_for_dataset(
    links: &[ExpressionLink],
    samples: &HashMap<i64, Sample>,
    dataset_id: i64,
) -> Result<Vec<ExpressionLink>, DatabaseError> {
    let mut kept = Vec::new();
    for link in links {
        let sample = sample_of(link, samples)?;
        if sample.dataset_id == dataset_id {
            kept.push((sample.name.as_str(), link.clone()));
        }
    }
    Ok(sorted_by_sample_name(kept))
}

/// Links measured in sample `sample_id`. At most one is expected.
#[must_use]
pub fn links_for_sample(links: &[ExpressionLink], sample_id: i64) -> Vec<ExpressionLink> {
    links
        .iter()
        .filter(|link| link.sample_id == sample_id)
        .cloned()
        .collect()
}

/// Links measured in any of `samples`, ordered by sample name.
#[must_use]
pub fn links_for_samples(links: &[ExpressionLink], samples: &[Sample]) -> Vec<ExpressionLink> {
    let names: HashMap<i64, &str> = samples.iter().map(|s| (s.id, s.name.as_str())).collect();
    let kept = links
        .iter()
        .filter_map(|link| names.get(&link.sample_id).map(|name| (*name, link.clone())))
        .collect();
    sorted_by_sample_name(kept)
}

/// FPKM values of `links`, in order.
#[must_use]
pub fn measurements(links: &[ExpressionLink]) -> Vec<f64> {
    links.iter().map(|link| link.fpkm).collect()
}

fn sample_of<'a>(
    link: &ExpressionLink,
    samples: &'a HashMap<i64, Sample>,
) -> Result<&'a Sample, DatabaseError> {
    samples.get(&link.sample_id).ok_or_else(|| {
        DatabaseError::InvalidState(format!(
            "expression link {} references missing sample {}",
            link.id, link.sample_id
        ))
    })
}

// Stable: equal names keep their incoming (sample id) order.
fn sorted_by_sample_name(mut keyed: Vec<(&str, ExpressionLink)>) -> Vec<ExpressionLink> {
    keyed.sort_by(|a, b| a.0.cmp(b.0));
    keyed.into_iter().map(|(_, link)| link).collect()
}
