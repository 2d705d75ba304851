//! Expression queries: dataset/sample narrowing and entropy.

use exprdb_core::entities::{Dataset, ExpressionLink, Sample};
use exprdb_core::entropy::shannon_entropy;
use exprdb_core::ids::FeatureRef;

use crate::error::DatabaseError;
use crate::filter;
use crate::service::ExprService;
use crate::store::Filter;

impl ExprService {
    /// Expression links of `feature` in samples of `dataset`, ordered by
    /// sample name. Empty when the feature was not measured there.
    pub async fn xrefs_by_dataset(
        &self,
        feature: impl Into<FeatureRef>,
        dataset: &Dataset,
    ) -> Result<Vec<ExpressionLink>, DatabaseError> {
        let links = self.expression_links(feature).await?;
        let sample_ids: Vec<i64> = links.iter().map(|link| link.sample_id).collect();
        let samples: Vec<Sample> = self
            .db()
            .find_where(&Filter::new().is_in("id", sample_ids), None)
            .await?;
        filter::links_for_dataset(&links, &filter::index_samples(samples), dataset.id)
    }

    /// Expression links of `feature` in `sample`: zero or one element.
    pub async fn xrefs_by_sample(
        &self,
        feature: impl Into<FeatureRef>,
        sample: &Sample,
    ) -> Result<Vec<ExpressionLink>, DatabaseError> {
        let links = self.expression_links(feature).await?;
        Ok(filter::links_for_sample(&links, sample.id))
    }

    /// Expression links of `feature` in any of `samples`, ordered by sample name.
    pub async fn xrefs_by_samples(
        &self,
        feature: impl Into<FeatureRef>,
        samples: &[Sample],
    ) -> Result<Vec<ExpressionLink>, DatabaseError> {
        let links = self.expression_links(feature).await?;
        Ok(filter::links_for_samples(&links, samples))
    }

    /// Shannon entropy of `feature`'s expression across the samples of `dataset`.
    ///
    /// `0.0` when the feature is absent from the dataset or undetected in
    /// every sample.
    pub async fn entropy_by_dataset(
        &self,
        feature: impl Into<FeatureRef>,
        dataset: &Dataset,
    ) -> Result<f64, DatabaseError> {
        let feature = feature.into();
        let links = self.xrefs_by_dataset(feature, dataset).await?;
        let entropy = shannon_entropy(filter::measurements(&links));
        tracing::debug!(%feature, dataset = dataset.id, samples = links.len(), entropy, "entropy by dataset");
        Ok(entropy)
    }

    /// Shannon entropy of `feature`'s expression across an arbitrary sample set.
    pub async fn entropy_for_samples(
        &self,
        feature: impl Into<FeatureRef>,
        samples: &[Sample],
    ) -> Result<f64, DatabaseError> {
        let links = self.xrefs_by_samples(feature, samples).await?;
        Ok(shannon_entropy(filter::measurements(&links)))
    }
}
