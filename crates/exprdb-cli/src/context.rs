//! Shared resources and name resolution for command handlers.

use anyhow::{Context, bail};
use exprdb_config::ExprConfig;
use exprdb_core::entities::{Dataset, Feature, Sample};
use exprdb_core::enums::FeatureKind;
use exprdb_db::service::ExprService;

use crate::cli::root_commands::FeatureArgs;

/// Application resources initialized once at startup.
pub struct AppContext {
    pub service: ExprService,
    pub config: ExprConfig,
}

impl AppContext {
    /// Open the configured store, creating the schema if needed.
    pub async fn init(config: ExprConfig) -> anyhow::Result<Self> {
        let service = ExprService::from_config(&config.database)
            .await
            .with_context(|| format!("failed to open store at {}", config.database.path))?;
        Ok(Self { service, config })
    }

    pub async fn dataset(&self, name: &str) -> anyhow::Result<Dataset> {
        match self.service.find_dataset_by_name(name).await? {
            Some(dataset) => Ok(dataset),
            None => bail!("dataset '{name}' not found"),
        }
    }

    pub async fn sample(&self, dataset: &Dataset, name: &str) -> anyhow::Result<Sample> {
        match self.service.find_sample_by_name(dataset.id, name).await? {
            Some(sample) => Ok(sample),
            None => bail!("sample '{name}' not found in dataset '{}'", dataset.name),
        }
    }

    /// Resolve a feature named on the command line, with its dataset if one was given.
    pub async fn feature(&self, args: &FeatureArgs) -> anyhow::Result<(Feature, Option<Dataset>)> {
        let kind: FeatureKind = args.kind.parse()?;
        let dataset = match &args.dataset {
            Some(name) => Some(self.dataset(name).await?),
            None => None,
        };

        let feature = self
            .service
            .find_feature_by_accession(kind, &args.accession, dataset.as_ref().map(|d| d.id))
            .await?;
        match feature {
            Some(feature) => Ok((feature, dataset)),
            None => bail!("{kind} '{}' not found", args.accession),
        }
    }
}
