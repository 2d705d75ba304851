//! Polymorphic link repository: expression links, feature xrefs, align features.
//!
//! All three tables point at a feature through `(source_type, source_id)`.
//! Forward resolution dispatches on `source_type` to load the one feature a
//! row names; reverse resolution filters on both columns, never on
//! `source_id` alone, since every feature kind has its own id space.

use libsql::Value;

use exprdb_core::entities::{AlignFeature, ExpressionLink, Feature, FeatureXref};
use exprdb_core::enums::{FeatureKind, LinkKind};
use exprdb_core::errors::validate_fpkm;
use exprdb_core::ids::FeatureRef;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_feature_kind};
use crate::service::ExprService;
use crate::store::{Filter, Record, Table};

/// A row of one of the polymorphic link tables.
pub trait LinkRecord: Record {
    const KIND: LinkKind;

    /// Order applied by [`ExprService::links_of`]; `None` keeps store order.
    const DEFAULT_ORDER: Option<&'static str>;

    /// The feature this row points at. Delegates to the entity's inherent `source`.
    fn source(&self) -> FeatureRef;
}

impl Record for ExpressionLink {
    const TABLE: Table = Table::ExpressionLinks;
    const COLUMNS: &'static str = "id, source_type, source_id, target_id, fpkm";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            source_type: parse_feature_kind(&row.get::<String>(1)?)?,
            source_id: row.get::<i64>(2)?,
            sample_id: row.get::<i64>(3)?,
            fpkm: row.get::<f64>(4)?,
        })
    }
}

impl LinkRecord for ExpressionLink {
    const KIND: LinkKind = LinkKind::Expression;
    const DEFAULT_ORDER: Option<&'static str> = Some("target_id, id");

    fn source(&self) -> FeatureRef {
        ExpressionLink::source(self)
    }
}

impl Record for FeatureXref {
    const TABLE: Table = Table::FeatureXrefs;
    const COLUMNS: &'static str = "id, source_type, source_id, target_id, accession, description";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            source_type: parse_feature_kind(&row.get::<String>(1)?)?,
            source_id: row.get::<i64>(2)?,
            external_db_id: row.get::<i64>(3)?,
            accession: row.get::<String>(4)?,
            description: get_opt_string(row, 5)?,
        })
    }
}

impl LinkRecord for FeatureXref {
    const KIND: LinkKind = LinkKind::FeatureXref;
    const DEFAULT_ORDER: Option<&'static str> = Some("target_id, id");

    fn source(&self) -> FeatureRef {
        FeatureXref::source(self)
    }
}

impl Record for AlignFeature {
    const TABLE: Table = Table::AlignFeatures;
    const COLUMNS: &'static str = "id, source_type, source_id, target_id, hit_name";

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: row.get::<i64>(0)?,
            source_type: parse_feature_kind(&row.get::<String>(1)?)?,
            source_id: row.get::<i64>(2)?,
            external_db_id: row.get::<i64>(3)?,
            hit_name: row.get::<String>(4)?,
        })
    }
}

impl LinkRecord for AlignFeature {
    const KIND: LinkKind = LinkKind::AlignFeature;
    const DEFAULT_ORDER: Option<&'static str> = None;

    fn source(&self) -> FeatureRef {
        AlignFeature::source(self)
    }
}

impl ExprService {
    // -----------------------------------------------------------------------
    // Reverse resolution
    // -----------------------------------------------------------------------

    /// All rows of link table `L` that point at `feature`.
    pub async fn links_of<L: LinkRecord>(
        &self,
        feature: impl Into<FeatureRef>,
    ) -> Result<Vec<L>, DatabaseError> {
        let feature = feature.into();
        let filter = Filter::new()
            .eq("source_type", feature.kind.as_str())
            .eq("source_id", feature.id);
        let links: Vec<L> = self.db().find_where(&filter, L::DEFAULT_ORDER).await?;
        tracing::debug!(%feature, link = %L::KIND, count = links.len(), "resolved links");
        Ok(links)
    }

    /// Expression links of a feature, ordered by sample id.
    pub async fn expression_links(
        &self,
        feature: impl Into<FeatureRef>,
    ) -> Result<Vec<ExpressionLink>, DatabaseError> {
        self.links_of(feature).await
    }

    /// External cross-references of a feature, ordered by external db id.
    pub async fn feature_xrefs(
        &self,
        feature: impl Into<FeatureRef>,
    ) -> Result<Vec<FeatureXref>, DatabaseError> {
        self.links_of(feature).await
    }

    /// Aligned-feature predictions on a feature, in store order.
    pub async fn align_features(
        &self,
        feature: impl Into<FeatureRef>,
    ) -> Result<Vec<AlignFeature>, DatabaseError> {
        self.links_of(feature).await
    }

    // -----------------------------------------------------------------------
    // Forward resolution
    // -----------------------------------------------------------------------

    /// The feature a link row points at.
    ///
    /// Fails with `DatabaseError::Resolution` when the row is dangling.
    pub async fn resolve_source<L: LinkRecord>(&self, link: &L) -> Result<Feature, DatabaseError> {
        self.require_feature(link.source()).await
    }

    /// Load link `L` by id. Absence is `Ok(None)`; a stored `source_type`
    /// outside the closed set is an error.
    pub async fn find_link<L: LinkRecord>(&self, id: i64) -> Result<Option<L>, DatabaseError> {
        self.db().find_by_id(id).await
    }

    /// Load link `L` by id and resolve the feature it points at.
    pub async fn resolve_link<L: LinkRecord>(&self, id: i64) -> Result<(L, Feature), DatabaseError> {
        let link: L = self
            .find_link(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound {
                entity: L::TABLE.name(),
                key: id.to_string(),
            })?;
        let feature = self.resolve_source(&link).await?;
        Ok((link, feature))
    }

    pub async fn resolve_expression_link(
        &self,
        id: i64,
    ) -> Result<(ExpressionLink, Feature), DatabaseError> {
        self.resolve_link(id).await
    }

    pub async fn resolve_feature_xref(
        &self,
        id: i64,
    ) -> Result<(FeatureXref, Feature), DatabaseError> {
        self.resolve_link(id).await
    }

    pub async fn resolve_align_feature(
        &self,
        id: i64,
    ) -> Result<(AlignFeature, Feature), DatabaseError> {
        self.resolve_link(id).await
    }

    // -----------------------------------------------------------------------
    // Inserts
    // -----------------------------------------------------------------------

    /// Check that a link's source exists before anything is written.
    async fn ensure_link_source(
        &self,
        link: LinkKind,
        source: FeatureRef,
    ) -> Result<(), DatabaseError> {
        if let Err(e) = self.require_feature(source).await {
            tracing::warn!(%link, %source, error = %e, "rejected link insert");
            return Err(e);
        }
        Ok(())
    }

    /// Insert an FPKM measurement of `source` in sample `sample_id`.
    pub async fn create_expression_link(
        &self,
        source: FeatureRef,
        sample_id: i64,
        fpkm: f64,
    ) -> Result<ExpressionLink, DatabaseError> {
        let fpkm = validate_fpkm(fpkm).inspect_err(|e| {
            tracing::warn!(link = %LinkKind::Expression, %source, error = %e, "rejected link insert");
        })?;
        self.ensure_link_source(LinkKind::Expression, source).await?;
        if self.find_sample(sample_id).await?.is_none() {
            tracing::warn!(link = %LinkKind::Expression, %source, sample_id, "rejected link insert: no such sample");
            return Err(DatabaseError::NotFound {
                entity: "sample",
                key: sample_id.to_string(),
            });
        }

        let id = self
            .insert_link(
                Table::ExpressionLinks,
                source,
                sample_id,
                &["fpkm"],
                vec![fpkm.into()],
            )
            .await?;

        Ok(ExpressionLink {
            id,
            source_type: source.kind,
            source_id: source.id,
            sample_id,
            fpkm,
        })
    }

    /// Insert an expression link from an untyped `source_type` tag.
    ///
    /// Tags outside the closed feature set are rejected before any write.
    pub async fn create_expression_link_tagged(
        &self,
        source_type: &str,
        source_id: i64,
        sample_id: i64,
        fpkm: f64,
    ) -> Result<ExpressionLink, DatabaseError> {
        let kind = Self::parse_insert_tag(LinkKind::Expression, source_type)?;
        self.create_expression_link(FeatureRef::new(kind, source_id), sample_id, fpkm)
            .await
    }

    pub async fn create_feature_xref(
        &self,
        source: FeatureRef,
        external_db_id: i64,
        accession: &str,
        description: Option<&str>,
    ) -> Result<FeatureXref, DatabaseError> {
        self.ensure_link_source(LinkKind::FeatureXref, source).await?;
        self.ensure_external_db(LinkKind::FeatureXref, source, external_db_id)
            .await?;

        let id = self
            .insert_link(
                Table::FeatureXrefs,
                source,
                external_db_id,
                &["accession", "description"],
                vec![accession.into(), description.into()],
            )
            .await?;

        Ok(FeatureXref {
            id,
            source_type: source.kind,
            source_id: source.id,
            external_db_id,
            accession: accession.to_string(),
            description: description.map(String::from),
        })
    }

    pub async fn create_feature_xref_tagged(
        &self,
        source_type: &str,
        source_id: i64,
        external_db_id: i64,
        accession: &str,
        description: Option<&str>,
    ) -> Result<FeatureXref, DatabaseError> {
        let kind = Self::parse_insert_tag(LinkKind::FeatureXref, source_type)?;
        self.create_feature_xref(
            FeatureRef::new(kind, source_id),
            external_db_id,
            accession,
            description,
        )
        .await
    }

    pub async fn create_align_feature(
        &self,
        source: FeatureRef,
        external_db_id: i64,
        hit_name: &str,
    ) -> Result<AlignFeature, DatabaseError> {
        self.ensure_link_source(LinkKind::AlignFeature, source).await?;
        self.ensure_external_db(LinkKind::AlignFeature, source, external_db_id)
            .await?;

        let id = self
            .insert_link(
                Table::AlignFeatures,
                source,
                external_db_id,
                &["hit_name"],
                vec![hit_name.into()],
            )
            .await?;

        Ok(AlignFeature {
            id,
            source_type: source.kind,
            source_id: source.id,
            external_db_id,
            hit_name: hit_name.to_string(),
        })
    }

    pub async fn create_align_feature_tagged(
        &self,
        source_type: &str,
        source_id: i64,
        external_db_id: i64,
        hit_name: &str,
    ) -> Result<AlignFeature, DatabaseError> {
        let kind = Self::parse_insert_tag(LinkKind::AlignFeature, source_type)?;
        self.create_align_feature(FeatureRef::new(kind, source_id), external_db_id, hit_name)
            .await
    }

    fn parse_insert_tag(link: LinkKind, source_type: &str) -> Result<FeatureKind, DatabaseError> {
        parse_feature_kind(source_type).inspect_err(|e| {
            tracing::warn!(%link, source_type, error = %e, "rejected link insert");
        })
    }

    async fn ensure_external_db(
        &self,
        link: LinkKind,
        source: FeatureRef,
        external_db_id: i64,
    ) -> Result<(), DatabaseError> {
        if self.find_external_db(external_db_id).await?.is_none() {
            tracing::warn!(%link, %source, external_db_id, "rejected link insert: no such external db");
            return Err(DatabaseError::NotFound {
                entity: "external db",
                key: external_db_id.to_string(),
            });
        }
        Ok(())
    }

    async fn insert_link(
        &self,
        table: Table,
        source: FeatureRef,
        target_id: i64,
        extra_columns: &[&str],
        extra_values: Vec<Value>,
    ) -> Result<i64, DatabaseError> {
        let mut columns = vec!["source_type", "source_id", "target_id"];
        columns.extend_from_slice(extra_columns);
        let mut values: Vec<Value> = vec![
            source.kind.as_str().into(),
            source.id.into(),
            target_id.into(),
        ];
        values.extend(extra_values);
        self.db().insert(table, &columns, values).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::gene::NewGene;
    use crate::test_support::helpers::{seed_base, test_service};
    use exprdb_core::entities::Gene;
    use exprdb_core::errors::CoreError;

    async fn seed_gene(svc: &ExprService, stable_id: &str) -> Gene {
        let genome = match svc.find_genome(1).await.unwrap() {
            Some(g) => g,
            None => seed_base(svc).await.genome,
        };
        svc.create_gene(&NewGene {
            stable_id,
            genome_id: genome.id,
            annotation_id: 1,
            ..Default::default()
        })
        .await
        .unwrap()
    }

    async fn count_rows(svc: &ExprService, table: &str) -> i64 {
        let mut rows = svc
            .db()
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get::<i64>(0).unwrap()
    }

    fn link_source<L: LinkRecord>(link: &L) -> FeatureRef {
        LinkRecord::source(link)
    }

    #[test]
    fn link_record_source_matches_entity_source() {
        let expression = ExpressionLink {
            id: 1,
            source_type: FeatureKind::CufflinksGene,
            source_id: 4,
            sample_id: 2,
            fpkm: 1.0,
        };
        let xref = FeatureXref {
            id: 2,
            source_type: FeatureKind::Transcript,
            source_id: 9,
            external_db_id: 1,
            accession: "NM_001".into(),
            description: None,
        };
        let hit = AlignFeature {
            id: 3,
            source_type: FeatureKind::Gene,
            source_id: 9,
            external_db_id: 1,
            hit_name: "mmu-miR-1".into(),
        };

        assert_eq!(link_source(&expression), FeatureRef::cufflinks_gene(4));
        assert_eq!(link_source(&expression), expression.source());
        assert_eq!(link_source(&xref), xref.source());
        assert_eq!(link_source(&hit), FeatureRef::gene(9));
    }

    #[tokio::test]
    async fn expression_link_roundtrip_and_forward_resolution() {
        let svc = test_service().await;
        let gene = seed_gene(&svc, "G1").await;
        let sample = svc.create_sample(1, "liver").await.unwrap();

        let link = svc
            .create_expression_link(FeatureRef::from(&gene), sample.id, 12.5)
            .await
            .unwrap();
        assert_eq!(link.source_type, FeatureKind::Gene);

        let (loaded, feature) = svc.resolve_expression_link(link.id).await.unwrap();
        assert_eq!(loaded, link);
        assert_eq!(feature, Feature::Gene(gene));
    }

    #[tokio::test]
    async fn unknown_tag_rejected_and_not_persisted() {
        let svc = test_service().await;
        let gene = seed_gene(&svc, "G1").await;
        let sample = svc.create_sample(1, "liver").await.unwrap();

        let err = svc
            .create_expression_link_tagged("protein", gene.id, sample.id, 1.0)
            .await
            .unwrap_err();
        assert!(err.is_invalid_discriminator());
        assert_eq!(count_rows(&svc, "xref_samples").await, 0);
    }

    #[tokio::test]
    async fn tagged_insert_accepts_stored_tag() {
        let svc = test_service().await;
        let gene = seed_gene(&svc, "G1").await;
        let sample = svc.create_sample(1, "liver").await.unwrap();

        let link = svc
            .create_expression_link_tagged("gene", gene.id, sample.id, 0.0)
            .await
            .unwrap();
        assert_eq!(link.source(), FeatureRef::gene(gene.id));
        assert_eq!(link.fpkm, 0.0);
    }

    #[tokio::test]
    async fn negative_fpkm_rejected_and_not_persisted() {
        let svc = test_service().await;
        let gene = seed_gene(&svc, "G1").await;
        let sample = svc.create_sample(1, "liver").await.unwrap();

        let err = svc
            .create_expression_link(FeatureRef::from(&gene), sample.id, -3.0)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Core(CoreError::InvalidMeasurement { .. })
        ));
        assert_eq!(count_rows(&svc, "xref_samples").await, 0);
    }

    #[tokio::test]
    async fn dangling_source_rejected_and_not_persisted() {
        let svc = test_service().await;
        seed_base(&svc).await;
        let sample = svc.create_sample(1, "liver").await.unwrap();

        let err = svc
            .create_expression_link(FeatureRef::transcript(5), sample.id, 1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Resolution { .. }));
        assert_eq!(count_rows(&svc, "xref_samples").await, 0);
    }

    #[tokio::test]
    async fn missing_sample_rejected() {
        let svc = test_service().await;
        let gene = seed_gene(&svc, "G1").await;

        let err = svc
            .create_expression_link(FeatureRef::from(&gene), 404, 1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "sample", .. }));
    }

    #[tokio::test]
    async fn duplicate_measurement_rejected() {
        let svc = test_service().await;
        let gene = seed_gene(&svc, "G1").await;
        let sample = svc.create_sample(1, "liver").await.unwrap();

        svc.create_expression_link(FeatureRef::from(&gene), sample.id, 1.0)
            .await
            .unwrap();
        let dup = svc
            .create_expression_link(FeatureRef::from(&gene), sample.id, 2.0)
            .await;
        assert!(dup.is_err());
    }

    #[tokio::test]
    async fn stored_unknown_tag_fails_forward_resolution() {
        let svc = test_service().await;
        seed_base(&svc).await;
        let sample = svc.create_sample(1, "liver").await.unwrap();
        svc.db()
            .conn()
            .execute(
                "INSERT INTO xref_samples (id, source_type, source_id, target_id, fpkm)
                 VALUES (7, 'protein', 1, ?1, 3.0)",
                [sample.id],
            )
            .await
            .unwrap();

        let err = svc.resolve_expression_link(7).await.unwrap_err();
        assert!(err.is_invalid_discriminator());
    }

    #[tokio::test]
    async fn stored_dangling_row_fails_forward_resolution() {
        let svc = test_service().await;
        seed_base(&svc).await;
        let sample = svc.create_sample(1, "liver").await.unwrap();
        svc.db()
            .conn()
            .execute(
                "INSERT INTO xref_samples (id, source_type, source_id, target_id, fpkm)
                 VALUES (8, 'cufflinks_gene', 31, ?1, 3.0)",
                [sample.id],
            )
            .await
            .unwrap();

        let err = svc.resolve_expression_link(8).await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Resolution { reference } if reference == FeatureRef::cufflinks_gene(31)
        ));
    }

    #[tokio::test]
    async fn missing_link_is_not_found() {
        let svc = test_service().await;
        let err = svc.resolve_feature_xref(1).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn feature_xrefs_ordered_by_external_db() {
        let svc = test_service().await;
        let gene = seed_gene(&svc, "G1").await;
        let pfam = svc.create_external_db("pfam", None).await.unwrap();
        let go = svc.create_external_db("go", None).await.unwrap();

        svc.create_feature_xref(FeatureRef::from(&gene), go.id, "GO:0005525", None)
            .await
            .unwrap();
        svc.create_feature_xref(
            FeatureRef::from(&gene),
            pfam.id,
            "PF00503",
            Some("G-alpha"),
        )
        .await
        .unwrap();

        let xrefs = svc.feature_xrefs(&gene).await.unwrap();
        let dbs: Vec<i64> = xrefs.iter().map(|x| x.external_db_id).collect();
        assert_eq!(dbs, vec![pfam.id, go.id]);

        let (_, feature) = svc.resolve_feature_xref(xrefs[0].id).await.unwrap();
        assert_eq!(feature.feature_ref(), FeatureRef::from(&gene));
    }

    #[tokio::test]
    async fn feature_xref_requires_external_db() {
        let svc = test_service().await;
        let gene = seed_gene(&svc, "G1").await;
        let err = svc
            .create_feature_xref(FeatureRef::from(&gene), 99, "PF00001", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "external db", .. }));
    }

    #[tokio::test]
    async fn align_features_resolve_both_ways() {
        let svc = test_service().await;
        let gene = seed_gene(&svc, "G1").await;
        let transcript = svc.create_transcript(gene.id, "T1").await.unwrap();
        let mirbase = svc.create_external_db("mirbase", None).await.unwrap();

        let hit = svc
            .create_align_feature_tagged("transcript", transcript.id, mirbase.id, "mmu-miR-122-5p")
            .await
            .unwrap();

        let hits = svc.align_features(&transcript).await.unwrap();
        assert_eq!(hits, vec![hit.clone()]);
        assert!(svc.align_features(&gene).await.unwrap().is_empty());

        let (_, feature) = svc.resolve_align_feature(hit.id).await.unwrap();
        assert_eq!(feature, Feature::Transcript(transcript));
    }

    #[tokio::test]
    async fn align_feature_unknown_tag_rejected() {
        let svc = test_service().await;
        let mirbase = svc.create_external_db("mirbase", None).await.unwrap();
        let err = svc
            .create_align_feature_tagged("exon", 1, mirbase.id, "hit")
            .await
            .unwrap_err();
        assert!(err.is_invalid_discriminator());
        assert_eq!(count_rows(&svc, "align_features").await, 0);
    }
}
