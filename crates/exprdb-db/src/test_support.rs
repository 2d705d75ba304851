//! Shared test utilities for exprdb-db unit tests.

pub(crate) mod helpers {
    use exprdb_core::entities::{Annotation, Dataset, Genome};
    use exprdb_core::enums::AnnotationSource;

    use crate::ExprDb;
    use crate::service::ExprService;

    /// Create an in-memory ExprService.
    pub async fn test_service() -> ExprService {
        let db = ExprDb::open_local(":memory:").await.unwrap();
        ExprService::from_db(db)
    }

    /// Reference rows most feature tests need.
    pub struct Base {
        pub genome: Genome,
        pub annotation: Annotation,
        pub dataset: Dataset,
    }

    /// Create one genome, one Ensembl annotation and a dataset named `d1`.
    pub async fn seed_base(svc: &ExprService) -> Base {
        let genome = svc.create_genome("Mus musculus", Some("GRCm38")).await.unwrap();
        let annotation = svc
            .create_annotation(AnnotationSource::Ensembl, Some("release-75"))
            .await
            .unwrap();
        let dataset = svc.create_dataset("d1", None).await.unwrap();
        Base {
            genome,
            annotation,
            dataset,
        }
    }
}
