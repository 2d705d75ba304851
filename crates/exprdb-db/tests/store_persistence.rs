//! File-backed store: schema creation, reopen, and persisted links.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use exprdb_config::DatabaseConfig;
use exprdb_core::enums::AnnotationSource;
use exprdb_core::ids::FeatureRef;
use exprdb_db::repos::gene::NewGene;
use exprdb_db::service::ExprService;

fn db_path(dir: &TempDir) -> String {
    dir.path().join("exprdb.db").to_string_lossy().into_owned()
}

#[tokio::test]
async fn reopened_store_keeps_links_and_entropy() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    let (gene, dataset) = {
        let svc = ExprService::new_local(&path).await.unwrap();
        let genome = svc.create_genome("Mus musculus", None).await.unwrap();
        let annotation = svc
            .create_annotation(AnnotationSource::Ensembl, None)
            .await
            .unwrap();
        let gene = svc
            .create_gene(&NewGene {
                stable_id: "G1",
                genome_id: genome.id,
                annotation_id: annotation.id,
                ..Default::default()
            })
            .await
            .unwrap();
        let dataset = svc.create_dataset("D1", None).await.unwrap();
        for (name, fpkm) in [("liver", 10.0), ("brain", 0.0), ("heart", 30.0)] {
            let sample = svc.create_sample(dataset.id, name).await.unwrap();
            svc.create_expression_link(FeatureRef::from(&gene), sample.id, fpkm)
                .await
                .unwrap();
        }
        (gene, dataset)
    };

    // Second open reruns the idempotent migrations against existing tables.
    let svc = ExprService::new_local(&path).await.unwrap();
    assert_eq!(svc.find_gene_by_stable_id("G1").await.unwrap(), Some(gene.clone()));
    assert_eq!(svc.xrefs_by_dataset(&gene, &dataset).await.unwrap().len(), 3);

    let h = svc.entropy_by_dataset(&gene, &dataset).await.unwrap();
    assert!((h - 0.5623).abs() < 1e-4);
}

#[tokio::test]
async fn from_config_opens_configured_path() {
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        path: db_path(&dir),
        ..DatabaseConfig::default()
    };

    let svc = ExprService::from_config(&config).await.unwrap();
    svc.create_dataset("D1", None).await.unwrap();
    drop(svc);

    assert!(dir.path().join("exprdb.db").exists());
    let svc = ExprService::from_config(&config).await.unwrap();
    assert!(svc.find_dataset_by_name("D1").await.unwrap().is_some());
}
