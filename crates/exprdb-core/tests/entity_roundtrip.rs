//! Serde roundtrip and JsonSchema validation tests for the entity model.

use exprdb_core::entities::*;
use exprdb_core::enums::*;
use exprdb_core::ids::{FeatureRef, ScopedAccession};
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    sample_roundtrip,
    Sample,
    Sample {
        id: 12,
        name: "liver".into(),
        dataset_id: 1,
    }
);

roundtrip_and_validate!(
    expression_link_roundtrip,
    ExpressionLink,
    ExpressionLink {
        id: 1,
        source_type: FeatureKind::CufflinksGene,
        source_id: 44,
        sample_id: 12,
        fpkm: 0.0,
    }
);

roundtrip_and_validate!(
    feature_xref_roundtrip,
    FeatureXref,
    FeatureXref {
        id: 3,
        source_type: FeatureKind::Transcript,
        source_id: 8,
        external_db_id: 2,
        accession: "PF00069".into(),
        description: Some("Protein kinase domain".into()),
    }
);

roundtrip_and_validate!(
    feature_gene_roundtrip,
    Feature,
    Feature::Gene(Gene {
        id: 1,
        stable_id: "ENSMUSG00000000001".into(),
        symbol: Some("Gnai3".into()),
        biotype: Some("protein_coding".into()),
        genome_id: 1,
        annotation_id: 1,
    })
);

roundtrip_and_validate!(
    feature_cufflinks_gene_roundtrip,
    Feature,
    Feature::CufflinksGene(CufflinksGene {
        id: 1,
        dataset_id: 2,
        accession: "XLOC_000001".into(),
        genome_id: 1,
        annotation_id: 3,
    })
);

roundtrip_and_validate!(
    scoped_accession_roundtrip,
    ScopedAccession,
    ScopedAccession::new(2, "XLOC_000001")
);

#[test]
fn link_source_type_serializes_as_stored_tag() {
    let link = AlignFeature {
        id: 1,
        source_type: FeatureKind::CufflinksTranscript,
        source_id: 5,
        external_db_id: 1,
        hit_name: "miR-122".into(),
    };
    let json = serde_json::to_value(&link).unwrap();
    assert_eq!(json["source_type"], "cufflinks_transcript");
    assert_eq!(link.source(), FeatureRef::cufflinks_transcript(5));
}

#[test]
fn expression_link_rejects_unknown_source_type() {
    let json = serde_json::json!({
        "id": 1,
        "source_type": "protein",
        "source_id": 1,
        "sample_id": 1,
        "fpkm": 1.0
    });
    assert!(serde_json::from_value::<ExpressionLink>(json).is_err());
}
