//! Discriminators and closed label sets for exprdb.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The string returned by `as_str()` is the exact value stored in SQL, and
//! `FromStr` accepts exactly those strings and nothing else.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// FeatureKind
// ---------------------------------------------------------------------------

/// The closed set of feature variants a link row can point at.
///
/// Stored in the `source_type` column of `xref_samples`, `xref_features`
/// and `align_features`. Each variant has its own id space, so a link is
/// only identified by the pair `(source_type, source_id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Gene,
    Transcript,
    CufflinksGene,
    CufflinksTranscript,
}

impl FeatureKind {
    pub const ALL: [Self; 4] = [
        Self::Gene,
        Self::Transcript,
        Self::CufflinksGene,
        Self::CufflinksTranscript,
    ];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gene => "gene",
            Self::Transcript => "transcript",
            Self::CufflinksGene => "cufflinks_gene",
            Self::CufflinksTranscript => "cufflinks_transcript",
        }
    }

    /// Whether features of this kind are only meaningful inside one dataset.
    #[must_use]
    pub const fn is_dataset_scoped(self) -> bool {
        matches!(self, Self::CufflinksGene | Self::CufflinksTranscript)
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::InvalidDiscriminator {
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// AnnotationSource
// ---------------------------------------------------------------------------

/// Provenance of an annotation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationSource {
    Ensembl,
    Rum,
    None,
}

impl AnnotationSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ensembl => "ensembl",
            Self::Rum => "rum",
            Self::None => "none",
        }
    }
}

impl fmt::Display for AnnotationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LinkKind
// ---------------------------------------------------------------------------

/// The three polymorphic link tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Expression,
    FeatureXref,
    AlignFeature,
}

impl LinkKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expression => "expression",
            Self::FeatureXref => "feature_xref",
            Self::AlignFeature => "align_feature",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected:literal) => {
            #[test]
            fn $name() {
                let val: $ty = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected));
                let parsed: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(parsed, val);
                assert_eq!(val.as_str(), $expected);
            }
        };
    }

    test_serde_roundtrip!(feature_kind_gene, FeatureKind, FeatureKind::Gene, "gene");
    test_serde_roundtrip!(
        feature_kind_cufflinks_transcript,
        FeatureKind,
        FeatureKind::CufflinksTranscript,
        "cufflinks_transcript"
    );
    test_serde_roundtrip!(
        annotation_source_none,
        AnnotationSource,
        AnnotationSource::None,
        "none"
    );

    #[test]
    fn feature_kind_from_str_accepts_every_stored_tag() {
        for kind in FeatureKind::ALL {
            assert_eq!(kind.as_str().parse::<FeatureKind>().unwrap(), kind);
        }
    }

    #[test]
    fn feature_kind_from_str_rejects_unknown_tag() {
        let err = "protein".parse::<FeatureKind>().unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidDiscriminator { ref value } if value == "protein")
        );
    }

    #[test]
    fn feature_kind_from_str_is_case_sensitive() {
        assert!("Gene".parse::<FeatureKind>().is_err());
        assert!(" gene".parse::<FeatureKind>().is_err());
    }

    #[test]
    fn feature_kind_unknown_tag_rejected_by_serde() {
        let result: Result<FeatureKind, _> = serde_json::from_str("\"protein\"");
        assert!(result.is_err());
    }

    #[test]
    fn only_cufflinks_kinds_are_dataset_scoped() {
        assert!(!FeatureKind::Gene.is_dataset_scoped());
        assert!(!FeatureKind::Transcript.is_dataset_scoped());
        assert!(FeatureKind::CufflinksGene.is_dataset_scoped());
        assert!(FeatureKind::CufflinksTranscript.is_dataset_scoped());
    }
}
