use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the store and apply the schema.
    Init,
    /// Look up a feature by stable id or accession.
    Feature(FeatureArgs),
    /// List a feature's expression links, optionally narrowed to a dataset or sample.
    Xrefs(XrefsArgs),
    /// Shannon entropy of a feature's expression across a dataset.
    Entropy(EntropyArgs),
    /// Record an expression measurement.
    Link(LinkArgs),
}

/// Identifies one feature from the command line.
#[derive(Clone, Debug, Args)]
pub struct FeatureArgs {
    /// gene, transcript, cufflinks_gene or cufflinks_transcript
    pub kind: String,
    /// Stable id for genes/transcripts, accession for Cufflinks models.
    pub accession: String,
    /// Dataset name (required for Cufflinks models).
    #[arg(long)]
    pub dataset: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct XrefsArgs {
    #[command(flatten)]
    pub feature: FeatureArgs,
    /// Sample name inside `--dataset`.
    #[arg(long, requires = "dataset")]
    pub sample: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct EntropyArgs {
    /// gene, transcript, cufflinks_gene or cufflinks_transcript
    pub kind: String,
    pub accession: String,
    /// Dataset whose samples form the distribution.
    #[arg(long)]
    pub dataset: String,
}

#[derive(Clone, Debug, Args)]
pub struct LinkArgs {
    /// Feature discriminator, validated against the closed set.
    #[arg(long)]
    pub source_type: String,
    #[arg(long)]
    pub source_id: i64,
    /// Dataset containing the sample.
    #[arg(long)]
    pub dataset: String,
    #[arg(long)]
    pub sample: String,
    #[arg(long)]
    pub fpkm: f64,
}
