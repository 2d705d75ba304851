use clap::Parser;
use exprdb_config::ExprConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `exprdb` binary.
#[derive(Debug, Parser)]
#[command(
    name = "exprdb",
    version,
    about = "exprdb - expression links and entropy over a genomic feature store"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (defaults to `general.pretty` from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Database path, overriding `database.path`
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve global flags, falling back to config where a flag is absent.
    #[must_use]
    pub fn global_flags(&self, config: &ExprConfig) -> GlobalFlags {
        let format = self.format.unwrap_or(if config.general.pretty {
            OutputFormat::Json
        } else {
            OutputFormat::Raw
        });
        GlobalFlags {
            format,
            quiet: self.quiet,
        }
    }
}
