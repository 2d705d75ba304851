use anyhow::Context;
use clap::Parser;
use exprdb_config::ExprConfig;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("exprdb error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config =
        ExprConfig::load_with_dotenv().context("failed to load exprdb config")?;
    apply_db_override(&mut config, cli.db.as_deref())?;
    let flags = cli.global_flags(&config);

    let ctx = context::AppContext::init(config)
        .await
        .context("failed to open expression store")?;

    commands::dispatch::dispatch(&cli.command, &ctx, &flags).await
}

/// Point the store at `--db`, re-validating since figment validation already ran.
fn apply_db_override(config: &mut ExprConfig, db: Option<&str>) -> anyhow::Result<()> {
    if let Some(path) = db {
        config.database.path = path.to_string();
        config.database.validate().context("invalid --db value")?;
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("EXPRDB_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
