use crate::demo::{run_demo, DemoArgs};
use crate::report::{run_catalog, run_export, run_rank, run_report, ExportArgs, RankArgs, ReportArgs};
use clap::{Parser, Subcommand};
use gram_readiness::config::AppConfig;
use gram_readiness::error::AppError;
use gram_readiness::telemetry;
use gram_readiness::workflows::readiness::{ReadinessEngine, ScoringPolicy};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "gram-readiness",
    about = "Score village readiness from house surveys and rank villages for intervention",
    version
)]
struct Cli {
    /// Domain catalog JSON (overrides READINESS_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// District heatmap, or the detailed report for one village
    Report(ReportArgs),
    /// Villages ordered by intervention priority
    Rank(RankArgs),
    /// Write the district report as CSV
    Export(ExportArgs),
    /// List the domains and indicators being scored
    Catalog,
    /// Score a generated red/yellow/green district (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    telemetry::init(&config.telemetry)?;

    let catalog = config.catalog()?;
    info!(
        ?config.environment,
        domains = catalog.domains().len(),
        indicators = catalog.indicator_count(),
        custom_catalog = config.catalog_path.is_some(),
        "domain catalog loaded"
    );
    let engine = Arc::new(ReadinessEngine::new(Arc::new(catalog), ScoringPolicy::default()));

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Report(args) => run_report(engine, args),
        Command::Rank(args) => run_rank(engine, args),
        Command::Export(args) => run_export(engine, args),
        Command::Catalog => run_catalog(&engine),
        Command::Demo(args) => run_demo(engine, args),
    }
}
