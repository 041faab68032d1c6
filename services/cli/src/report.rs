use crate::infra::{load_service, parse_priority, DatasetArgs};
use chrono::{DateTime, SecondsFormat, Utc};
use clap::Args;
use gram_readiness::error::AppError;
use gram_readiness::workflows::district::{
    write_report, write_report_to_path, DistrictOverview, DomainStanding, PriorityFilter,
    RankedVillage, VillageDetail, DEFAULT_RANKING_LIMIT,
};
use gram_readiness::workflows::readiness::{PriorityTier, ReadinessEngine};
use gram_readiness::workflows::survey::VillageId;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    #[command(flatten)]
    pub(crate) dataset: DatasetArgs,
    /// Show the detailed report for a single village id
    #[arg(long)]
    pub(crate) village: Option<String>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    #[command(flatten)]
    pub(crate) dataset: DatasetArgs,
    /// Only list villages in this tier (critical, moderate, ready, unknown)
    #[arg(long, value_parser = parse_priority)]
    pub(crate) priority: Option<PriorityTier>,
    #[arg(long)]
    pub(crate) min_readiness: Option<u8>,
    #[arg(long)]
    pub(crate) max_readiness: Option<u8>,
    #[arg(long, default_value_t = DEFAULT_RANKING_LIMIT)]
    pub(crate) limit: usize,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) dataset: DatasetArgs,
    /// Destination file; stdout when omitted
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonEnvelope<'a, T: Serialize> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    body: &'a T,
}

fn print_json<T: Serialize>(body: &T) -> Result<(), AppError> {
    let envelope = JsonEnvelope {
        generated_at: Utc::now(),
        body,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub(crate) fn run_report(engine: Arc<ReadinessEngine>, args: ReportArgs) -> Result<(), AppError> {
    let service = load_service(engine, &args.dataset)?;

    match args.village {
        Some(id) => {
            let detail = service.detail(&VillageId::new(id))?;
            if args.json {
                print_json(&detail)
            } else {
                render_detail(&detail);
                Ok(())
            }
        }
        None => {
            let overview = service.overview()?;
            if args.json {
                print_json(&overview)
            } else {
                render_overview(&overview);
                Ok(())
            }
        }
    }
}

pub(crate) fn run_rank(engine: Arc<ReadinessEngine>, args: RankArgs) -> Result<(), AppError> {
    let service = load_service(engine, &args.dataset)?;
    let filter = PriorityFilter {
        priority: args.priority,
        min_readiness: args.min_readiness,
        max_readiness: args.max_readiness,
        limit: args.limit,
    };

    let ranked = service.rank(&filter)?;
    if args.json {
        #[derive(Serialize)]
        struct Ranking<'a> {
            filter: &'a PriorityFilter,
            villages: &'a [RankedVillage],
        }
        return print_json(&Ranking {
            filter: &filter,
            villages: &ranked,
        });
    }

    render_ranking(&ranked);
    Ok(())
}

pub(crate) fn run_export(engine: Arc<ReadinessEngine>, args: ExportArgs) -> Result<(), AppError> {
    let service = load_service(engine, &args.dataset)?;
    let rows = service.export_rows()?;

    match args.output {
        Some(path) => {
            write_report_to_path(&path, &rows)?;
            tracing::info!(rows = rows.len(), path = %path.display(), "district report written");
        }
        None => write_report(std::io::stdout().lock(), &rows)?,
    }
    Ok(())
}

pub(crate) fn run_catalog(engine: &ReadinessEngine) -> Result<(), AppError> {
    let catalog = engine.catalog();
    println!(
        "Domain catalog: {} domains, {} indicators, max {} points per survey",
        catalog.domains().len(),
        catalog.indicator_count(),
        catalog.total_max_score()
    );

    for domain in catalog.domains() {
        println!(
            "\n{} [{}] max {} | {} via {} at Rs {} per gap point",
            domain.name,
            domain.key,
            domain.max_score,
            domain.project_type,
            domain.scheme,
            domain.unit_cost
        );
        for indicator in &domain.indicators {
            println!(
                "  - {} ({}) {}",
                indicator.id,
                indicator.answer_type.label(),
                indicator.question
            );
        }
    }
    Ok(())
}

pub(crate) fn render_overview(overview: &DistrictOverview) {
    let stats = &overview.stats;
    println!("District readiness heatmap");
    println!(
        "{} villages | red {} | yellow {} | green {} | gray {} | average readiness {}%",
        stats.total_villages, stats.red, stats.yellow, stats.green, stats.gray, stats.average_readiness
    );

    for entry in &overview.heatmap {
        println!(
            "- [{:<6}] {:<24} {:>3}% {:<8} {} surveys, SC population {}",
            entry.color.label(),
            entry.village_name,
            entry.readiness,
            entry.priority.label(),
            entry.surveys,
            entry.disadvantaged_population
        );
    }
}

pub(crate) fn render_ranking(ranked: &[RankedVillage]) {
    if ranked.is_empty() {
        println!("No villages match the filter");
        return;
    }

    println!("Priority ranking");
    for (position, village) in ranked.iter().enumerate() {
        let gaps = village
            .top_gaps
            .iter()
            .map(|gap| format!("{} {}%", gap.domain, gap.gap_percentage))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:>3}. {:<24} score {:>6.2} | {:>3}% {} | SC population {} | budget Rs {}{}",
            position + 1,
            village.village_name,
            village.priority_score,
            village.readiness,
            village.priority.label(),
            village.disadvantaged_population,
            village.recommended_budget,
            if gaps.is_empty() {
                String::new()
            } else {
                format!(" | gaps: {gaps}")
            }
        );
    }
}

pub(crate) fn render_detail(detail: &VillageDetail) {
    let snapshot = &detail.readiness;
    println!(
        "{} ({}) readiness {}% [{} / {}]",
        snapshot.village_name,
        snapshot.village_id,
        snapshot.overall_readiness,
        snapshot.priority.label(),
        snapshot.color.label()
    );
    println!(
        "Surveys {} | SC population {} | updated {}",
        snapshot.total_surveys,
        snapshot.disadvantaged_population,
        detail
            .last_updated
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    );

    println!("\nDomain scores");
    for domain in &snapshot.domain_scores {
        println!(
            "- {:<32} {:>3}% (avg {:.2} of {}, gap {:.2})",
            domain.name, domain.percentage, domain.average_score, domain.max_score, domain.gap
        );
    }

    if detail.project_pipeline.is_empty() {
        println!("\nProject pipeline: none");
    } else {
        println!("\nProject pipeline");
        for project in &detail.project_pipeline {
            println!(
                "- [{}] {} under {}: Rs {}",
                project.urgency.label(),
                project.project_type,
                project.scheme,
                project.estimated_budget
            );
        }
    }

    let names = |standings: &[DomainStanding]| {
        standings
            .iter()
            .map(|standing| format!("{} {}%", standing.name, standing.percentage))
            .collect::<Vec<_>>()
            .join(", ")
    };
    if !detail.domains_on_track.is_empty() {
        println!("\nOn track: {}", names(&detail.domains_on_track));
    }
    if !detail.domains_critical.is_empty() {
        println!("Critical: {}", names(&detail.domains_critical));
    }
}
