use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::workflows::catalog::DomainCatalog;
use crate::workflows::readiness::ReadinessSnapshot;

const REPORT_HEADER: [&str; 9] = [
    "Village",
    "SC Population",
    "Readiness %",
    "Priority",
    "Color",
    "Top Gap",
    "Gap %",
    "Est. Budget (INR)",
    "Recommended Project",
];

const NOT_APPLICABLE: &str = "N/A";

/// One line of the district report spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistrictReportRow {
    #[serde(rename = "Village")]
    pub village: String,
    #[serde(rename = "SC Population")]
    pub disadvantaged_population: u32,
    #[serde(rename = "Readiness %")]
    pub readiness: u8,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Top Gap")]
    pub top_gap: String,
    #[serde(rename = "Gap %")]
    pub gap_percentage: u8,
    #[serde(rename = "Est. Budget (INR)")]
    pub estimated_budget: u64,
    #[serde(rename = "Recommended Project")]
    pub recommended_project: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report row: {0}")]
    Csv(#[from] csv::Error),
}

/// Report rows ordered by descending priority score, ties by village name.
pub fn report_rows(catalog: &DomainCatalog, snapshots: &[ReadinessSnapshot]) -> Vec<DistrictReportRow> {
    let mut ordered: Vec<&ReadinessSnapshot> = snapshots.iter().collect();
    ordered.sort_by(|a, b| {
        b.priority_score
            .total_cmp(&a.priority_score)
            .then_with(|| a.village_name.cmp(&b.village_name))
    });

    ordered
        .into_iter()
        .map(|snapshot| {
            let top_gap = snapshot.top_gaps.first();
            let project = snapshot.recommended_projects.first();

            DistrictReportRow {
                village: snapshot.village_name.clone(),
                disadvantaged_population: snapshot.disadvantaged_population,
                readiness: snapshot.overall_readiness,
                priority: snapshot.priority.label().to_string(),
                color: snapshot.color.label().to_string(),
                top_gap: top_gap
                    .map(|gap| {
                        catalog
                            .domain(&gap.domain)
                            .map(|domain| domain.name.clone())
                            .unwrap_or_else(|| gap.domain.to_string())
                    })
                    .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
                gap_percentage: top_gap.map(|gap| gap.gap_percentage).unwrap_or(0),
                estimated_budget: top_gap.map(|gap| gap.suggested_budget).unwrap_or(0),
                recommended_project: project
                    .map(|project| project.project_type.clone())
                    .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            }
        })
        .collect()
}

/// Writes the header followed by every row. The header is written even when
/// there are no rows.
pub fn write_report<W: Write>(writer: W, rows: &[DistrictReportRow]) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(REPORT_HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_report_to_path(path: impl AsRef<Path>, rows: &[DistrictReportRow]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_report(file, rows)
}
