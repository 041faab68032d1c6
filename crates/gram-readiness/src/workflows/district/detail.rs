use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::workflows::catalog::DomainKey;
use crate::workflows::readiness::{CachedReadiness, ReadinessSnapshot, RecommendedProject, ScoringPolicy};
use crate::workflows::survey::Village;

const PIPELINE_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainStanding {
    pub domain: DomainKey,
    pub name: String,
    pub percentage: u8,
    pub gap: f64,
}

/// Drill-down report for a single village.
#[derive(Debug, Clone, Serialize)]
pub struct VillageDetail {
    pub village: Village,
    pub readiness: ReadinessSnapshot,
    pub last_updated: DateTime<Utc>,
    pub project_pipeline: Vec<RecommendedProject>,
    pub domains_on_track: Vec<DomainStanding>,
    pub domains_critical: Vec<DomainStanding>,
}

pub fn village_detail(village: &Village, cached: &CachedReadiness, policy: &ScoringPolicy) -> VillageDetail {
    let snapshot = &cached.snapshot;

    let standings = |keep: &dyn Fn(u8) -> bool| -> Vec<DomainStanding> {
        if !snapshot.is_surveyed() {
            return Vec::new();
        }
        snapshot
            .domain_scores
            .iter()
            .filter(|entry| entry.max_score > 0 && keep(entry.percentage))
            .map(|entry| DomainStanding {
                domain: entry.domain.clone(),
                name: entry.name.clone(),
                percentage: entry.percentage,
                gap: entry.gap,
            })
            .collect()
    };

    let domains_on_track = standings(&|percentage: u8| percentage >= policy.ready_at);
    let domains_critical = standings(&|percentage: u8| percentage < policy.critical_below);

    VillageDetail {
        village: village.clone(),
        readiness: snapshot.clone(),
        last_updated: cached.last_updated,
        project_pipeline: snapshot
            .recommended_projects
            .iter()
            .take(PIPELINE_LENGTH)
            .cloned()
            .collect(),
        domains_on_track,
        domains_critical,
    }
}
