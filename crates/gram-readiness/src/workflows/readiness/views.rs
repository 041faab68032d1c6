use serde::{Deserialize, Serialize};

use super::policy::{PriorityTier, ReadinessColor, Urgency};
use crate::workflows::catalog::DomainKey;
use crate::workflows::survey::VillageId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainReadiness {
    pub domain: DomainKey,
    pub name: String,
    /// Sum of this domain's score across all surveys.
    pub total_score: u32,
    pub average_score: f64,
    pub max_score: u32,
    pub percentage: u8,
    /// Points missing from the average to reach the max score.
    pub gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapEntry {
    pub domain: DomainKey,
    pub gap_percentage: u8,
    pub gap_points: f64,
    pub suggested_budget: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedProject {
    pub domain: DomainKey,
    pub project_type: String,
    pub scheme: String,
    pub estimated_budget: u64,
    pub urgency: Urgency,
}

/// Readiness of one village, derived entirely from its current survey set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessSnapshot {
    pub village_id: VillageId,
    pub village_name: String,
    pub disadvantaged_population: u32,
    pub total_surveys: usize,
    pub domain_scores: Vec<DomainReadiness>,
    pub overall_readiness: u8,
    pub priority: PriorityTier,
    pub color: ReadinessColor,
    pub top_gaps: Vec<GapEntry>,
    pub recommended_projects: Vec<RecommendedProject>,
    pub priority_score: f64,
}

impl ReadinessSnapshot {
    pub fn domain(&self, key: &str) -> Option<&DomainReadiness> {
        self.domain_scores
            .iter()
            .find(|entry| entry.domain.as_str() == key)
    }

    /// Total budget suggested across the top gaps.
    pub fn recommended_budget(&self) -> u64 {
        self.top_gaps
            .iter()
            .map(|gap| gap.suggested_budget)
            .fold(0, u64::saturating_add)
    }

    pub fn is_surveyed(&self) -> bool {
        self.total_surveys > 0
    }
}
