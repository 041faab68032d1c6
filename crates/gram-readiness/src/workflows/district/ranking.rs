use serde::{Deserialize, Serialize};

use crate::workflows::readiness::{GapEntry, PriorityTier, ReadinessColor, ReadinessSnapshot};
use crate::workflows::survey::VillageId;

pub const DEFAULT_RANKING_LIMIT: usize = 50;

/// Narrows the ranking to a tier and/or readiness band.
///
/// Villages without surveys are only listed when `priority` asks for
/// [`PriorityTier::Unknown`] explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityFilter {
    #[serde(default)]
    pub priority: Option<PriorityTier>,
    #[serde(default)]
    pub min_readiness: Option<u8>,
    #[serde(default)]
    pub max_readiness: Option<u8>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for PriorityFilter {
    fn default() -> Self {
        Self {
            priority: None,
            min_readiness: None,
            max_readiness: None,
            limit: DEFAULT_RANKING_LIMIT,
        }
    }
}

impl PriorityFilter {
    pub fn matches(&self, snapshot: &ReadinessSnapshot) -> bool {
        match self.priority {
            Some(priority) if snapshot.priority != priority => return false,
            None if snapshot.priority == PriorityTier::Unknown => return false,
            _ => {}
        }

        if let Some(min) = self.min_readiness {
            if snapshot.overall_readiness < min {
                return false;
            }
        }
        if let Some(max) = self.max_readiness {
            if snapshot.overall_readiness > max {
                return false;
            }
        }

        true
    }
}

fn default_limit() -> usize {
    DEFAULT_RANKING_LIMIT
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedVillage {
    pub village_id: VillageId,
    pub village_name: String,
    pub readiness: u8,
    pub priority: PriorityTier,
    pub color: ReadinessColor,
    pub priority_score: f64,
    pub disadvantaged_population: u32,
    pub top_gaps: Vec<GapEntry>,
    pub recommended_budget: u64,
}

/// Most urgent villages first, by descending priority score.
pub fn rank_villages(snapshots: &[ReadinessSnapshot], filter: &PriorityFilter) -> Vec<RankedVillage> {
    let mut matching: Vec<&ReadinessSnapshot> = snapshots
        .iter()
        .filter(|snapshot| filter.matches(snapshot))
        .collect();

    matching.sort_by(|a, b| {
        b.priority_score
            .total_cmp(&a.priority_score)
            .then_with(|| a.village_name.cmp(&b.village_name))
    });

    matching
        .into_iter()
        .take(filter.limit)
        .map(|snapshot| RankedVillage {
            village_id: snapshot.village_id.clone(),
            village_name: snapshot.village_name.clone(),
            readiness: snapshot.overall_readiness,
            priority: snapshot.priority,
            color: snapshot.color,
            priority_score: snapshot.priority_score,
            disadvantaged_population: snapshot.disadvantaged_population,
            top_gaps: snapshot.top_gaps.iter().take(2).cloned().collect(),
            recommended_budget: snapshot.recommended_budget(),
        })
        .collect()
}
