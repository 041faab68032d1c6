//! Village readiness aggregation, classification and ranking.

mod cache;
mod policy;
mod repository;
mod rules;
mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use cache::{CachedReadiness, ReadinessCache};
pub use policy::{PriorityTier, ReadinessColor, ScoringPolicy, Urgency};
pub use repository::{InMemorySurveyRepository, RepositoryError, SurveyRepository};
pub use service::{ReadinessServiceError, VillageReadinessService};
pub use views::{DomainReadiness, GapEntry, ReadinessSnapshot, RecommendedProject};

use std::sync::Arc;

use crate::workflows::catalog::DomainCatalog;
use crate::workflows::survey::{Survey, Village};

/// Stateless aggregator folding a village's surveys into a readiness snapshot.
#[derive(Debug, Clone)]
pub struct ReadinessEngine {
    catalog: Arc<DomainCatalog>,
    policy: ScoringPolicy,
}

impl ReadinessEngine {
    pub fn new(catalog: Arc<DomainCatalog>, policy: ScoringPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Standard catalog with the default policy.
    pub fn standard() -> Self {
        Self::new(Arc::new(DomainCatalog::standard()), ScoringPolicy::default())
    }

    pub fn catalog(&self) -> &DomainCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Computes the readiness snapshot for `village` from its surveys.
    ///
    /// Never fails: an empty survey set yields the gray `unknown` snapshot and
    /// zero max scores degrade to 0%. The same inputs always produce the same
    /// snapshot.
    pub fn compute(&self, surveys: &[Survey], village: &Village) -> ReadinessSnapshot {
        let survey_count = surveys.len();
        let domain_scores = rules::aggregate_domains(&self.catalog, surveys);

        if survey_count == 0 {
            return ReadinessSnapshot {
                village_id: village.id.clone(),
                village_name: village.display_name().to_string(),
                disadvantaged_population: village.disadvantaged_population,
                total_surveys: 0,
                domain_scores,
                overall_readiness: 0,
                priority: PriorityTier::Unknown,
                color: PriorityTier::Unknown.color(),
                top_gaps: Vec::new(),
                recommended_projects: Vec::new(),
                priority_score: 0.0,
            };
        }

        let overall_readiness = rules::overall_readiness(&domain_scores, survey_count);
        let priority = self.policy.classify(overall_readiness);
        let top_gaps = rules::top_gaps(
            &self.catalog,
            &self.policy,
            &domain_scores,
            survey_count,
            village,
        );
        let recommended_projects = rules::recommend_projects(&self.catalog, &self.policy, &top_gaps);
        let priority_score =
            rules::priority_score(&self.policy, overall_readiness, &domain_scores, village);

        ReadinessSnapshot {
            village_id: village.id.clone(),
            village_name: village.display_name().to_string(),
            disadvantaged_population: village.disadvantaged_population,
            total_surveys: survey_count,
            domain_scores,
            overall_readiness,
            priority,
            color: priority.color(),
            top_gaps,
            recommended_projects,
            priority_score,
        }
    }
}
