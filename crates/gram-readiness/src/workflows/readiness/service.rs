use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::cache::{CachedReadiness, ReadinessCache};
use super::repository::{RepositoryError, SurveyRepository};
use super::views::ReadinessSnapshot;
use super::ReadinessEngine;
use crate::workflows::district::{
    district_overview, rank_villages, report_rows, village_detail, DistrictOverview,
    DistrictReportRow, PriorityFilter, RankedVillage, VillageDetail,
};
use crate::workflows::survey::{Survey, SurveyError, SurveyId, SurveySubmission, Village, VillageId};

/// Service composing the survey repository, the readiness engine and the
/// snapshot cache.
pub struct VillageReadinessService<R> {
    repository: Arc<R>,
    engine: Arc<ReadinessEngine>,
    cache: ReadinessCache,
    sequence: AtomicU64,
}

impl<R> VillageReadinessService<R>
where
    R: SurveyRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: Arc<ReadinessEngine>) -> Self {
        Self {
            repository,
            engine,
            cache: ReadinessCache::default(),
            sequence: AtomicU64::new(1),
        }
    }

    pub fn engine(&self) -> &ReadinessEngine {
        &self.engine
    }

    pub fn register_village(&self, village: Village) -> Result<(), ReadinessServiceError> {
        self.repository.register_village(village)?;
        Ok(())
    }

    pub fn villages(&self) -> Result<Vec<Village>, ReadinessServiceError> {
        Ok(self.repository.villages()?)
    }

    /// Score a submission, store it and drop the village's cached snapshot.
    pub fn submit(&self, submission: SurveySubmission) -> Result<Survey, ReadinessServiceError> {
        let survey = Survey::ingest(self.engine.catalog(), self.next_survey_id(), submission)?;
        let stored = self.repository.insert_survey(survey)?;
        self.cache.invalidate(stored.village_id());

        tracing::info!(
            survey_id = %stored.id(),
            village_id = %stored.village_id(),
            house_id = %stored.house_id(),
            overall_score = stored.overall_score(),
            "survey accepted"
        );

        Ok(stored)
    }

    /// Current readiness for a village, recomputed only when its survey set
    /// differs from the cached one.
    pub fn readiness(&self, village_id: &VillageId) -> Result<CachedReadiness, ReadinessServiceError> {
        let village = self
            .repository
            .village(village_id)?
            .ok_or_else(|| ReadinessServiceError::UnknownVillage(village_id.clone()))?;
        self.readiness_for(&village)
    }

    /// Snapshots for every registered village, in registration order.
    pub fn snapshots(&self) -> Result<Vec<ReadinessSnapshot>, ReadinessServiceError> {
        self.repository
            .villages()?
            .iter()
            .map(|village| self.readiness_for(village).map(|cached| cached.snapshot))
            .collect()
    }

    pub fn overview(&self) -> Result<DistrictOverview, ReadinessServiceError> {
        Ok(district_overview(&self.snapshots()?))
    }

    pub fn rank(&self, filter: &PriorityFilter) -> Result<Vec<RankedVillage>, ReadinessServiceError> {
        Ok(rank_villages(&self.snapshots()?, filter))
    }

    pub fn detail(&self, village_id: &VillageId) -> Result<VillageDetail, ReadinessServiceError> {
        let village = self
            .repository
            .village(village_id)?
            .ok_or_else(|| ReadinessServiceError::UnknownVillage(village_id.clone()))?;
        let cached = self.readiness_for(&village)?;
        Ok(village_detail(&village, &cached, self.engine.policy()))
    }

    pub fn export_rows(&self) -> Result<Vec<DistrictReportRow>, ReadinessServiceError> {
        Ok(report_rows(self.engine.catalog(), &self.snapshots()?))
    }

    fn readiness_for(&self, village: &Village) -> Result<CachedReadiness, ReadinessServiceError> {
        let surveys = self.repository.surveys_for(&village.id)?;
        let survey_ids: Vec<SurveyId> = surveys.iter().map(|survey| survey.id().clone()).collect();

        if let Some(cached) = self.cache.get_fresh(&village.id, &survey_ids) {
            return Ok(cached);
        }

        let snapshot = self.engine.compute(&surveys, village);
        tracing::debug!(
            village_id = %village.id,
            surveys = surveys.len(),
            readiness = snapshot.overall_readiness,
            priority = snapshot.priority.label(),
            "readiness recomputed"
        );

        let entry = CachedReadiness {
            snapshot,
            survey_ids,
            last_updated: Utc::now(),
        };
        self.cache.store(entry.clone());
        Ok(entry)
    }

    fn next_survey_id(&self) -> SurveyId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        SurveyId(format!("survey-{id:06}"))
    }
}

/// Error raised by the readiness service.
#[derive(Debug, thiserror::Error)]
pub enum ReadinessServiceError {
    #[error(transparent)]
    Survey(#[from] SurveyError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("village `{0}` not found")]
    UnknownVillage(VillageId),
}
