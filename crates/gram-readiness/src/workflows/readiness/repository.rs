use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use crate::workflows::survey::{HouseId, Survey, Village, VillageId};

/// Storage abstraction for villages and their submitted surveys.
pub trait SurveyRepository: Send + Sync {
    fn register_village(&self, village: Village) -> Result<(), RepositoryError>;
    fn village(&self, id: &VillageId) -> Result<Option<Village>, RepositoryError>;
    /// Villages in registration order.
    fn villages(&self) -> Result<Vec<Village>, RepositoryError>;
    fn insert_survey(&self, survey: Survey) -> Result<Survey, RepositoryError>;
    /// Surveys for a village in submission order.
    fn surveys_for(&self, id: &VillageId) -> Result<Vec<Survey>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("village `{0}` is already registered")]
    DuplicateVillage(VillageId),
    #[error("village `{0}` not found")]
    UnknownVillage(VillageId),
    #[error("house `{house}` in village `{village}` has already been surveyed")]
    HouseAlreadySurveyed { village: VillageId, house: HouseId },
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
struct RegisterState {
    villages: Vec<Village>,
    surveys: HashMap<VillageId, Vec<Survey>>,
    surveyed_houses: HashSet<(VillageId, HouseId)>,
}

/// Process-local survey register.
#[derive(Debug, Default)]
pub struct InMemorySurveyRepository {
    state: Mutex<RegisterState>,
}

impl InMemorySurveyRepository {
    fn state(&self) -> Result<MutexGuard<'_, RegisterState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::Unavailable("survey register lock poisoned".to_string()))
    }
}

impl SurveyRepository for InMemorySurveyRepository {
    fn register_village(&self, village: Village) -> Result<(), RepositoryError> {
        let mut state = self.state()?;
        if state.villages.iter().any(|existing| existing.id == village.id) {
            return Err(RepositoryError::DuplicateVillage(village.id));
        }
        state.villages.push(village);
        Ok(())
    }

    fn village(&self, id: &VillageId) -> Result<Option<Village>, RepositoryError> {
        let state = self.state()?;
        Ok(state.villages.iter().find(|village| &village.id == id).cloned())
    }

    fn villages(&self) -> Result<Vec<Village>, RepositoryError> {
        Ok(self.state()?.villages.clone())
    }

    fn insert_survey(&self, survey: Survey) -> Result<Survey, RepositoryError> {
        let mut state = self.state()?;
        let village_id = survey.village_id().clone();

        if !state.villages.iter().any(|village| village.id == village_id) {
            return Err(RepositoryError::UnknownVillage(village_id));
        }

        let house_key = (village_id.clone(), survey.house_id().clone());
        if !state.surveyed_houses.insert(house_key) {
            return Err(RepositoryError::HouseAlreadySurveyed {
                village: village_id,
                house: survey.house_id().clone(),
            });
        }

        state
            .surveys
            .entry(village_id)
            .or_default()
            .push(survey.clone());
        Ok(survey)
    }

    fn surveys_for(&self, id: &VillageId) -> Result<Vec<Survey>, RepositoryError> {
        let state = self.state()?;
        Ok(state.surveys.get(id).cloned().unwrap_or_default())
    }
}
