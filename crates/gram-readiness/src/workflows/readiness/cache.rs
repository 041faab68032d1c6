use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::views::ReadinessSnapshot;
use crate::workflows::survey::{SurveyId, VillageId};

/// A computed snapshot together with the survey set it was computed from.
#[derive(Debug, Clone, Serialize)]
pub struct CachedReadiness {
    pub snapshot: ReadinessSnapshot,
    pub survey_ids: Vec<SurveyId>,
    pub last_updated: DateTime<Utc>,
}

/// Read-through cache of readiness snapshots keyed by village.
///
/// An entry is only served while the village's survey ids match the ones it
/// was computed from; anything else is a miss and the caller recomputes.
#[derive(Debug, Default)]
pub struct ReadinessCache {
    entries: Mutex<HashMap<VillageId, CachedReadiness>>,
}

impl ReadinessCache {
    pub fn get_fresh(&self, village_id: &VillageId, survey_ids: &[SurveyId]) -> Option<CachedReadiness> {
        self.entries()
            .get(village_id)
            .filter(|entry| entry.survey_ids == survey_ids)
            .cloned()
    }

    pub fn store(&self, entry: CachedReadiness) {
        self.entries()
            .insert(entry.snapshot.village_id.clone(), entry);
    }

    /// Drops the entry for a village; returns whether one was present.
    pub fn invalidate(&self, village_id: &VillageId) -> bool {
        self.entries().remove(village_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Entries are whole values replaced under the lock, so a poisoned map is still consistent.
    fn entries(&self) -> MutexGuard<'_, HashMap<VillageId, CachedReadiness>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
