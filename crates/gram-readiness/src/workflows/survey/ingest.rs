use std::collections::{BTreeMap, HashSet};

use super::answer::{score_indicator, Answer};
use super::domain::{HouseId, Survey, SurveyId, SurveyIndicatorAnswer, SurveySubmission};
use crate::workflows::catalog::DomainCatalog;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyError {
    #[error("survey for house `{0}` contains no answers")]
    EmptySubmission(HouseId),
    #[error("indicator `{0}` is not part of the domain catalog")]
    UnknownIndicator(String),
    #[error("indicator `{0}` was answered more than once")]
    DuplicateIndicator(String),
}

impl Survey {
    /// Resolves raw answers against the catalog and scores every indicator.
    ///
    /// The resulting `domain_scores` carries every catalog domain, so domains
    /// the household was not asked about show up as 0.
    pub fn ingest(
        catalog: &DomainCatalog,
        id: SurveyId,
        submission: SurveySubmission,
    ) -> Result<Self, SurveyError> {
        let SurveySubmission {
            house_id,
            village_id,
            answers,
        } = submission;

        if answers.is_empty() {
            return Err(SurveyError::EmptySubmission(house_id));
        }

        let mut domain_scores: BTreeMap<_, u32> = catalog
            .domains()
            .iter()
            .map(|domain| (domain.key.clone(), 0))
            .collect();
        let mut seen = HashSet::new();
        let mut scored = Vec::with_capacity(answers.len());

        for raw in answers {
            let indicator = catalog
                .indicator(raw.indicator_id.trim())
                .ok_or_else(|| SurveyError::UnknownIndicator(raw.indicator_id.clone()))?;

            if !seen.insert(indicator.id.as_str()) {
                return Err(SurveyError::DuplicateIndicator(indicator.id.clone()));
            }

            let answer = Answer::for_type(indicator.answer_type, raw.answer.as_deref(), raw.percentage);
            let score = score_indicator(&answer);
            *domain_scores.entry(indicator.domain.clone()).or_insert(0) += u32::from(score);

            scored.push(SurveyIndicatorAnswer {
                indicator_id: indicator.id.clone(),
                domain: indicator.domain.clone(),
                answer_type: indicator.answer_type,
                answer,
                score,
            });
        }

        Ok(Survey::from_parts(id, house_id, village_id, scored, domain_scores))
    }
}
