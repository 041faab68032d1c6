use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::answer::Answer;
use crate::workflows::catalog::{AnswerType, DomainKey};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a surveyed village.
    VillageId
);
string_id!(
    /// Identifier of a house within a village.
    HouseId
);
string_id!(
    /// Identifier assigned to a survey when it is accepted.
    SurveyId
);

/// Static attributes of a village that feed budgeting and ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Village {
    pub id: VillageId,
    pub name: String,
    /// Scheduled-caste population count.
    pub disadvantaged_population: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_population: Option<u32>,
}

impl Village {
    pub fn new(id: impl Into<String>, name: impl Into<String>, disadvantaged_population: u32) -> Self {
        Self {
            id: VillageId::new(id),
            name: name.into(),
            disadvantaged_population,
            total_population: None,
        }
    }

    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "Unknown Village"
        } else {
            trimmed
        }
    }
}

/// Answer as received from the field, before it is resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnswer {
    pub indicator_id: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub percentage: Option<f64>,
}

impl RawAnswer {
    pub fn yes_no(indicator_id: impl Into<String>, yes: bool) -> Self {
        Self {
            indicator_id: indicator_id.into(),
            answer: Some(if yes { "yes" } else { "no" }.to_string()),
            percentage: None,
        }
    }

    pub fn percentage(indicator_id: impl Into<String>, value: f64) -> Self {
        Self {
            indicator_id: indicator_id.into(),
            answer: None,
            percentage: Some(value),
        }
    }
}

/// A completed house survey awaiting ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySubmission {
    pub house_id: HouseId,
    pub village_id: VillageId,
    pub answers: Vec<RawAnswer>,
}

/// One scored indicator answer owned by its survey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyIndicatorAnswer {
    pub indicator_id: String,
    pub domain: DomainKey,
    pub answer_type: AnswerType,
    pub answer: Answer,
    pub score: u8,
}

/// A submitted house survey. Scores are computed once at ingestion and never change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Survey {
    id: SurveyId,
    house_id: HouseId,
    village_id: VillageId,
    answers: Vec<SurveyIndicatorAnswer>,
    domain_scores: BTreeMap<DomainKey, u32>,
    overall_score: u32,
}

impl Survey {
    pub(crate) fn from_parts(
        id: SurveyId,
        house_id: HouseId,
        village_id: VillageId,
        answers: Vec<SurveyIndicatorAnswer>,
        domain_scores: BTreeMap<DomainKey, u32>,
    ) -> Self {
        let overall_score = answers.iter().map(|answer| u32::from(answer.score)).sum();
        Self {
            id,
            house_id,
            village_id,
            answers,
            domain_scores,
            overall_score,
        }
    }

    pub fn id(&self) -> &SurveyId {
        &self.id
    }

    pub fn house_id(&self) -> &HouseId {
        &self.house_id
    }

    pub fn village_id(&self) -> &VillageId {
        &self.village_id
    }

    pub fn answers(&self) -> &[SurveyIndicatorAnswer] {
        &self.answers
    }

    pub fn domain_scores(&self) -> &BTreeMap<DomainKey, u32> {
        &self.domain_scores
    }

    /// Summed indicator scores for a domain; domains without answers score 0.
    pub fn domain_score(&self, domain: &DomainKey) -> u32 {
        self.domain_scores.get(domain).copied().unwrap_or(0)
    }

    pub fn overall_score(&self) -> u32 {
        self.overall_score
    }
}
