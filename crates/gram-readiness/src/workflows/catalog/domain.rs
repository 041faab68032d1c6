use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest score a single indicator can contribute.
pub const MAX_INDICATOR_SCORE: u32 = 2;

pub const DEFAULT_PROJECT_TYPE: &str = "Infrastructure Development";
pub const DEFAULT_SCHEME: &str = "PM-AJAY Integrated Development";
/// Rupees per missing score point per 100 disadvantaged residents.
pub const DEFAULT_UNIT_COST: u64 = 50_000;

/// Stable identifier of a welfare domain such as `health`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainKey(pub String);

impl DomainKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DomainKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    YesNo,
    Percentage,
}

impl AnswerType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::YesNo => "yes_no",
            Self::Percentage => "percentage",
        }
    }

    /// Parses the wire label; anything unrecognised yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes_no" => Some(Self::YesNo),
            "percentage" => Some(Self::Percentage),
            _ => None,
        }
    }
}

/// A single survey question assigned to exactly one domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    pub id: String,
    pub domain: DomainKey,
    pub answer_type: AnswerType,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

impl Indicator {
    pub fn new(
        id: impl Into<String>,
        domain: impl Into<DomainKey>,
        answer_type: AnswerType,
        question: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            domain: domain.into(),
            answer_type,
            question: question.into(),
            sector: None,
        }
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }
}

/// Welfare category grouping related indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    pub key: DomainKey,
    pub name: String,
    pub max_score: u32,
    pub unit_cost: u64,
    pub project_type: String,
    pub scheme: String,
    pub indicators: Vec<Indicator>,
}

impl Domain {
    /// Builds a domain whose max score is derived from its indicators.
    pub fn new(
        key: impl Into<DomainKey>,
        name: impl Into<String>,
        indicators: Vec<Indicator>,
    ) -> Self {
        let max_score = expected_max_score(indicators.len());
        Self {
            key: key.into(),
            name: name.into(),
            max_score,
            unit_cost: DEFAULT_UNIT_COST,
            project_type: DEFAULT_PROJECT_TYPE.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            indicators,
        }
    }

    pub fn with_recommendation(
        mut self,
        project_type: impl Into<String>,
        scheme: impl Into<String>,
        unit_cost: u64,
    ) -> Self {
        self.project_type = project_type.into();
        self.scheme = scheme.into();
        self.unit_cost = unit_cost;
        self
    }
}

pub(crate) fn expected_max_score(indicator_count: usize) -> u32 {
    MAX_INDICATOR_SCORE.saturating_mul(u32::try_from(indicator_count).unwrap_or(u32::MAX))
}

impl From<String> for DomainKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}
