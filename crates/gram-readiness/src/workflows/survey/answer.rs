use crate::workflows::catalog::AnswerType;
use serde::{Deserialize, Serialize};

/// A survey answer, decided once at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    YesNo(bool),
    Percentage(f64),
    Unscored,
}

impl Answer {
    /// Decides the answer variant from a loosely-typed record.
    ///
    /// Unknown answer types become [`Answer::Unscored`]. A percentage indicator
    /// without a numeric field falls back to parsing the textual answer, then to 0.
    pub fn from_raw(answer_type: &str, answer: Option<&str>, percentage: Option<f64>) -> Self {
        match AnswerType::parse(answer_type) {
            Some(answer_type) => Self::for_type(answer_type, answer, percentage),
            None => Self::Unscored,
        }
    }

    pub fn for_type(answer_type: AnswerType, answer: Option<&str>, percentage: Option<f64>) -> Self {
        match answer_type {
            AnswerType::YesNo => Self::YesNo(answer.map(is_affirmative).unwrap_or(false)),
            AnswerType::Percentage => {
                let value = percentage
                    .or_else(|| answer.and_then(parse_percentage))
                    .filter(|value| value.is_finite())
                    .unwrap_or(0.0);
                Self::Percentage(value)
            }
        }
    }

    pub fn answer_type(&self) -> Option<AnswerType> {
        match self {
            Self::YesNo(_) => Some(AnswerType::YesNo),
            Self::Percentage(_) => Some(AnswerType::Percentage),
            Self::Unscored => None,
        }
    }
}

/// Maps one answer to its point value: 0, 1 or 2.
pub fn score_indicator(answer: &Answer) -> u8 {
    match *answer {
        Answer::YesNo(true) => 2,
        Answer::YesNo(false) => 0,
        Answer::Percentage(p) if p > 75.0 => 2,
        Answer::Percentage(p) if p >= 50.0 => 1,
        Answer::Percentage(_) | Answer::Unscored => 0,
    }
}

fn is_affirmative(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

fn parse_percentage(raw: &str) -> Option<f64> {
    raw.trim().trim_end_matches('%').trim().parse::<f64>().ok()
}
