use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Thresholds and weights applied when classifying and ranking villages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Readiness below this is critical.
    pub critical_below: u8,
    /// Readiness at or above this is ready.
    pub ready_at: u8,
    /// Domains below this percentage are candidates for top gaps.
    pub gap_focus_below: u8,
    pub max_top_gaps: usize,
    /// Gap percentages above this make a recommendation high urgency.
    pub high_urgency_gap_above: u8,
    /// Budgets scale by disadvantaged population per this many residents.
    pub budget_population_unit: u32,
    /// Disadvantaged population that normalises to 100 in the priority score.
    pub population_cap: u32,
    pub readiness_weight: f64,
    pub population_weight: f64,
    pub gap_weight: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            critical_below: 40,
            ready_at: 70,
            gap_focus_below: 70,
            max_top_gaps: 5,
            high_urgency_gap_above: 50,
            budget_population_unit: 100,
            population_cap: 1_000,
            readiness_weight: 0.5,
            population_weight: 0.3,
            gap_weight: 0.2,
        }
    }
}

impl ScoringPolicy {
    pub fn classify(&self, readiness: u8) -> PriorityTier {
        if readiness < self.critical_below {
            PriorityTier::Critical
        } else if readiness < self.ready_at {
            PriorityTier::Moderate
        } else {
            PriorityTier::Ready
        }
    }

    pub fn urgency(&self, gap_percentage: u8) -> Urgency {
        if gap_percentage > self.high_urgency_gap_above {
            Urgency::High
        } else {
            Urgency::Medium
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    Critical,
    Moderate,
    Ready,
    /// No surveys yet.
    Unknown,
}

impl PriorityTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Moderate => "moderate",
            Self::Ready => "ready",
            Self::Unknown => "unknown",
        }
    }

    pub const fn color(self) -> ReadinessColor {
        match self {
            Self::Critical => ReadinessColor::Red,
            Self::Moderate => ReadinessColor::Yellow,
            Self::Ready => ReadinessColor::Green,
            Self::Unknown => ReadinessColor::Gray,
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PriorityTier {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "moderate" => Ok(Self::Moderate),
            "ready" => Ok(Self::Ready),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!(
                "unknown priority '{other}' (expected critical, moderate, ready or unknown)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessColor {
    Red,
    Yellow,
    Green,
    Gray,
}

impl ReadinessColor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Gray => "gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
}

impl Urgency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}
