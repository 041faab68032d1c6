mod domain;
mod standard;

pub use domain::{
    AnswerType, Domain, DomainKey, Indicator, DEFAULT_PROJECT_TYPE, DEFAULT_SCHEME,
    DEFAULT_UNIT_COST, MAX_INDICATOR_SCORE,
};

use domain::expected_max_score;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Immutable domain and indicator configuration shared by scoring and aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainCatalog {
    domains: Vec<Domain>,
}

impl DomainCatalog {
    /// The PM-AJAY seven-domain catalog.
    pub fn standard() -> Self {
        Self {
            domains: standard::standard_domains(),
        }
    }

    pub fn new(domains: Vec<Domain>) -> Result<Self, CatalogError> {
        if domains.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut domain_keys = HashSet::new();
        let mut indicator_ids = HashSet::new();

        for domain in &domains {
            if !domain_keys.insert(domain.key.clone()) {
                return Err(CatalogError::DuplicateDomain(domain.key.clone()));
            }

            let expected = expected_max_score(domain.indicators.len());
            if domain.max_score != expected {
                return Err(CatalogError::MaxScoreMismatch {
                    domain: domain.key.clone(),
                    declared: domain.max_score,
                    expected,
                });
            }

            for indicator in &domain.indicators {
                if indicator.domain != domain.key {
                    return Err(CatalogError::MisplacedIndicator {
                        indicator: indicator.id.clone(),
                        referenced: indicator.domain.clone(),
                        parent: domain.key.clone(),
                    });
                }
                if !indicator_ids.insert(indicator.id.clone()) {
                    return Err(CatalogError::DuplicateIndicator(indicator.id.clone()));
                }
            }
        }

        Ok(Self { domains })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Loads a catalog from its JSON representation.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        let domains = file
            .domains
            .into_iter()
            .map(DomainFile::into_domain)
            .collect();
        Self::new(domains)
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn domain(&self, key: &DomainKey) -> Option<&Domain> {
        self.domains.iter().find(|domain| &domain.key == key)
    }

    pub fn indicator(&self, id: &str) -> Option<&Indicator> {
        self.domains
            .iter()
            .flat_map(|domain| domain.indicators.iter())
            .find(|indicator| indicator.id == id)
    }

    pub fn indicator_count(&self) -> usize {
        self.domains
            .iter()
            .map(|domain| domain.indicators.len())
            .sum()
    }

    pub fn total_max_score(&self) -> u32 {
        self.domains.iter().map(|domain| domain.max_score).sum()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog defines no domains")]
    Empty,
    #[error("domain `{0}` is defined more than once")]
    DuplicateDomain(DomainKey),
    #[error("indicator `{0}` is defined more than once")]
    DuplicateIndicator(String),
    #[error("indicator `{indicator}` references domain `{referenced}` but is listed under `{parent}`")]
    MisplacedIndicator {
        indicator: String,
        referenced: DomainKey,
        parent: DomainKey,
    },
    #[error("domain `{domain}` declares max score {declared} but its indicators allow {expected}")]
    MaxScoreMismatch {
        domain: DomainKey,
        declared: u32,
        expected: u32,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    domains: Vec<DomainFile>,
}

#[derive(Debug, Deserialize)]
struct DomainFile {
    key: String,
    name: String,
    #[serde(default)]
    max_score: Option<u32>,
    #[serde(default)]
    unit_cost: Option<u64>,
    #[serde(default)]
    project_type: Option<String>,
    #[serde(default)]
    scheme: Option<String>,
    #[serde(default)]
    indicators: Vec<IndicatorFile>,
}

#[derive(Debug, Deserialize)]
struct IndicatorFile {
    id: String,
    answer_type: AnswerType,
    #[serde(default)]
    question: String,
    #[serde(default)]
    sector: Option<String>,
}

impl DomainFile {
    fn into_domain(self) -> Domain {
        let key = DomainKey::new(self.key);
        let indicators = self
            .indicators
            .into_iter()
            .map(|indicator| Indicator {
                id: indicator.id,
                domain: key.clone(),
                answer_type: indicator.answer_type,
                question: indicator.question,
                sector: indicator.sector,
            })
            .collect();

        let mut domain = Domain::new(key, self.name, indicators);
        if let Some(max_score) = self.max_score {
            domain.max_score = max_score;
        }
        if let Some(unit_cost) = self.unit_cost {
            domain.unit_cost = unit_cost;
        }
        if let Some(project_type) = self.project_type {
            domain.project_type = project_type;
        }
        if let Some(scheme) = self.scheme {
            domain.scheme = scheme;
        }
        domain
    }
}
