use super::policy::ScoringPolicy;
use super::views::{DomainReadiness, GapEntry, RecommendedProject};
use crate::workflows::catalog::DomainCatalog;
use crate::workflows::survey::{Survey, Village};

/// Averages each catalog domain over every survey.
///
/// A survey that never touched a domain still counts towards the divisor, so
/// missing answers pull the average down.
pub(crate) fn aggregate_domains(catalog: &DomainCatalog, surveys: &[Survey]) -> Vec<DomainReadiness> {
    let survey_count = surveys.len() as u64;

    catalog
        .domains()
        .iter()
        .map(|domain| {
            let total: u64 = surveys
                .iter()
                .map(|survey| u64::from(survey.domain_score(&domain.key)))
                .sum();
            let attainable = u64::from(domain.max_score) * survey_count;

            let (average_score, gap) = if survey_count == 0 {
                (0.0, f64::from(domain.max_score))
            } else {
                let deficit = attainable.saturating_sub(total);
                (
                    total as f64 / survey_count as f64,
                    deficit as f64 / survey_count as f64,
                )
            };

            DomainReadiness {
                domain: domain.key.clone(),
                name: domain.name.clone(),
                total_score: u32::try_from(total).unwrap_or(u32::MAX),
                average_score,
                max_score: domain.max_score,
                percentage: rounded_percentage(total, attainable),
                gap,
            }
        })
        .collect()
}

/// Σ average ÷ Σ max, as a rounded percentage.
pub(crate) fn overall_readiness(domains: &[DomainReadiness], survey_count: usize) -> u8 {
    let achieved: u64 = domains.iter().map(|entry| u64::from(entry.total_score)).sum();
    let attainable: u64 = domains
        .iter()
        .map(|entry| u64::from(entry.max_score))
        .sum::<u64>()
        * survey_count as u64;
    rounded_percentage(achieved, attainable)
}

pub(crate) fn top_gaps(
    catalog: &DomainCatalog,
    policy: &ScoringPolicy,
    domains: &[DomainReadiness],
    survey_count: usize,
    village: &Village,
) -> Vec<GapEntry> {
    if survey_count == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<&DomainReadiness> = domains
        .iter()
        .filter(|entry| entry.max_score > 0 && entry.percentage < policy.gap_focus_below)
        .collect();

    // Stable sort keeps catalog order between equal gaps.
    candidates.sort_by_key(|entry| std::cmp::Reverse(deficit(entry, survey_count)));

    candidates
        .into_iter()
        .take(policy.max_top_gaps)
        .map(|entry| {
            let unit_cost = catalog
                .domain(&entry.domain)
                .map(|domain| domain.unit_cost)
                .unwrap_or(crate::workflows::catalog::DEFAULT_UNIT_COST);

            GapEntry {
                domain: entry.domain.clone(),
                gap_percentage: 100 - entry.percentage,
                gap_points: entry.gap,
                suggested_budget: suggested_budget(
                    unit_cost,
                    deficit(entry, survey_count),
                    survey_count,
                    village.disadvantaged_population,
                    policy.budget_population_unit,
                ),
            }
        })
        .collect()
}

pub(crate) fn recommend_projects(
    catalog: &DomainCatalog,
    policy: &ScoringPolicy,
    gaps: &[GapEntry],
) -> Vec<RecommendedProject> {
    gaps.iter()
        .map(|gap| {
            let (project_type, scheme) = match catalog.domain(&gap.domain) {
                Some(domain) => (domain.project_type.clone(), domain.scheme.clone()),
                None => (
                    crate::workflows::catalog::DEFAULT_PROJECT_TYPE.to_string(),
                    crate::workflows::catalog::DEFAULT_SCHEME.to_string(),
                ),
            };

            RecommendedProject {
                domain: gap.domain.clone(),
                project_type,
                scheme,
                estimated_budget: gap.suggested_budget,
                urgency: policy.urgency(gap.gap_percentage),
            }
        })
        .collect()
}

/// Weighted urgency used to order villages against each other.
///
/// Falls as readiness rises and grows with disadvantaged population and the
/// widest domain gap.
pub(crate) fn priority_score(
    policy: &ScoringPolicy,
    readiness: u8,
    domains: &[DomainReadiness],
    village: &Village,
) -> f64 {
    let normalized_population = if policy.population_cap == 0 {
        0.0
    } else {
        (f64::from(village.disadvantaged_population) / f64::from(policy.population_cap) * 100.0)
            .min(100.0)
    };

    let largest_gap = domains
        .iter()
        .filter(|entry| entry.max_score > 0)
        .map(|entry| 100 - entry.percentage)
        .max()
        .unwrap_or(0);

    let score = policy.readiness_weight * f64::from(100 - readiness.min(100))
        + policy.population_weight * normalized_population
        + policy.gap_weight * f64::from(largest_gap);

    (score * 100.0).round() / 100.0
}

fn deficit(entry: &DomainReadiness, survey_count: usize) -> u64 {
    (u64::from(entry.max_score) * survey_count as u64).saturating_sub(u64::from(entry.total_score))
}

/// ceil(unit_cost × gap_points × max(1, population ÷ unit)), computed exactly.
fn suggested_budget(
    unit_cost: u64,
    deficit: u64,
    survey_count: usize,
    population: u32,
    population_unit: u32,
) -> u64 {
    if survey_count == 0 {
        return 0;
    }

    let (scale_numerator, scale_denominator) = if population_unit == 0 {
        (1u128, 1u128)
    } else {
        (
            u128::from(population.max(population_unit)),
            u128::from(population_unit),
        )
    };

    let numerator = u128::from(unit_cost) * u128::from(deficit) * scale_numerator;
    let denominator = survey_count as u128 * scale_denominator;
    let budget = numerator.div_ceil(denominator);
    u64::try_from(budget).unwrap_or(u64::MAX)
}

/// Half-up rounding of `part / whole × 100`, clamped to 100; 0 when `whole` is 0.
fn rounded_percentage(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = u128::from(part.min(whole));
    let whole = u128::from(whole);
    let rounded = (part * 200 + whole) / (whole * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
