use std::sync::Arc;

use gram_readiness::workflows::catalog::{AnswerType, Domain, DomainCatalog, Indicator};
use gram_readiness::workflows::readiness::{ReadinessEngine, ScoringPolicy};
use gram_readiness::workflows::survey::{
    score_indicator, Answer, HouseId, RawAnswer, Survey, SurveyId, SurveySubmission, Village,
};
use proptest::prelude::*;

fn engine() -> ReadinessEngine {
    let catalog = DomainCatalog::new(vec![
        Domain::new(
            "health",
            "Health",
            vec![
                Indicator::new("clinic", "health", AnswerType::YesNo, "Clinic?"),
                Indicator::new("immunized", "health", AnswerType::Percentage, "Immunized"),
            ],
        ),
        Domain::new(
            "roads",
            "Roads",
            vec![Indicator::new("paved", "roads", AnswerType::YesNo, "Paved road?")],
        ),
    ])
    .expect("valid catalog");
    ReadinessEngine::new(Arc::new(catalog), ScoringPolicy::default())
}

fn village(population: u32) -> Village {
    Village::new("v-1", "Nandigama", population)
}

fn survey(engine: &ReadinessEngine, index: usize, clinic: bool, immunized: f64, paved: bool) -> Survey {
    Survey::ingest(
        engine.catalog(),
        SurveyId::new(format!("s-{index}")),
        SurveySubmission {
            house_id: HouseId::new(format!("h-{index}")),
            village_id: village(0).id,
            answers: vec![
                RawAnswer::yes_no("clinic", clinic),
                RawAnswer::percentage("immunized", immunized),
                RawAnswer::yes_no("paved", paved),
            ],
        },
    )
    .expect("valid survey")
}

fn surveys(engine: &ReadinessEngine, rows: &[(bool, f64, bool)]) -> Vec<Survey> {
    rows.iter()
        .enumerate()
        .map(|(index, &(clinic, immunized, paved))| survey(engine, index, clinic, immunized, paved))
        .collect()
}

fn survey_rows() -> impl Strategy<Value = Vec<(bool, f64, bool)>> {
    prop::collection::vec((any::<bool>(), 0.0f64..=100.0, any::<bool>()), 1..12)
}

proptest! {
    #[test]
    fn percentage_scores_follow_thresholds(value in -50.0f64..150.0) {
        let score = score_indicator(&Answer::Percentage(value));
        let expected = if value > 75.0 { 2 } else if value >= 50.0 { 1 } else { 0 };
        prop_assert_eq!(score, expected);
    }

    #[test]
    fn only_yes_scores_on_yes_no(text in "\\PC{0,8}") {
        let answer = Answer::for_type(AnswerType::YesNo, Some(&text), None);
        let expected = if text.trim().eq_ignore_ascii_case("yes") { 2 } else { 0 };
        prop_assert_eq!(score_indicator(&answer), expected);
    }

    #[test]
    fn readiness_and_percentages_stay_in_range(rows in survey_rows(), population in 0u32..5_000) {
        let engine = engine();
        let village = village(population);
        let snapshot = engine.compute(&surveys(&engine, &rows), &village);

        prop_assert!(snapshot.overall_readiness <= 100);
        for domain in &snapshot.domain_scores {
            prop_assert!(domain.percentage <= 100);
            prop_assert!(domain.gap >= 0.0);
        }
        prop_assert!(snapshot.top_gaps.len() <= 5);
        prop_assert_eq!(snapshot.top_gaps.len(), snapshot.recommended_projects.len());
    }

    #[test]
    fn compute_is_deterministic(rows in survey_rows(), population in 0u32..5_000) {
        let engine = engine();
        let village = village(population);
        let set = surveys(&engine, &rows);
        prop_assert_eq!(engine.compute(&set, &village), engine.compute(&set, &village));
    }

    #[test]
    fn full_marks_never_lower_readiness(rows in survey_rows()) {
        let engine = engine();
        let village = village(250);
        let mut set = surveys(&engine, &rows);
        let before = engine.compute(&set, &village).overall_readiness;

        set.push(survey(&engine, rows.len(), true, 100.0, true));
        let after = engine.compute(&set, &village).overall_readiness;
        prop_assert!(after >= before);
    }

    #[test]
    fn zero_marks_never_raise_readiness(rows in survey_rows()) {
        let engine = engine();
        let village = village(250);
        let mut set = surveys(&engine, &rows);
        let before = engine.compute(&set, &village).overall_readiness;

        set.push(survey(&engine, rows.len(), false, 0.0, false));
        let after = engine.compute(&set, &village).overall_readiness;
        prop_assert!(after <= before);
    }
}
