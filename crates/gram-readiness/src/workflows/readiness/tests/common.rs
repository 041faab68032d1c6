use std::sync::Arc;

use crate::workflows::catalog::{AnswerType, Domain, DomainCatalog, Indicator};
use crate::workflows::readiness::{
    InMemorySurveyRepository, ReadinessEngine, ScoringPolicy, VillageReadinessService,
};
use crate::workflows::survey::{HouseId, RawAnswer, Survey, SurveyId, SurveySubmission, Village};

/// One `health` domain with two yes/no questions (max score 4).
pub(super) fn health_catalog() -> DomainCatalog {
    DomainCatalog::new(vec![Domain::new(
        "health",
        "Health",
        vec![
            Indicator::new("clinic", "health", AnswerType::YesNo, "Clinic within 5 km?"),
            Indicator::new("immunized", "health", AnswerType::YesNo, "Children immunized?"),
        ],
    )
    .with_recommendation("Primary Health Center", "National Health Mission (NHM)", 70_000)])
    .expect("valid catalog")
}

/// `water` (two questions) ahead of `roads` (one question).
pub(super) fn water_and_roads_catalog() -> DomainCatalog {
    DomainCatalog::new(vec![
        Domain::new(
            "water",
            "Drinking Water",
            vec![
                Indicator::new("tap", "water", AnswerType::YesNo, "Piped water?"),
                Indicator::new("coverage", "water", AnswerType::Percentage, "Households covered"),
            ],
        )
        .with_recommendation("Water Supply Scheme", "Jal Jeevan Mission", 60_000),
        Domain::new(
            "roads",
            "Roads",
            vec![Indicator::new("all_weather", "roads", AnswerType::YesNo, "All-weather road?")],
        )
        .with_recommendation("Road Construction", "PMGSY", 80_000),
    ])
    .expect("valid catalog")
}

pub(super) fn engine(catalog: DomainCatalog) -> ReadinessEngine {
    ReadinessEngine::new(Arc::new(catalog), ScoringPolicy::default())
}

pub(super) fn village() -> Village {
    Village::new("v-100", "Ramapuram", 250)
}

pub(super) fn submission(village: &Village, house: &str, answers: Vec<RawAnswer>) -> SurveySubmission {
    SurveySubmission {
        house_id: HouseId::new(house),
        village_id: village.id.clone(),
        answers,
    }
}

pub(super) fn health_answers(clinic: bool, immunized: bool) -> Vec<RawAnswer> {
    vec![
        RawAnswer::yes_no("clinic", clinic),
        RawAnswer::yes_no("immunized", immunized),
    ]
}

pub(super) fn survey(
    engine: &ReadinessEngine,
    village: &Village,
    house: &str,
    answers: Vec<RawAnswer>,
) -> Survey {
    Survey::ingest(
        engine.catalog(),
        SurveyId::new(format!("test-{house}")),
        submission(village, house, answers),
    )
    .expect("valid survey")
}

pub(super) fn health_service() -> VillageReadinessService<InMemorySurveyRepository> {
    let service = VillageReadinessService::new(
        Arc::new(InMemorySurveyRepository::default()),
        Arc::new(engine(health_catalog())),
    );
    service
        .register_village(village())
        .expect("village registers");
    service
}
