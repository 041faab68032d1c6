use super::common::*;
use crate::workflows::readiness::{PriorityTier, ReadinessServiceError, RepositoryError};
use crate::workflows::survey::{SurveyError, SurveyId, Village, VillageId};

#[test]
fn submit_assigns_sequential_survey_ids() {
    let service = health_service();
    let village = village();

    let first = service
        .submit(submission(&village, "h-1", health_answers(true, true)))
        .expect("first survey accepted");
    let second = service
        .submit(submission(&village, "h-2", health_answers(false, true)))
        .expect("second survey accepted");

    assert_eq!(first.id(), &SurveyId::new("survey-000001"));
    assert_eq!(second.id(), &SurveyId::new("survey-000002"));
    assert_eq!(first.overall_score(), 4);
    assert_eq!(second.overall_score(), 2);
}

#[test]
fn submit_rejects_second_survey_for_same_house() {
    let service = health_service();
    let village = village();

    service
        .submit(submission(&village, "h-1", health_answers(true, true)))
        .expect("first survey accepted");

    match service.submit(submission(&village, "h-1", health_answers(false, false))) {
        Err(ReadinessServiceError::Repository(RepositoryError::HouseAlreadySurveyed {
            house, ..
        })) => assert_eq!(house.as_str(), "h-1"),
        other => panic!("expected duplicate house error, got {other:?}"),
    }
}

#[test]
fn submit_propagates_ingestion_errors() {
    let service = health_service();
    let village = village();

    match service.submit(submission(&village, "h-1", Vec::new())) {
        Err(ReadinessServiceError::Survey(SurveyError::EmptySubmission(house))) => {
            assert_eq!(house.as_str(), "h-1")
        }
        other => panic!("expected empty submission error, got {other:?}"),
    }
}

#[test]
fn submit_for_unregistered_village_fails() {
    let service = health_service();
    let stranger = Village::new("v-404", "Nowhere", 10);

    match service.submit(submission(&stranger, "h-1", health_answers(true, true))) {
        Err(ReadinessServiceError::Repository(RepositoryError::UnknownVillage(id))) => {
            assert_eq!(id, stranger.id)
        }
        other => panic!("expected unknown village error, got {other:?}"),
    }
}

#[test]
fn readiness_is_served_from_cache_until_surveys_change() {
    let service = health_service();
    let village = village();

    let empty = service.readiness(&village.id).expect("readiness available");
    assert_eq!(empty.snapshot.priority, PriorityTier::Unknown);

    service
        .submit(submission(&village, "h-1", health_answers(true, true)))
        .expect("survey accepted");

    let first = service.readiness(&village.id).expect("readiness available");
    assert_eq!(first.snapshot.overall_readiness, 100);
    assert_eq!(first.survey_ids, vec![SurveyId::new("survey-000001")]);

    let cached = service.readiness(&village.id).expect("readiness available");
    assert_eq!(cached.last_updated, first.last_updated);
    assert_eq!(cached.snapshot, first.snapshot);

    service
        .submit(submission(&village, "h-2", health_answers(false, false)))
        .expect("survey accepted");

    let refreshed = service.readiness(&village.id).expect("readiness available");
    assert_eq!(refreshed.snapshot.total_surveys, 2);
    assert_eq!(refreshed.snapshot.overall_readiness, 50);
    assert_eq!(refreshed.survey_ids.len(), 2);
}

#[test]
fn readiness_for_unknown_village_fails() {
    let service = health_service();

    match service.readiness(&VillageId::new("v-404")) {
        Err(ReadinessServiceError::UnknownVillage(id)) => assert_eq!(id.as_str(), "v-404"),
        other => panic!("expected unknown village error, got {other:?}"),
    }
    assert!(matches!(
        service.detail(&VillageId::new("v-404")),
        Err(ReadinessServiceError::UnknownVillage(_))
    ));
}

#[test]
fn district_views_cover_every_registered_village() {
    let service = health_service();
    let village = village();
    service
        .register_village(Village::new("v-200", "Seethampeta", 900))
        .expect("second village registers");
    service
        .submit(submission(&village, "h-1", health_answers(false, false)))
        .expect("survey accepted");

    let overview = service.overview().expect("overview available");
    assert_eq!(overview.stats.total_villages, 2);
    assert_eq!(overview.stats.red, 1);
    assert_eq!(overview.stats.gray, 1);

    let ranked = service.rank(&Default::default()).expect("ranking available");
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].village_id, village.id);
    assert_eq!(ranked[0].recommended_budget, 700_000);

    let detail = service.detail(&village.id).expect("detail available");
    assert_eq!(detail.domains_critical.len(), 1);
    assert_eq!(detail.project_pipeline.len(), 1);

    let rows = service.export_rows().expect("rows available");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].village, "Ramapuram");
    assert_eq!(rows[0].top_gap, "Health");
    assert_eq!(rows[1].priority, "unknown");
}
