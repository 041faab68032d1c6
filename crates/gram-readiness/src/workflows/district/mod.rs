//! District-level views over village readiness snapshots.

mod detail;
mod export;
mod overview;
mod ranking;

pub use detail::{village_detail, DomainStanding, VillageDetail};
pub use export::{report_rows, write_report, write_report_to_path, DistrictReportRow, ExportError};
pub use overview::{district_overview, DistrictOverview, DistrictStats, HeatmapEntry};
pub use ranking::{rank_villages, PriorityFilter, RankedVillage, DEFAULT_RANKING_LIMIT};

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::workflows::catalog::AnswerType;
    use crate::workflows::readiness::{
        CachedReadiness, PriorityTier, ReadinessColor, ReadinessEngine, ReadinessSnapshot,
        ScoringPolicy,
    };
    use crate::workflows::survey::{
        HouseId, RawAnswer, Survey, SurveyId, SurveySubmission, Village, VillageId,
    };

    // Every indicator of the standard catalog answered with the same score.
    fn uniform_survey(engine: &ReadinessEngine, village: &Village, house: &str, yes: bool) -> Survey {
        let answers = engine
            .catalog()
            .domains()
            .iter()
            .flat_map(|domain| domain.indicators.iter())
            .map(|indicator| match indicator.answer_type {
                AnswerType::YesNo => RawAnswer::yes_no(indicator.id.clone(), yes),
                AnswerType::Percentage => {
                    RawAnswer::percentage(indicator.id.clone(), if yes { 90.0 } else { 10.0 })
                }
            })
            .collect();

        Survey::ingest(
            engine.catalog(),
            SurveyId::new(format!("{}-{house}", village.id)),
            SurveySubmission {
                house_id: HouseId::new(house),
                village_id: village.id.clone(),
                answers,
            },
        )
        .expect("valid survey")
    }

    fn district() -> (ReadinessEngine, Vec<ReadinessSnapshot>) {
        let engine = ReadinessEngine::standard();
        let ready = Village::new("v-1", "Amarpur", 300);
        let lagging = Village::new("v-2", "Bhimnagar", 900);
        let mixed = Village::new("v-3", "Chandpur", 450);
        let unsurveyed = Village::new("v-4", "Devgarh", 120);

        let snapshots = vec![
            engine.compute(&[uniform_survey(&engine, &ready, "h-1", true)], &ready),
            engine.compute(&[uniform_survey(&engine, &lagging, "h-1", false)], &lagging),
            engine.compute(
                &[
                    uniform_survey(&engine, &mixed, "h-1", true),
                    uniform_survey(&engine, &mixed, "h-2", false),
                ],
                &mixed,
            ),
            engine.compute(&[], &unsurveyed),
        ];
        (engine, snapshots)
    }

    #[test]
    fn overview_counts_colors_and_sorts_by_readiness() {
        let (_, snapshots) = district();
        let overview = district_overview(&snapshots);

        assert_eq!(overview.stats.total_villages, 4);
        assert_eq!(overview.stats.green, 1);
        assert_eq!(overview.stats.red, 1);
        assert_eq!(overview.stats.yellow, 1);
        assert_eq!(overview.stats.gray, 1);
        // (100 + 0 + 50 + 0) / 4
        assert_eq!(overview.stats.average_readiness, 38);

        let order: Vec<&str> = overview
            .heatmap
            .iter()
            .map(|entry| entry.village_name.as_str())
            .collect();
        assert_eq!(order, vec!["Amarpur", "Chandpur", "Bhimnagar", "Devgarh"]);
    }

    #[test]
    fn overview_of_empty_district_is_zeroed() {
        let overview = district_overview(&[]);
        assert_eq!(overview.stats, DistrictStats::default());
        assert!(overview.heatmap.is_empty());
    }

    #[test]
    fn ranking_puts_most_urgent_first_and_skips_unsurveyed() {
        let (_, snapshots) = district();
        let ranked = rank_villages(&snapshots, &PriorityFilter::default());

        let order: Vec<&str> = ranked.iter().map(|entry| entry.village_id.as_str()).collect();
        assert_eq!(order, vec!["v-2", "v-3", "v-1"]);
        assert!(ranked.iter().all(|entry| entry.top_gaps.len() <= 2));
        assert_eq!(ranked[0].color, ReadinessColor::Red);
    }

    #[test]
    fn ranking_filters_by_tier_band_and_limit() {
        let (_, snapshots) = district();

        let critical = rank_villages(
            &snapshots,
            &PriorityFilter {
                priority: Some(PriorityTier::Critical),
                ..PriorityFilter::default()
            },
        );
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].village_id, VillageId::new("v-2"));

        let unknown = rank_villages(
            &snapshots,
            &PriorityFilter {
                priority: Some(PriorityTier::Unknown),
                ..PriorityFilter::default()
            },
        );
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].village_id, VillageId::new("v-4"));

        let band = rank_villages(
            &snapshots,
            &PriorityFilter {
                min_readiness: Some(40),
                max_readiness: Some(80),
                ..PriorityFilter::default()
            },
        );
        assert_eq!(band.len(), 1);
        assert_eq!(band[0].village_id, VillageId::new("v-3"));

        let limited = rank_villages(
            &snapshots,
            &PriorityFilter {
                limit: 1,
                ..PriorityFilter::default()
            },
        );
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn filter_deserializes_with_default_limit() {
        let filter: PriorityFilter =
            serde_json::from_str(r#"{"priority":"critical"}"#).expect("valid filter");
        assert_eq!(filter.priority, Some(PriorityTier::Critical));
        assert_eq!(filter.limit, DEFAULT_RANKING_LIMIT);
    }

    #[test]
    fn detail_splits_domains_by_standing() {
        let (_, snapshots) = district();
        let village = Village::new("v-3", "Chandpur", 450);
        let cached = CachedReadiness {
            snapshot: snapshots[2].clone(),
            survey_ids: Vec::new(),
            last_updated: Utc::now(),
        };

        let detail = village_detail(&village, &cached, &ScoringPolicy::default());
        // Every domain sits at 50%: neither on track nor critical.
        assert!(detail.domains_on_track.is_empty());
        assert!(detail.domains_critical.is_empty());
        assert!(detail.project_pipeline.len() <= 5);
        assert_eq!(detail.project_pipeline, snapshots[2].recommended_projects);

        let lagging = CachedReadiness {
            snapshot: snapshots[1].clone(),
            survey_ids: Vec::new(),
            last_updated: Utc::now(),
        };
        let detail = village_detail(
            &Village::new("v-2", "Bhimnagar", 900),
            &lagging,
            &ScoringPolicy::default(),
        );
        assert_eq!(detail.domains_critical.len(), 7);
        assert_eq!(detail.project_pipeline.len(), 5);
    }

    #[test]
    fn detail_of_unsurveyed_village_has_no_standings() {
        let (_, snapshots) = district();
        let cached = CachedReadiness {
            snapshot: snapshots[3].clone(),
            survey_ids: Vec::new(),
            last_updated: Utc::now(),
        };

        let detail = village_detail(
            &Village::new("v-4", "Devgarh", 120),
            &cached,
            &ScoringPolicy::default(),
        );
        assert!(detail.domains_critical.is_empty());
        assert!(detail.domains_on_track.is_empty());
        assert!(detail.project_pipeline.is_empty());
    }

    #[test]
    fn report_rows_follow_priority_order() {
        let (engine, snapshots) = district();
        let rows = report_rows(engine.catalog(), &snapshots);

        let villages: Vec<&str> = rows.iter().map(|row| row.village.as_str()).collect();
        assert_eq!(villages, vec!["Bhimnagar", "Chandpur", "Amarpur", "Devgarh"]);
        assert_eq!(rows[0].readiness, 0);
        assert_eq!(rows[0].gap_percentage, 100);
        assert_ne!(rows[0].top_gap, "N/A");
        assert_eq!(rows[2].top_gap, "N/A");
    }
}
