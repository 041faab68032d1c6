use crate::infra::{empty_service, DistrictService};
use crate::report::{render_detail, render_overview, render_ranking};
use clap::Args;
use gram_readiness::error::AppError;
use gram_readiness::workflows::catalog::{AnswerType, DomainCatalog};
use gram_readiness::workflows::district::PriorityFilter;
use gram_readiness::workflows::readiness::ReadinessEngine;
use gram_readiness::workflows::survey::{HouseId, RawAnswer, SurveySubmission, Village};
use std::sync::Arc;
use tracing::warn;

const DEFAULT_DEMO_HOUSES: usize = 5;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Houses surveyed per demo village
    #[arg(long, default_value_t = DEFAULT_DEMO_HOUSES)]
    pub(crate) houses: usize,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            houses: DEFAULT_DEMO_HOUSES,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Profile {
    Lagging,
    Developing,
    Thriving,
}

impl Profile {
    /// Share of yes/no questions answered "yes".
    fn yes_rate(self) -> usize {
        match self {
            Self::Lagging => 30,
            Self::Developing => 60,
            Self::Thriving => 85,
        }
    }

    /// Percentage answers are spread over `start..start + span`.
    fn percentage_band(self) -> (usize, usize) {
        match self {
            Self::Lagging => (0, 45),
            Self::Developing => (45, 30),
            Self::Thriving => (75, 25),
        }
    }
}

const DEMO_VILLAGES: [(&str, &str, u32, Profile); 4] = [
    ("demo-red-1", "Red Village 1", 500, Profile::Lagging),
    ("demo-yellow", "Yellow Village", 320, Profile::Developing),
    ("demo-green", "Green Village", 410, Profile::Thriving),
    ("demo-red-2", "Red Village 2", 650, Profile::Lagging),
];

/// Deterministic answers for one village. Slots step by 7 modulo the cycle
/// length so answers spread evenly without randomness.
fn village_submissions(
    catalog: &DomainCatalog,
    village: &Village,
    profile: Profile,
    houses: usize,
) -> Vec<SurveySubmission> {
    let yes_cutoff = profile.yes_rate() / 5;
    let (start, span) = profile.percentage_band();
    let mut yes_slot = 0usize;
    let mut percentage_slot = 0usize;

    (1..=houses)
        .map(|house| {
            let answers = catalog
                .domains()
                .iter()
                .flat_map(|domain| domain.indicators.iter())
                .map(|indicator| match indicator.answer_type {
                    AnswerType::YesNo => {
                        let yes = (yes_slot * 7) % 20 < yes_cutoff;
                        yes_slot += 1;
                        RawAnswer::yes_no(indicator.id.clone(), yes)
                    }
                    AnswerType::Percentage => {
                        let value = start + (percentage_slot * 7) % span;
                        percentage_slot += 1;
                        RawAnswer::percentage(indicator.id.clone(), value as f64)
                    }
                })
                .collect();

            SurveySubmission {
                house_id: HouseId::new(format!("{}-H{house:03}", village.id)),
                village_id: village.id.clone(),
                answers,
            }
        })
        .collect()
}

pub(crate) fn demo_district(
    engine: Arc<ReadinessEngine>,
    houses: usize,
) -> Result<DistrictService, AppError> {
    let service = empty_service(engine);

    for (id, name, population, profile) in DEMO_VILLAGES {
        let village = Village::new(id, name, population);
        let submissions =
            village_submissions(service.engine().catalog(), &village, profile, houses);
        service.register_village(village)?;
        for submission in submissions {
            let house = submission.house_id.clone();
            if let Err(err) = service.submit(submission) {
                warn!(village = id, %house, error = %err, "demo survey skipped");
            }
        }
    }

    Ok(service)
}

pub(crate) fn run_demo(engine: Arc<ReadinessEngine>, args: DemoArgs) -> Result<(), AppError> {
    println!(
        "Village readiness demo ({} villages, {} houses each)\n",
        DEMO_VILLAGES.len(),
        args.houses
    );
    let service = demo_district(engine, args.houses)?;

    render_overview(&service.overview()?);
    println!();

    let ranked = service.rank(&PriorityFilter::default())?;
    render_ranking(&ranked);

    if let Some(most_urgent) = ranked.first() {
        println!("\nMost urgent village");
        render_detail(&service.detail(&most_urgent.village_id)?);
    }

    Ok(())
}
