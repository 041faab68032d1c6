use clap::Args;
use gram_readiness::error::AppError;
use gram_readiness::workflows::readiness::{
    InMemorySurveyRepository, PriorityTier, ReadinessEngine, VillageReadinessService,
};
use gram_readiness::workflows::survey::SurveyImporter;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) type DistrictService = VillageReadinessService<InMemorySurveyRepository>;

/// Village roster and survey answers exported from the field app.
#[derive(Args, Debug, Clone)]
pub(crate) struct DatasetArgs {
    /// Villages CSV (village_id,name,sc_population[,total_population])
    #[arg(long)]
    pub(crate) villages: PathBuf,
    /// Survey answers CSV (village_id,house_id,indicator_id,answer,percentage)
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

pub(crate) fn empty_service(engine: Arc<ReadinessEngine>) -> DistrictService {
    VillageReadinessService::new(Arc::new(InMemorySurveyRepository::default()), engine)
}

/// Registers every village, then submits every house survey.
///
/// Rejected surveys are logged and skipped so one bad row does not hide the
/// rest of the district; a broken roster or unreadable file is fatal.
pub(crate) fn load_service(
    engine: Arc<ReadinessEngine>,
    dataset: &DatasetArgs,
) -> Result<DistrictService, AppError> {
    let service = empty_service(engine);

    let villages = SurveyImporter::villages_from_path(&dataset.villages)?;
    let village_count = villages.len();
    for village in villages {
        service.register_village(village)?;
    }

    let submissions = SurveyImporter::submissions_from_path(&dataset.answers)?;
    let mut accepted = 0usize;
    let mut rejected = 0usize;
    for submission in submissions {
        let house = submission.house_id.clone();
        let village = submission.village_id.clone();
        match service.submit(submission) {
            Ok(_) => accepted += 1,
            Err(err) => {
                rejected += 1;
                warn!(%village, %house, error = %err, "survey rejected");
            }
        }
    }

    info!(
        villages = village_count,
        accepted, rejected, "district dataset loaded"
    );
    Ok(service)
}

pub(crate) fn parse_priority(raw: &str) -> Result<PriorityTier, String> {
    raw.parse()
}
