//! House survey ingestion and indicator scoring.

mod answer;
pub mod domain;
mod import;
mod ingest;

pub use answer::{score_indicator, Answer};
pub use domain::{
    HouseId, RawAnswer, Survey, SurveyId, SurveyIndicatorAnswer, SurveySubmission, Village,
    VillageId,
};
pub use import::{SurveyImportError, SurveyImporter};
pub use ingest::SurveyError;
