mod parser;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use super::domain::{HouseId, SurveySubmission, Village, VillageId};

#[derive(Debug, thiserror::Error)]
pub enum SurveyImportError {
    #[error("failed to read survey export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid survey CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: percentage `{value}` is not a number")]
    InvalidPercentage { line: usize, value: String },
}

/// Reads village rosters and flattened survey answers from CSV exports.
///
/// Answers arrive one indicator per row
/// (`village_id,house_id,indicator_id,answer,percentage`) and are grouped into
/// one submission per house, in the order houses first appear.
pub struct SurveyImporter;

impl SurveyImporter {
    pub fn submissions_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<SurveySubmission>, SurveyImportError> {
        let file = std::fs::File::open(path)?;
        Self::submissions_from_reader(file)
    }

    pub fn submissions_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<SurveySubmission>, SurveyImportError> {
        let mut submissions: Vec<SurveySubmission> = Vec::new();
        let mut index: HashMap<(String, String), usize> = HashMap::new();

        for record in parser::parse_answer_records(reader)? {
            let key = (record.village_id.clone(), record.house_id.clone());
            match index.get(&key) {
                Some(&position) => submissions[position].answers.push(record.answer),
                None => {
                    index.insert(key, submissions.len());
                    submissions.push(SurveySubmission {
                        house_id: HouseId::new(record.house_id),
                        village_id: VillageId::new(record.village_id),
                        answers: vec![record.answer],
                    });
                }
            }
        }

        tracing::debug!(houses = submissions.len(), "grouped survey answers by house");
        Ok(submissions)
    }

    pub fn villages_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Village>, SurveyImportError> {
        let file = std::fs::File::open(path)?;
        Self::villages_from_reader(file)
    }

    pub fn villages_from_reader<R: Read>(reader: R) -> Result<Vec<Village>, SurveyImportError> {
        parser::parse_villages(reader)
    }
}
