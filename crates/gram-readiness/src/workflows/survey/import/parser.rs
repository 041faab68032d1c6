use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::SurveyImportError;
use crate::workflows::survey::domain::{RawAnswer, Village, VillageId};

#[derive(Debug)]
pub(crate) struct AnswerRecord {
    pub(crate) village_id: String,
    pub(crate) house_id: String,
    pub(crate) answer: RawAnswer,
}

pub(crate) fn parse_answer_records<R: Read>(
    reader: R,
) -> Result<Vec<AnswerRecord>, SurveyImportError> {
    let mut csv_reader = csv_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<AnswerRow>().enumerate() {
        let row = row?;
        // Header occupies line 1.
        let line = index + 2;
        let percentage = match row.percentage.as_deref() {
            Some(raw) => Some(parse_percentage(raw).ok_or_else(|| {
                SurveyImportError::InvalidPercentage {
                    line,
                    value: raw.to_string(),
                }
            })?),
            None => None,
        };

        records.push(AnswerRecord {
            village_id: row.village_id,
            house_id: row.house_id,
            answer: RawAnswer {
                indicator_id: row.indicator_id,
                answer: row.answer,
                percentage,
            },
        });
    }

    Ok(records)
}

pub(crate) fn parse_villages<R: Read>(reader: R) -> Result<Vec<Village>, SurveyImportError> {
    let mut csv_reader = csv_reader(reader);
    let mut villages = Vec::new();

    for row in csv_reader.deserialize::<VillageRow>() {
        let row = row?;
        villages.push(Village {
            id: VillageId::new(row.village_id),
            name: row.name,
            disadvantaged_population: row.sc_population.unwrap_or(0),
            total_population: row.total_population,
        });
    }

    Ok(villages)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    village_id: String,
    house_id: String,
    indicator_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    percentage: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VillageRow {
    village_id: String,
    name: String,
    #[serde(default)]
    sc_population: Option<u32>,
    #[serde(default)]
    total_population: Option<u32>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_percentage(raw: &str) -> Option<f64> {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
