use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::answers::{AnswerError, AnswerTable, LikertAnswer};
use super::catalog::AssessmentCatalog;
use super::survey::{SurveyError, SurveySession};

#[derive(Debug)]
pub enum AnswerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    Row { line: u64, reason: String },
    Answer(AnswerError),
    Survey(SurveyError),
}

impl std::fmt::Display for AnswerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerImportError::Io(err) => write!(f, "failed to read answers file: {}", err),
            AnswerImportError::Csv(err) => write!(f, "invalid answers CSV: {}", err),
            AnswerImportError::Json(err) => write!(f, "invalid answers JSON: {}", err),
            AnswerImportError::Row { line, reason } => {
                write!(f, "invalid answer on line {}: {}", line, reason)
            }
            AnswerImportError::Answer(err) => write!(f, "invalid answer: {}", err),
            AnswerImportError::Survey(err) => write!(f, "could not record answer: {}", err),
        }
    }
}

impl std::error::Error for AnswerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerImportError::Io(err) => Some(err),
            AnswerImportError::Csv(err) => Some(err),
            AnswerImportError::Json(err) => Some(err),
            AnswerImportError::Row { .. } => None,
            AnswerImportError::Answer(err) => Some(err),
            AnswerImportError::Survey(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for AnswerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for AnswerImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<AnswerError> for AnswerImportError {
    fn from(err: AnswerError) -> Self {
        Self::Answer(err)
    }
}

impl From<SurveyError> for AnswerImportError {
    fn from(err: SurveyError) -> Self {
        Self::Survey(err)
    }
}

/// Loads answer files recorded outside the service and replays them through a
/// [`SurveySession`], so unknown categories and bad question numbers surface as errors.
///
/// CSV files carry `category,question,value` rows with 1-based question numbers. JSON files
/// hold the same object shape the HTTP API accepts.
pub struct AnswerImporter;

impl AnswerImporter {
    /// Dispatch on the file extension: `.json` is read as JSON, anything else as CSV.
    pub fn from_path<P: AsRef<Path>>(
        catalog: &AssessmentCatalog,
        path: P,
    ) -> Result<AnswerTable, AnswerImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_reader(catalog, file)
        } else {
            Self::from_csv_reader(catalog, file)
        }
    }

    pub fn from_csv_reader<R: Read>(
        catalog: &AssessmentCatalog,
        reader: R,
    ) -> Result<AnswerTable, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut session = SurveySession::new(catalog);

        for record in csv_reader.records() {
            let record = record?;
            let line = record
                .position()
                .map(|position| position.line())
                .unwrap_or_default();
            let row: AnswerRow = record.deserialize(Some(&headers))?;
            let question = row
                .question
                .checked_sub(1)
                .ok_or_else(|| AnswerImportError::Row {
                    line,
                    reason: "question numbers start at 1".to_string(),
                })?;
            session.record(&row.category, question, LikertAnswer::new(row.value)?)?;
        }

        Ok(session.into_answers())
    }

    pub fn from_json_reader<R: Read>(
        catalog: &AssessmentCatalog,
        reader: R,
    ) -> Result<AnswerTable, AnswerImportError> {
        let table: AnswerTable = serde_json::from_reader(reader)?;
        let mut session = SurveySession::new(catalog);

        for (category, answers) in table.iter() {
            for (question, answer) in answers.iter().enumerate() {
                if let Some(answer) = answer {
                    session.record(category, question, *answer)?;
                }
            }
        }

        Ok(session.into_answers())
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    category: String,
    question: usize,
    value: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::{STRATEGY_CULTURE, TOOLS_AUTOMATION};
    use std::io::Cursor;

    const CSV: &str = "category,question,value
strategy-culture,1,4
strategy-culture,2,5
tools-automation,5,2
";

    #[test]
    fn csv_rows_are_recorded_by_question_number() {
        let catalog = AssessmentCatalog::standard();
        let table =
            AnswerImporter::from_csv_reader(&catalog, Cursor::new(CSV)).expect("valid csv");

        let strategy = table.get(STRATEGY_CULTURE).expect("row present");
        assert_eq!(strategy[0].map(LikertAnswer::value), Some(4));
        assert_eq!(strategy[1].map(LikertAnswer::value), Some(5));
        assert_eq!(strategy[2], None);
        let tools = table.get(TOOLS_AUTOMATION).expect("row present");
        assert_eq!(tools[4].map(LikertAnswer::value), Some(2));
        assert_eq!(table.answered_count(), 3);
    }

    #[test]
    fn csv_rejects_question_zero_and_unknown_category() {
        let catalog = AssessmentCatalog::standard();

        let err = AnswerImporter::from_csv_reader(
            &catalog,
            Cursor::new("category,question,value\nstrategy-culture,0,3\n"),
        )
        .expect_err("question zero");
        assert!(matches!(err, AnswerImportError::Row { .. }));

        let err = AnswerImporter::from_csv_reader(
            &catalog,
            Cursor::new("category,question,value\nethics-governance,1,3\n"),
        )
        .expect_err("unknown category");
        assert!(matches!(
            err,
            AnswerImportError::Survey(SurveyError::UnknownCategory(_))
        ));
    }

    #[test]
    fn csv_rejects_values_outside_scale() {
        let catalog = AssessmentCatalog::standard();
        let err = AnswerImporter::from_csv_reader(
            &catalog,
            Cursor::new("category,question,value\nstrategy-culture,1,6\n"),
        )
        .expect_err("out of range");
        assert!(matches!(
            err,
            AnswerImportError::Answer(AnswerError::OutOfRange(6))
        ));
    }

    #[test]
    fn json_answers_are_replayed_through_session() {
        let catalog = AssessmentCatalog::standard();
        let table = AnswerImporter::from_json_reader(
            &catalog,
            Cursor::new(r#"{"strategy-culture":[5,4,null,2,1]}"#),
        )
        .expect("valid json");
        assert_eq!(table.answered_count(), 4);
        assert!(table.get(TOOLS_AUTOMATION).is_some(), "blank rows kept");

        let err = AnswerImporter::from_json_reader(
            &catalog,
            Cursor::new(r#"{"ethics-governance":[5,4,3,2,1]}"#),
        )
        .expect_err("unknown category");
        assert!(matches!(err, AnswerImportError::Survey(_)));
    }
}
