use super::answers::{AnswerTable, LikertAnswer};
use super::catalog::{AssessmentCatalog, Category, QUESTIONS_PER_CATEGORY};

/// Caller-owned navigation state for filling in an assessment one category at a time.
///
/// The session borrows the catalog and owns the in-progress answers; once
/// [`SurveySession::is_complete`] holds, [`SurveySession::into_answers`] hands the table to
/// the scoring engine.
#[derive(Debug, Clone)]
pub struct SurveySession<'a> {
    catalog: &'a AssessmentCatalog,
    current: usize,
    answers: AnswerTable,
}

impl<'a> SurveySession<'a> {
    pub fn new(catalog: &'a AssessmentCatalog) -> Self {
        Self {
            catalog,
            current: 0,
            answers: AnswerTable::blank(catalog),
        }
    }

    pub fn catalog(&self) -> &'a AssessmentCatalog {
        self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_category(&self) -> Option<&'a Category> {
        self.catalog.categories().get(self.current)
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.catalog.len()
    }

    /// Store an answer; `question` is zero-based.
    pub fn record(
        &mut self,
        category_id: &str,
        question: usize,
        answer: LikertAnswer,
    ) -> Result<(), SurveyError> {
        if question >= QUESTIONS_PER_CATEGORY {
            return Err(SurveyError::QuestionOutOfBounds {
                category: category_id.to_string(),
                question,
            });
        }
        let row = self
            .answers
            .get_mut(category_id)
            .ok_or_else(|| SurveyError::UnknownCategory(category_id.to_string()))?;
        row[question] = Some(answer);
        Ok(())
    }

    pub fn answer(&self, category_id: &str, question: usize) -> Option<LikertAnswer> {
        self.answers
            .get(category_id)
            .and_then(|row| row.get(question).copied().flatten())
    }

    pub fn is_current_category_complete(&self) -> bool {
        self.current_category()
            .and_then(|category| self.answers.get(category.id))
            .map(|row| row.iter().all(Option::is_some))
            .unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.answers.is_complete(self.catalog)
    }

    /// Move to the next category. Returns `false` when already on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move to the previous category. Returns `false` when already on the first one.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Share of answered statements, rounded to a whole percent.
    pub fn progress(&self) -> u8 {
        let total = self.catalog.total_questions();
        if total == 0 {
            return 0;
        }
        let answered = self.answers.answered_count();
        ((answered as f64 / total as f64) * 100.0).round() as u8
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.answers = AnswerTable::blank(self.catalog);
    }

    pub fn answers(&self) -> &AnswerTable {
        &self.answers
    }

    pub fn into_answers(self) -> AnswerTable {
        self.answers
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyError {
    #[error("category '{0}' is not part of the assessment catalog")]
    UnknownCategory(String),
    #[error("question {question} is out of bounds for category '{category}'")]
    QuestionOutOfBounds { category: String, question: usize },
}
