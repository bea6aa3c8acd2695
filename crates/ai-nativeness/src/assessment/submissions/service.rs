use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{
    AssessmentSubmission, ResultId, SubmissionId, SubmissionQuery, SubmissionReceipt,
    SubmissionRecord, SubmissionSummary,
};
use super::repository::{AssessmentRepository, RepositoryError};
use crate::assessment::answers::{AnswerError, AnswerTable, LikertAnswer};
use crate::assessment::content::{ContentLibrary, ProductContent};
use crate::assessment::scoring::{AssessmentResult, ScoringEngine};

/// Service composing the scoring engine, content library and an optional repository.
pub struct AssessmentService<R> {
    engine: Arc<ScoringEngine>,
    content: Arc<ContentLibrary>,
    repository: Option<Arc<R>>,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_ids() -> (SubmissionId, ResultId) {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    (
        SubmissionId(format!("sub-{id:06}")),
        ResultId(format!("res-{id:06}")),
    )
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(engine: Arc<ScoringEngine>, repository: Arc<R>) -> Self {
        Self {
            engine,
            content: Arc::new(ContentLibrary::standard()),
            repository: Some(repository),
        }
    }

    /// Scores and acknowledges submissions without storing them.
    pub fn without_persistence(engine: Arc<ScoringEngine>) -> Self {
        Self {
            engine,
            content: Arc::new(ContentLibrary::standard()),
            repository: None,
        }
    }

    pub fn with_content(mut self, content: ContentLibrary) -> Self {
        self.content = Arc::new(content);
        self
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn content(&self) -> &ContentLibrary {
        &self.content
    }

    pub fn persistence_enabled(&self) -> bool {
        self.repository.is_some()
    }

    pub fn score(&self, answers: &AnswerTable) -> Result<ScoredAssessment, SubmissionError> {
        let result = self.engine.score(answers)?;
        Ok(self.present(result))
    }

    /// Attach the narrative copy for the result's level and recommended product.
    pub fn present(&self, result: AssessmentResult) -> ScoredAssessment {
        let level_description = self
            .content
            .level_description(result.maturity_level.label())
            .map(str::to_string);
        let product = self
            .content
            .product(result.recommendation.product.name())
            .cloned();
        ScoredAssessment {
            result,
            level_description,
            product,
        }
    }

    /// Score a submission and store it when a repository is configured.
    ///
    /// Storage is best-effort: a repository failure is logged and reported through
    /// `saved: false`, never as an error.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let email = normalize_email(submission.email.as_deref())?;
        let result = self.engine.score(&submission.responses)?;

        info!(
            email = email.as_deref().unwrap_or("not provided"),
            index = result.ai_nativeness_index,
            maturity_level = result.maturity_level.label(),
            product = result.recommendation.product.name(),
            "assessment submitted"
        );
        for (category, answers) in submission.responses.iter() {
            let values: Vec<Option<u8>> = answers
                .iter()
                .map(|answer| answer.map(LikertAnswer::value))
                .collect();
            debug!(category, ?values, "submitted answers");
        }

        let Some(repository) = &self.repository else {
            return Ok(SubmissionReceipt {
                success: true,
                message: "Assessment scored; persistence is disabled".to_string(),
                saved: false,
                submission_id: None,
                result_id: None,
                result,
            });
        };

        let (submission_id, result_id) = next_ids();
        let record = SubmissionRecord {
            submission_id,
            result_id,
            email,
            submitted_at: Utc::now(),
            catalog_version: self.engine.catalog().version(),
            user_agent: submission.user_agent,
            responses: submission.responses,
            result,
        };

        match repository.insert(record.clone()) {
            Ok(stored) => {
                info!(submission_id = %stored.submission_id, "assessment stored");
                Ok(SubmissionReceipt {
                    success: true,
                    message: "Assessment submitted successfully".to_string(),
                    saved: true,
                    submission_id: Some(stored.submission_id),
                    result_id: Some(stored.result_id),
                    result: stored.result,
                })
            }
            Err(error) => {
                warn!(%error, submission_id = %record.submission_id, "failed to store assessment");
                Ok(SubmissionReceipt {
                    success: true,
                    message: "Assessment submitted successfully".to_string(),
                    saved: false,
                    submission_id: None,
                    result_id: None,
                    result: record.result,
                })
            }
        }
    }

    /// Fetch a stored submission for API responses.
    pub fn get(&self, submission_id: &SubmissionId) -> Result<SubmissionRecord, SubmissionError> {
        let repository = self.repository()?;
        let record = repository
            .fetch(submission_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list(&self, query: &SubmissionQuery) -> Result<Vec<SubmissionSummary>, SubmissionError> {
        let repository = self.repository()?;
        let limit = query.effective_limit();
        let records = match normalize_email(query.email.as_deref())? {
            Some(email) => repository.by_email(&email, limit)?,
            None => repository.recent(limit)?,
        };
        Ok(records.iter().map(SubmissionRecord::summary).collect())
    }

    fn repository(&self) -> Result<&Arc<R>, SubmissionError> {
        self.repository
            .as_ref()
            .ok_or(SubmissionError::PersistenceDisabled)
    }
}

/// At least two labels, none of them empty.
fn is_dotted_domain(domain: &str) -> bool {
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

fn normalize_email(email: Option<&str>) -> Result<Option<String>, SubmissionError> {
    let Some(email) = email.map(str::trim).filter(|email| !email.is_empty()) else {
        return Ok(None);
    };
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && is_dotted_domain(domain) => {
            Ok(Some(email.to_ascii_lowercase()))
        }
        _ => Err(SubmissionError::InvalidEmail(email.to_string())),
    }
}

/// A result together with the narrative copy its keys point at.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScoredAssessment {
    pub result: AssessmentResult,
    pub level_description: Option<String>,
    pub product: Option<ProductContent>,
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Answers(#[from] AnswerError),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("submission storage is disabled")]
    PersistenceDisabled,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
