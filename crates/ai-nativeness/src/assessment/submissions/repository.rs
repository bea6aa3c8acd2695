use super::domain::{SubmissionId, SubmissionRecord};

/// Storage abstraction so the submission service can be exercised in isolation.
///
/// Listing methods return records newest first.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError>;
    fn by_email(&self, email: &str, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
