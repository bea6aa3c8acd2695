//! Submission intake around the scoring engine.
//!
//! The engine result is always computed server-side. Storage goes through
//! [`AssessmentRepository`] and is best-effort: a failing repository never hides a result
//! from the respondent.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentSubmission, ResultId, SubmissionId, SubmissionQuery, SubmissionReceipt,
    SubmissionRecord, SubmissionSummary,
};
pub use repository::{AssessmentRepository, RepositoryError};
pub use router::assessment_router;
pub use service::{AssessmentService, ScoredAssessment, SubmissionError};
