use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::answers::AnswerTable;
use crate::assessment::scoring::{AssessmentResult, MaturityLevel, Product};

/// Identifier wrapper for stored submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the scored result attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultId(pub String);

/// Payload accepted from respondents. The server always recomputes the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub email: Option<String>,
    pub responses: AnswerTable,
    #[serde(default, skip_deserializing)]
    pub user_agent: Option<String>,
}

impl AssessmentSubmission {
    pub fn new(responses: AnswerTable) -> Self {
        Self {
            email: None,
            responses,
            user_agent: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Repository record containing the answers, the computed result and audit metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRecord {
    pub submission_id: SubmissionId,
    pub result_id: ResultId,
    pub email: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub catalog_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub responses: AnswerTable,
    pub result: AssessmentResult,
}

impl SubmissionRecord {
    pub fn summary(&self) -> SubmissionSummary {
        SubmissionSummary {
            submission_id: self.submission_id.clone(),
            email: self.email.clone(),
            submitted_at: self.submitted_at,
            ai_nativeness_percentage: self.result.ai_nativeness_percentage,
            maturity_level: self.result.maturity_level,
            recommended_product: self.result.recommendation.product,
        }
    }
}

/// Listing view of a stored submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionSummary {
    pub submission_id: SubmissionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub ai_nativeness_percentage: u8,
    pub maturity_level: MaturityLevel,
    pub recommended_product: Product,
}

/// Response to a submission. `saved` is false whenever persistence was skipped or failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: String,
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<SubmissionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_id: Option<ResultId>,
    pub result: AssessmentResult,
}

/// Filter for listing stored submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionQuery {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SubmissionQuery {
    pub const DEFAULT_LIMIT: usize = 100;
    pub const MAX_LIMIT: usize = 1000;

    pub fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .min(Self::MAX_LIMIT)
    }
}
