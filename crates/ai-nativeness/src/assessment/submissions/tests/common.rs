use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::answers::{AnswerTable, LikertAnswer};
use crate::assessment::catalog::{AssessmentCatalog, SKILLS_LEARNING, STRATEGY_CULTURE};
use crate::assessment::scoring::ScoringEngine;
use crate::assessment::submissions::domain::{
    AssessmentSubmission, SubmissionId, SubmissionRecord,
};
use crate::assessment::submissions::repository::{AssessmentRepository, RepositoryError};
use crate::assessment::submissions::{assessment_router, AssessmentService};

pub(super) fn engine() -> Arc<ScoringEngine> {
    Arc::new(ScoringEngine::standard())
}

pub(super) fn answers(value: u8) -> AnswerTable {
    AnswerTable::uniform(
        &AssessmentCatalog::standard(),
        LikertAnswer::new(value).expect("valid"),
    )
}

/// Strong scores everywhere except leadership alignment.
pub(super) fn misaligned_answers() -> AnswerTable {
    let mut table = answers(4);
    let low = [Some(LikertAnswer::new(2).expect("valid")); 5];
    table.insert(STRATEGY_CULTURE, low);
    table.insert(SKILLS_LEARNING, low);
    table
}

pub(super) fn incomplete_answers() -> AnswerTable {
    let mut table = answers(3);
    table.insert(STRATEGY_CULTURE, [None; 5]);
    table
}

pub(super) fn submission(email: &str) -> AssessmentSubmission {
    AssessmentSubmission::new(answers(3)).with_email(email)
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(engine(), repository.clone());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.submission_id == record.submission_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.submission_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }

    fn by_email(&self, email: &str, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|record| record.email.as_deref() == Some(email))
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn by_email(
        &self,
        _email: &str,
        _limit: usize,
    ) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}
