//! Integration scenarios for the submission workflow.
//!
//! Scenarios drive the public service facade and the HTTP router together so storage,
//! listing and error mapping are validated without reaching into private modules.

mod common {
    use std::sync::{Arc, Mutex};

    use ai_nativeness::assessment::submissions::{
        AssessmentRepository, AssessmentService, RepositoryError, SubmissionId, SubmissionRecord,
    };
    use ai_nativeness::assessment::{AnswerTable, AssessmentCatalog, LikertAnswer, ScoringEngine};

    pub(super) fn answers(value: u8) -> AnswerTable {
        AnswerTable::uniform(
            &AssessmentCatalog::standard(),
            LikertAnswer::new(value).expect("valid answer"),
        )
    }

    #[derive(Default, Clone)]
    pub(super) struct RecordingRepository {
        records: Arc<Mutex<Vec<SubmissionRecord>>>,
    }

    impl RecordingRepository {
        pub(super) fn stored(&self) -> Vec<SubmissionRecord> {
            self.records.lock().expect("repository mutex poisoned").clone()
        }
    }

    impl AssessmentRepository for RecordingRepository {
        fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
            guard.push(record.clone());
            Ok(record)
        }

        fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
            let guard = self.records.lock().expect("repository mutex poisoned");
            Ok(guard.iter().find(|record| &record.submission_id == id).cloned())
        }

        fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
            let guard = self.records.lock().expect("repository mutex poisoned");
            Ok(guard.iter().rev().take(limit).cloned().collect())
        }

        fn by_email(
            &self,
            email: &str,
            limit: usize,
        ) -> Result<Vec<SubmissionRecord>, RepositoryError> {
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

    pub(super) fn build_service() -> (
        Arc<AssessmentService<RecordingRepository>>,
        RecordingRepository,
    ) {
        let repository = RecordingRepository::default();
        let service = AssessmentService::new(
            Arc::new(ScoringEngine::standard()),
            Arc::new(repository.clone()),
        );
        (Arc::new(service), repository)
    }
}

use ai_nativeness::assessment::scoring::{MaturityLevel, Product};
use ai_nativeness::assessment::submissions::{
    assessment_router, AssessmentSubmission, SubmissionQuery,
};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use common::*;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[test]
fn stored_record_carries_recomputed_result_and_metadata() {
    let (service, repository) = build_service();
    let mut submission = AssessmentSubmission::new(answers(2)).with_email("Team@Example.org");
    submission.user_agent = Some("survey-cli/1.0".to_string());

    let receipt = service.submit(submission).expect("submission accepted");
    assert!(receipt.saved);

    let stored = repository.stored();
    assert_eq!(stored.len(), 1);
    let record = &stored[0];
    assert_eq!(record.email.as_deref(), Some("team@example.org"));
    assert_eq!(record.user_agent.as_deref(), Some("survey-cli/1.0"));
    assert_eq!(record.responses, answers(2));
    assert_eq!(record.result.maturity_level, MaturityLevel::AiCurious);
    assert_eq!(record.result.ai_nativeness_percentage, 25);

    let summary = record.summary();
    assert_eq!(summary.recommended_product, Product::FoundationsTraining);
    assert_eq!(
        service
            .list(&SubmissionQuery::default())
            .expect("listing")
            .len(),
        1
    );
}

#[tokio::test]
async fn client_supplied_results_are_ignored() {
    let (service, repository) = build_service();
    let body = json!({
        "email": "lead@example.com",
        "responses": answers(5),
        "result": { "ai_nativeness_percentage": 3 },
        "user_agent": "spoofed",
    });

    let response = assessment_router(service)
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::USER_AGENT, "browser/42")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let receipt = read_json(response).await;
    assert_eq!(receipt["success"], true);
    assert_eq!(receipt["result"]["ai_nativeness_percentage"], 100);

    let stored = repository.stored();
    assert_eq!(stored[0].user_agent.as_deref(), Some("browser/42"));
}

#[tokio::test]
async fn invalid_email_is_rejected_without_storing() {
    let (service, repository) = build_service();
    let body = json!({ "email": "nobody", "responses": answers(3) });

    let response = assessment_router(service)
        .oneshot(
            Request::post("/api/v1/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(repository.stored().is_empty());
}
