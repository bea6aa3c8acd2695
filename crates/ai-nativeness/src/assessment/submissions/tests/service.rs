use super::common::*;
use crate::assessment::answers::AnswerError;
use crate::assessment::scoring::{MaturityLevel, Product, ReasonCode};
use crate::assessment::submissions::domain::{
    AssessmentSubmission, SubmissionId, SubmissionQuery,
};
use crate::assessment::submissions::repository::{AssessmentRepository, RepositoryError};
use crate::assessment::submissions::{AssessmentService, SubmissionError};
use std::sync::Arc;

#[test]
fn submit_persists_and_returns_identifiers() {
    let (service, repository) = build_service();

    let receipt = service
        .submit(submission("Lead@Example.com"))
        .expect("submission succeeds");

    assert!(receipt.success);
    assert!(receipt.saved);
    let submission_id = receipt.submission_id.expect("stored id");
    assert!(submission_id.0.starts_with("sub-"));
    assert!(receipt
        .result_id
        .as_ref()
        .is_some_and(|id| id.0.starts_with("res-")));
    assert_eq!(receipt.result.maturity_level, MaturityLevel::AiEnabled);

    let stored = repository
        .fetch(&submission_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.email.as_deref(), Some("lead@example.com"));
    assert_eq!(stored.catalog_version, service.engine().catalog().version());
    assert_eq!(stored.result, receipt.result);
}

#[test]
fn submit_still_returns_result_when_repository_fails() {
    let service = AssessmentService::new(engine(), Arc::new(UnavailableRepository));

    let receipt = service
        .submit(submission("lead@example.com"))
        .expect("storage failure is not fatal");

    assert!(receipt.success);
    assert!(!receipt.saved);
    assert!(receipt.submission_id.is_none());
    assert!(receipt.result_id.is_none());
    assert_eq!(receipt.result.ai_nativeness_percentage, 50);
}

#[test]
fn submit_without_persistence_scores_only() {
    let service = AssessmentService::<MemoryRepository>::without_persistence(engine());

    let receipt = service
        .submit(AssessmentSubmission::new(answers(5)))
        .expect("scored");
    assert!(!receipt.saved);
    assert_eq!(receipt.result.ai_nativeness_percentage, 100);

    assert!(matches!(
        service.list(&SubmissionQuery::default()),
        Err(SubmissionError::PersistenceDisabled)
    ));
}

#[test]
fn submit_rejects_invalid_answers_before_storing() {
    let (service, repository) = build_service();

    match service.submit(AssessmentSubmission::new(incomplete_answers())) {
        Err(SubmissionError::Answers(AnswerError::Unanswered { question: 1, .. })) => {}
        other => panic!("expected unanswered question error, got {other:?}"),
    }
    assert_eq!(repository.len(), 0);
}

#[test]
fn submit_rejects_malformed_email() {
    let (service, _) = build_service();
    for malformed in ["not-an-address", "a@b.", "a@.com", "a@example..com", "@example.com"] {
        assert!(
            matches!(
                service.submit(submission(malformed)),
                Err(SubmissionError::InvalidEmail(_))
            ),
            "{malformed} should be rejected"
        );
    }

    let receipt = service
        .submit(submission("   "))
        .expect("blank email is treated as absent");
    assert!(receipt.saved);
}

#[test]
fn get_propagates_not_found() {
    let (service, _) = build_service();
    match service.get(&SubmissionId("sub-missing".to_string())) {
        Err(SubmissionError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn list_returns_newest_first_and_filters_by_email() {
    let (service, _) = build_service();
    let first = service
        .submit(submission("a@example.com"))
        .expect("first");
    service
        .submit(submission("b@example.com"))
        .expect("second");
    let third = service
        .submit(submission("a@example.com"))
        .expect("third");

    let all = service.list(&SubmissionQuery::default()).expect("list");
    assert_eq!(all.len(), 3);
    assert_eq!(Some(&all[0].submission_id), third.submission_id.as_ref());

    let filtered = service
        .list(&SubmissionQuery {
            email: Some("A@example.com".to_string()),
            limit: None,
        })
        .expect("filtered list");
    let ids: Vec<_> = filtered.iter().map(|s| Some(s.submission_id.clone())).collect();
    assert_eq!(ids, vec![third.submission_id, first.submission_id]);

    let limited = service
        .list(&SubmissionQuery {
            email: None,
            limit: Some(1),
        })
        .expect("limited list");
    assert_eq!(limited.len(), 1);
}

#[test]
fn score_attaches_content_for_result_keys() {
    let (service, _) = build_service();
    let scored = service.score(&misaligned_answers()).expect("scored");

    assert_eq!(scored.result.recommendation.reason, ReasonCode::AlignmentGap);
    let product = scored.product.expect("content for product");
    assert_eq!(product.name, Product::FoundationsTraining.name());
    assert!(scored.level_description.is_some());
}

#[test]
fn query_limit_defaults_and_caps() {
    assert_eq!(SubmissionQuery::default().effective_limit(), 100);
    let query = SubmissionQuery {
        email: None,
        limit: Some(50_000),
    };
    assert_eq!(query.effective_limit(), SubmissionQuery::MAX_LIMIT);
}
