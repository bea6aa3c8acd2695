use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AssessmentSubmission, SubmissionId, SubmissionQuery};
use super::repository::{AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, SubmissionError};
use crate::assessment::answers::AnswerTable;
use crate::assessment::catalog::LIKERT_SCALE;

/// Router builder exposing the catalog, scoring and submission endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler::<R>))
        .route("/api/v1/assessments/score", post(score_handler::<R>))
        .route(
            "/api/v1/assessments",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:submission_id",
            get(fetch_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn catalog_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let catalog = service.engine().catalog();
    let payload = json!({
        "version": catalog.version(),
        "categories": catalog.categories(),
        "likert_scale": LIKERT_SCALE,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(answers): axum::Json<AnswerTable>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.score(&answers) {
        Ok(scored) => (StatusCode::OK, axum::Json(scored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    headers: HeaderMap,
    axum::Json(mut submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    submission.user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    match service.submit(submission) {
        Ok(receipt) => (StatusCode::CREATED, axum::Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = SubmissionId(submission_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(SubmissionError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "submission not found",
                "submission_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Query(query): Query<SubmissionQuery>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match service.list(&query) {
        Ok(summaries) => (StatusCode::OK, axum::Json(summaries)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SubmissionError) -> Response {
    let status = match &error {
        SubmissionError::Answers(_) | SubmissionError::InvalidEmail(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SubmissionError::PersistenceDisabled => StatusCode::SERVICE_UNAVAILABLE,
        SubmissionError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SubmissionError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SubmissionError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
