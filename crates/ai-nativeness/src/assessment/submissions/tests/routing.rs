use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::submissions::router::{fetch_handler, submit_handler};
use crate::assessment::submissions::{AssessmentService, AssessmentSubmission};

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn catalog_route_lists_categories_and_scale() {
    let (service, _) = build_service();
    let response = router_with_service(service)
        .oneshot(
            Request::get("/api/v1/catalog")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["categories"].as_array().map(Vec::len), Some(9));
    assert_eq!(payload["likert_scale"][4]["description"], "Strongly agree");
}

#[tokio::test]
async fn score_route_returns_result_and_content() {
    let (service, repository) = build_service();
    let body = serde_json::to_value(answers(5)).expect("serializes");

    let response = router_with_service(service)
        .oneshot(json_request("POST", "/api/v1/assessments/score", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["result"]["ai_nativeness_percentage"], 100);
    assert_eq!(payload["result"]["maturity_level"], "AI-Native");
    assert_eq!(
        payload["result"]["diffusion_segment"]["segment"],
        "Innovators"
    );
    assert!(payload["level_description"].is_string());
    assert_eq!(repository.len(), 0, "scoring alone stores nothing");
}

#[tokio::test]
async fn score_route_rejects_incomplete_answers() {
    let (service, _) = build_service();
    let body = serde_json::to_value(incomplete_answers()).expect("serializes");

    let response = router_with_service(service)
        .oneshot(json_request("POST", "/api/v1/assessments/score", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("unanswered"));
}

#[tokio::test]
async fn score_route_rejects_out_of_scale_values() {
    let (service, _) = build_service();
    let body = json!({ "strategy-culture": [1, 2, 3, 4, 7] });

    let response = router_with_service(service)
        .oneshot(json_request("POST", "/api/v1/assessments/score", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_route_creates_and_fetch_route_returns_record() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let body = json!({
        "email": "lead@example.com",
        "responses": answers(4),
    });

    let response = router
        .clone()
        .oneshot(json_request("POST", "/api/v1/assessments", body))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let receipt = read_json_body(response).await;
    assert_eq!(receipt["saved"], true);
    let submission_id = receipt["submission_id"]
        .as_str()
        .expect("submission id")
        .to_string();

    let response = router
        .clone()
        .oneshot(
            Request::get(format!("/api/v1/assessments/{submission_id}"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let record = read_json_body(response).await;
    assert_eq!(record["email"], "lead@example.com");
    assert_eq!(record["result"]["maturity_level"], "AI-Driven");

    let response = router
        .oneshot(
            Request::get("/api/v1/assessments?email=lead@example.com&limit=5")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let listing = read_json_body(response).await;
    assert_eq!(listing.as_array().map(Vec::len), Some(1));
    assert_eq!(
        listing[0]["recommended_product"],
        "AI-driven software development workshops"
    );
}

#[tokio::test]
async fn submit_handler_reports_unsaved_when_storage_fails() {
    let service = Arc::new(AssessmentService::new(
        engine(),
        Arc::new(UnavailableRepository),
    ));

    let response = submit_handler::<UnavailableRepository>(
        State(service),
        axum::http::HeaderMap::new(),
        axum::Json(AssessmentSubmission::new(answers(3))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["saved"], false);
    assert!(payload.get("submission_id").is_none());
    assert_eq!(payload["result"]["ai_nativeness_index"], 3.0);
}

#[tokio::test]
async fn fetch_handler_returns_not_found_for_unknown_id() {
    let (service, _) = build_service();

    let response = fetch_handler::<MemoryRepository>(
        State(Arc::new(service)),
        axum::extract::Path("sub-unknown".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["submission_id"], "sub-unknown");
}

#[tokio::test]
async fn list_route_is_unavailable_without_persistence() {
    let service = AssessmentService::<MemoryRepository>::without_persistence(engine());

    let response = router_with_service(service)
        .oneshot(
            Request::get("/api/v1/assessments")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
