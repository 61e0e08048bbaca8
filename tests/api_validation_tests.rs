// SPDX-License-Identifier: MIT

//! API input validation tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_monthly_month_out_of_range() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/user/abc123/monthly?year=2026&month=13")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Month validation runs before any retrieval, so even the offline
    // mock db returns a clean 400 rather than a database error.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_monthly_month_zero() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/user/abc123/monthly?year=2026&month=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_workout_rejects_empty_device_id() {
    let (app, _state) = common::create_test_app();

    let body = serde_json::json!({
        "device_id": "",
        "distance_cm": 500000,
        "duration_sec": 1800
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/workout")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_workout_rejects_absurd_heart_rate() {
    let (app, _state) = common::create_test_app();

    let body = serde_json::json!({
        "device_id": "garmin-1",
        "distance_cm": 500000,
        "duration_sec": 1800,
        "avg_hr": 400
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/workout")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_workout_rejects_malformed_body() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/workout")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_retrieval_failure_surfaces_as_database_error() {
    let (app, _state) = common::create_test_app();

    // Offline mock db fails every query
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/user/abc123/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
