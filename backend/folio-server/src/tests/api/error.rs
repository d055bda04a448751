use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_text(error: ApiError) -> (StatusCode, String) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_bad_request_returns_400_with_message() {
    let error = ApiError::BadRequest {
        message: "Invalid boundary".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, body) = body_text(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid boundary");
}

#[tokio::test]
async fn test_payload_too_large_returns_413() {
    let error = ApiError::PayloadTooLarge {
        message: "Request payload is too large".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, _) = body_text(error).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_internal_error_returns_500_without_detail() {
    let error = ApiError::internal(
        "Error saving project",
        "IO error on /srv/data/projects.json: permission denied",
    );

    let (status, body) = body_text(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error saving project");
}

#[tokio::test]
async fn test_response_is_plain_text() {
    let error = ApiError::internal("Error loading projects", "boom");

    let response = error.into_response();

    let content_type = response.headers().get(http::header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
}

#[test]
fn test_internal_error_display_includes_detail_for_logs() {
    let error = ApiError::internal("Error saving project", "disk full");

    let rendered = error.to_string();

    assert!(rendered.contains("Error saving project"));
    assert!(rendered.contains("disk full"));
}

#[test]
fn test_status_matches_variant() {
    let error = ApiError::BadRequest {
        message: "x".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        ApiError::internal("x", "y").status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
