//! REST API error types
//!
//! Responses carry a short plain-text message. Internal details are logged
//! with their source location and never sent to the client.

use std::fmt::Display;
use std::panic::Location;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request body (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Request body over the configured limit (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). Only `message` reaches the client.
    #[error("Internal error: {message}: {detail} {location}")]
    Internal {
        message: String,
        detail: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Internal error with a public `message` and a logged-only `detail`
    #[track_caller]
    pub fn internal<E: Display>(message: &str, detail: E) -> Self {
        ApiError::Internal {
            message: message.to_string(),
            detail: detail.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let message = match self {
            ApiError::BadRequest { message, .. }
            | ApiError::PayloadTooLarge { message, .. }
            | ApiError::Internal { message, .. } => message,
        };

        (status, message).into_response()
    }
}

/// Convert multipart stream errors to API errors
impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge {
                message: e.body_text(),
                location,
            }
        } else {
            ApiError::BadRequest {
                message: e.body_text(),
                location,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
