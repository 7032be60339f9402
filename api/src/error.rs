//! Unified error types for the contributors API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Feed data that cannot be turned into domain models
//! - `FeedError`: JSON feed client errors (transport, status, payload)
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - raised while mapping feed records into models
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Malformed URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },
}

/// JSON feed client errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("Feed has more than {max_pages} pages")]
    TooManyPages { max_pages: usize },
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Deserialization(err.to_string())
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            // Domain errors mean the upstream feed handed us a record we
            // cannot map
            AppError::Domain(e) => {
                tracing::error!("Feed data error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Invalid feed data",
                    Some(e.to_string()),
                )
            }
            AppError::Feed(e) => {
                tracing::error!("Feed error: {}", e);
                match e {
                    FeedError::Api { status, message } => {
                        let http_status = if *status == 404 {
                            StatusCode::NOT_FOUND
                        } else {
                            StatusCode::BAD_GATEWAY
                        };
                        (http_status, "Feed service error", Some(message.clone()))
                    }
                    FeedError::Request(inner) if inner.is_timeout() => {
                        (StatusCode::GATEWAY_TIMEOUT, "Feed service timeout", None)
                    }
                    _ => (StatusCode::BAD_GATEWAY, "Feed service error", None),
                }
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
