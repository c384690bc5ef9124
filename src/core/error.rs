//! Typed error handling for the backend
//!
//! The taxonomy keeps the failure kinds of the report pipeline
//! distinguishable: a missing root record ([`AppError::NotFound`]), a nested
//! reference that does not resolve ([`AppError::ReferenceResolution`]) and a
//! template/rendering failure ([`AppError::Render`]) are separate variants
//! even where the HTTP surface collapses them into one status.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the backend
#[derive(Debug, Error)]
pub enum AppError {
    /// A record was requested by id and does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// One or more nested references did not resolve to an existing record
    #[error("unresolved references: {}", .refs.join(", "))]
    ReferenceResolution { refs: Vec<String> },

    /// Report template compilation or binding failed
    #[error("report rendering failed: {0}")]
    Render(String),

    /// Request payload violated field constraints
    #[error("validation failed: {0}")]
    Validation(String),

    /// Storage backend failure (driver error, poisoned lock, bad document)
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration loading or parsing failed
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Build a resolution error from `(kind, id)` pairs of missing records.
    pub fn unresolved<I, K, V>(missing: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        AppError::ReferenceResolution {
            refs: missing
                .into_iter()
                .map(|(kind, id)| format!("{}/{}", kind.into(), id.into()))
                .collect(),
        }
    }

    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::ReferenceResolution { .. } => "REFERENCE_RESOLUTION_FAILED",
            AppError::Render(_) => "RENDER_FAILED",
            AppError::Validation(_) => "VALIDATION_FAILED",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            // The public surface keeps the original contract: a report that
            // cannot be resolved or rendered is indistinguishable from a
            // missing one. The distinct variants stay visible in logs.
            AppError::ReferenceResolution { .. } => StatusCode::NOT_FOUND,
            AppError::Render(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::not_found("client", "c-42");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "client not found: c-42");
    }

    #[test]
    fn test_unresolved_collects_all_missing_refs() {
        let err = AppError::unresolved([("client", "c1"), ("dish", "d1"), ("dish", "d2")]);
        assert_eq!(err.code(), "REFERENCE_RESOLUTION_FAILED");
        assert_eq!(err.to_string(), "unresolved references: client/c1, dish/d1, dish/d2");
        // Collapsed to not-found on the public surface
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = AppError::Validation("price out of range".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
