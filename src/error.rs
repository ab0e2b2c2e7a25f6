//! Error types for the HTTP request layer
//!
//! Every failure a route can produce ends up here and is rendered as
//! `400 Bad Request` with a JSON body:
//!
//! ```json
//! { "error": "wrong_side_to_move", "message": "Piece at (1, 4) belongs to Black, ..." }
//! ```
//!
//! `error` is a stable snake_case tag; `message` is for humans only.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chess_rules::RulesError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while serving a request
#[derive(Error, Debug)]
pub enum ApiError {
    /// The rules engine rejected the request
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// The JSON body was missing or malformed
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Rules(err) => err.kind(),
            ApiError::InvalidBody(_) => "invalid_body",
        }
    }
}

/// Wire shape of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };
        warn!("[API] Request rejected ({}): {}", body.error, body.message);
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Result type alias for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chess_rules::Square;

    #[test]
    fn test_rules_error_kind_passes_through() {
        let square = Square::new(3, 3).unwrap();
        let err = ApiError::from(RulesError::EmptySquare { square });
        assert_eq!(err.kind(), "empty_square");
        assert_eq!(err.to_string(), "No piece at (3, 3)");
    }

    #[test]
    fn test_error_renders_as_bad_request() {
        let err = ApiError::from(RulesError::OutOfBounds { row: 9, col: 0 });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
