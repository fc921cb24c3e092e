//! Error types for the adapter layer

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use legion_usecase::AnalyzeError;
use serde::Serialize;
use thiserror::Error;

/// Failure reading the dataset file
///
/// Never escapes `DatasetLoader::load`; it is logged and the roster
/// falls back to empty.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned from HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AnalyzeError> for ApiError {
    fn from(err: AnalyzeError) -> Self {
        match err {
            AnalyzeError::AgentNotFound { .. } => ApiError::NotFound(err.to_string()),
            AnalyzeError::Repository(_) => ApiError::Internal(err.to_string()),
        }
    }
}

/// `{"detail": "..."}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legion_domain::RepositoryError;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(AnalyzeError::AgentNotFound {
            missing: vec!["Ghost".to_string()],
        });

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "One or both agents not found.");
    }

    #[test]
    fn test_repository_error_maps_to_500() {
        let err = ApiError::from(AnalyzeError::Repository(RepositoryError::Unavailable {
            message: "gone".to_string(),
        }));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_load_error_mentions_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LoadError::Json {
            path: PathBuf::from("roster.json"),
            source,
        };

        assert!(err.to_string().starts_with("malformed JSON in 'roster.json'"));
    }
}
