use actix_web::http::StatusCode;
use thiserror::Error;

use crate::services::{CompletionError, MapsError};

/// Errors surfaced by a recommendation request
///
/// Components return these; only the route layer turns them into HTTP
/// responses.
#[derive(Debug, Error)]
pub enum GuideError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Service(String),

    #[error("{0}")]
    NotFound(String),

    #[error("OpenAI APIエラーが発生しました: {0}")]
    Generation(String),
}

impl GuideError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GuideError::Validation(_) => StatusCode::BAD_REQUEST,
            GuideError::NotFound(_) => StatusCode::NOT_FOUND,
            GuideError::Service(_) | GuideError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            GuideError::Validation(_) => "validation_error",
            GuideError::Service(_) => "service_error",
            GuideError::NotFound(_) => "not_found",
            GuideError::Generation(_) => "generation_error",
        }
    }
}

impl From<MapsError> for GuideError {
    fn from(err: MapsError) -> Self {
        GuideError::Service(err.to_string())
    }
}

impl From<CompletionError> for GuideError {
    fn from(err: CompletionError) -> Self {
        GuideError::Generation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(GuideError::Validation("bad".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(GuideError::NotFound("none".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(GuideError::Service("down".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(GuideError::Generation("quota".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_generation_message_surfaces_cause() {
        let err = GuideError::from(CompletionError::Api {
            status: 429,
            message: "You exceeded your current quota".to_string(),
        });
        assert_eq!(err.kind(), "generation_error");
        assert!(err.to_string().contains("You exceeded your current quota"));
    }
}
