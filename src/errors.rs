use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::{Display, Error};
use serde::Serialize;

use crate::entities::EntityKind;

#[derive(Debug)]
pub enum AppError {
    ValidationError(FieldError),
    StorageError(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(error) => {
                write!(f, "validation error: {}:{}", error.field, error.message)
            }
            AppError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(error) => serde_json::json!({
                "message": error.message,
                "field": error.field,
            }),
            _ => {
                tracing::error!(error = %self, "Request failed");
                serde_json::json!({"message": "Internal server error"})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FieldError> for AppError {
    fn from(error: FieldError) -> Self {
        AppError::ValidationError(error)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::StorageError(format!("Database error: {}", err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

/// Errors raised while populating the fixture tables at startup.
#[derive(Debug, Display, Error)]
pub enum SeedError {
    #[display("Could not determine seed state: {_0}")]
    Check(#[error(source)] AppError),

    #[display("Seeding {kind} stopped after {inserted} row(s): {source}")]
    PartialFailure {
        kind: EntityKind,
        inserted: usize,
        #[error(source)]
        source: AppError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[actix_rt::test]
    async fn validation_error_renders_message_and_field() {
        let err = AppError::from(FieldError {
            field: "email".into(),
            message: "Invalid email address".into(),
        });

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({
            "message": "Invalid email address",
            "field": "email",
        }));
    }

    #[actix_rt::test]
    async fn storage_error_is_opaque() {
        let err = AppError::StorageError("connection refused on 10.0.0.3".into());

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("10.0.0.3"));
        assert!(text.contains("Internal server error"));
    }

    #[test]
    fn seed_error_display_names_the_kind() {
        let err = SeedError::PartialFailure {
            kind: EntityKind::Skill,
            inserted: 3,
            source: AppError::StorageError("boom".into()),
        };
        assert_eq!(err.to_string(), "Seeding skill stopped after 3 row(s): Storage error: boom");
    }
}
