//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod storage;

use std::collections::BTreeMap;

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::error::{config::ConfigError, storage::StorageError},
};

/// Message returned alongside field errors in every 422 response.
pub const VALIDATION_MESSAGE: &str = "The given data was invalid.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Image storage error.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Malformed multipart request body.
    ///
    /// Responds with the status code Axum assigns to the rejection (usually 400).
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// JSON body that is missing, malformed, or does not fit the expected shape.
    ///
    /// Responds with the status code Axum assigns to the rejection (400, 415 or 422).
    #[error(transparent)]
    JsonErr(#[from] JsonRejection),

    /// One or more request fields failed validation.
    ///
    /// Results in 422 Unprocessable Entity listing the failed rules per field.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Body returned for every 5xx; details stay in the server log.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl AppError {
    /// Status code the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MultipartErr(err) => err.status(),
            Self::JsonErr(err) => err.status(),
            Self::ConfigErr(_) | Self::DbErr(_) | Self::StorageErr(_) | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Client errors echo their message as `{error}` (or the field map for 422). Server errors
/// are logged and answered with a generic message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            Self::Validation(errors) => (status, Json(validation_error_dto(&errors))).into_response(),
            Self::NotFound(error) | Self::BadRequest(error) => {
                (status, Json(ErrorDto { error })).into_response()
            }
            Self::MultipartErr(err) => (
                status,
                Json(ErrorDto {
                    error: err.body_text(),
                }),
            )
                .into_response(),
            Self::JsonErr(err) => (
                status,
                Json(ErrorDto {
                    error: err.body_text(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);
                (
                    status,
                    Json(ErrorDto {
                        error: INTERNAL_ERROR_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Flattens validator errors into `{field: [message, ...]}`.
///
/// Rules declared without a message fall back to a generic sentence naming the field.
pub fn validation_error_dto(errors: &ValidationErrors) -> ValidationErrorDto {
    let errors = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("The {} field is invalid.", field.replace('_', " ")),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect::<BTreeMap<_, _>>();

    ValidationErrorDto {
        message: VALIDATION_MESSAGE.to_string(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::{json, Value};
    use validator::ValidationError;

    use super::*;

    async fn into_parts(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn client_errors_echo_their_message() {
        let (status, body) = into_parts(AppError::NotFound("Post not found".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Post not found" }));

        let (status, body) = into_parts(AppError::BadRequest("Nope".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Nope" }));
    }

    #[tokio::test]
    async fn validation_errors_list_messages_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "name",
            ValidationError::new("required").with_message("The name field is required.".into()),
        );
        errors.add("user_id", ValidationError::new("exists"));

        let (status, body) = into_parts(AppError::Validation(errors)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "message": VALIDATION_MESSAGE,
                "errors": {
                    "name": ["The name field is required."],
                    "user_id": ["The user id field is invalid."],
                }
            })
        );
    }

    #[tokio::test]
    async fn server_errors_hide_details() {
        let err = AppError::InternalError("comment vanished after insert".to_string());

        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": INTERNAL_ERROR_MESSAGE }));
    }
}
