pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Error body returned for every failed request.
///
/// `detail` is a plain string for not-found and server errors, and a list of
/// `{loc, msg, type}` entries for request validation failures.
///
/// ```json
/// {"detail": "Item not found"}
/// ```
///
/// ```json
/// {"detail": [{"loc": ["body", "price"], "msg": "missing field `price`", "type": "value_error"}]}
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(value_type = Object)]
    pub detail: Value,
}

impl ErrorResponse {
    pub fn message(detail: impl Into<String>) -> Self {
        Self {
            detail: Value::String(detail.into()),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    PathParam(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Database(e) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Database error: {:?}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!(ErrorCode::DatabaseError.default_message()),
                )
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                let kind = match &e {
                    JsonRejection::JsonSyntaxError(_) => "json_invalid",
                    JsonRejection::MissingJsonContentType(_) => "content_type",
                    _ => "value_error",
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!([field_error(&["body"], &e.body_text(), kind)]),
                )
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidQuery.code(),
                    "Query extraction error: {:?}",
                    e
                );
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!([field_error(&["query"], &e.body_text(), "value_error")]),
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (StatusCode::UNPROCESSABLE_ENTITY, validation_detail(&e))
            }
            AppError::PathParam(msg) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidPathParam.code(),
                    "Invalid path parameter: {}",
                    msg
                );
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!([field_error(&["path"], &msg, "int_parsing")]),
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (StatusCode::NOT_FOUND, json!(msg))
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!(ErrorCode::InternalError.default_message()),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

fn field_error(loc: &[&str], msg: &str, kind: &str) -> Value {
    json!({ "loc": loc, "msg": msg, "type": kind })
}

/// Flattens `validator` field errors into `{loc, msg, type}` entries.
fn validation_detail(errors: &ValidationErrors) -> Value {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let entries: Vec<Value> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let msg = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("failed `{}` check", err.code));
                field_error(&["body", field.as_str()], &msg, &err.code)
            })
        })
        .collect();

    Value::Array(entries)
}

/// Create a standardized error response from a status and message.
///
/// ```ignore
/// use axum::http::StatusCode;
/// use axum_helpers::errors::{error_response, ErrorCode};
///
/// let response = error_response(StatusCode::NOT_FOUND, "Not Found", ErrorCode::NotFound);
/// ```
pub fn error_response(status: StatusCode, message: &str, error_code: ErrorCode) -> Response {
    tracing::debug!(error_code = error_code.code(), "{}", message);
    (status, Json(ErrorResponse::message(message))).into_response()
}
