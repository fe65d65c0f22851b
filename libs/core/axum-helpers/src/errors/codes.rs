//! Type-safe error codes for log correlation.
//!
//! Response bodies only carry `detail`; the code travels in the `error_code`
//! field of the tracing event emitted for each error, so dashboards can group
//! failures without parsing messages.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body failed `validator` rules
    ValidationError,

    /// Path parameter could not be parsed
    InvalidPathParam,

    /// Request body was not acceptable JSON for the target type
    JsonExtraction,

    NotFound,

    /// Query string could not be deserialized
    InvalidQuery,

    MethodNotAllowed,

    // Database errors (2000-2999)
    DatabaseError,

    // Server errors (5000-5999)
    InternalError,

    /// A readiness dependency is down
    ServiceUnavailable,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier, matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidPathParam => "INVALID_PATH_PARAM",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code attached to log events.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidPathParam => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InvalidQuery => 1005,
            Self::MethodNotAllowed => 1006,
            Self::DatabaseError => 2003,
            Self::InternalError => 5000,
            Self::ServiceUnavailable => 5003,
        }
    }

    /// Client-facing `detail` used when the error carries no message of its own.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidPathParam => "Invalid path parameter",
            Self::JsonExtraction => "Invalid request body",
            Self::NotFound => "Not Found",
            Self::InvalidQuery => "Invalid query parameters",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::InternalError | Self::DatabaseError => "Internal Server Error",
            Self::ServiceUnavailable => "Service Unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
