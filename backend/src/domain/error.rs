//! Domain-level error type shared by every layer of the service.
//!
//! Errors are transport agnostic. The HTTP adapter owns the status mapping in
//! `inbound::http::error`; the domain only describes what went wrong.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TraceId;

/// Stable machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A user payload failed structural validation.
    ValidationFailed,
    /// A path identifier is not a well-formed UUID.
    InvalidIdentifier,
    /// The request body could not be parsed as JSON.
    MalformedBody,
    /// The addressed user or route does not exist.
    NotFound,
    /// Anything the service did not anticipate.
    InternalError,
}

/// Failure payload returned to clients.
///
/// Serialises as `{"error": ..., "code": ..., "errors": [...], "traceId": ...}`.
/// `errors` is only present for validation failures and `traceId` only when a
/// request trace was in scope at construction time.
///
/// # Examples
/// ```
/// use user_service::domain::{Error, ErrorCode};
///
/// let err = Error::user_not_found("3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert!(err.message().contains("3fa85f64"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[serde(rename = "error")]
    message: String,
    code: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl Error {
    /// Create an error, capturing the current trace identifier if one is in
    /// scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            errors: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Validation failure carrying every violation that was found.
    pub fn validation_failed(message: impl Into<String>, errors: Vec<String>) -> Self {
        let mut error = Self::new(ErrorCode::ValidationFailed, message);
        error.errors = Some(errors);
        error
    }

    /// Path identifier that does not have the UUID shape.
    pub fn invalid_identifier(value: &str) -> Self {
        Self::new(
            ErrorCode::InvalidIdentifier,
            format!("Invalid user id - [{value}]"),
        )
    }

    /// Request body that is not valid JSON.
    pub fn malformed_body(cause: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::MalformedBody,
            format!("Request body is not valid JSON - [{cause}]"),
        )
    }

    /// Generic not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// No user is stored under `id`.
    pub fn user_not_found(id: impl fmt::Display) -> Self {
        Self::not_found(format!("User with id - [{id}] not found"))
    }

    /// No route matches the request.
    pub fn route_not_found(uri: impl fmt::Display, method: impl fmt::Display) -> Self {
        Self::not_found(format!(
            "Not Found with Path - [{uri}], method - [{method}]"
        ))
    }

    /// Unanticipated failure; `message` is returned verbatim.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Wrap an unanticipated failure, surfacing its message.
    pub fn unexpected(cause: impl fmt::Display) -> Self {
        Self::internal(format!("Unexpected error - [{cause}]"))
    }

    /// Attach an explicit trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable summary.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Individual violations for validation failures.
    pub fn errors(&self) -> Option<&[String]> {
        self.errors.as_deref()
    }

    /// Trace identifier captured at construction.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
