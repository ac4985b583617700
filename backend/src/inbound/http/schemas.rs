//! OpenAPI schema definitions for the user API.
//!
//! Domain types stay free of documentation derives. These wrappers mirror the
//! JSON each domain type produces and are registered with utoipa under the
//! domain names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// A user payload failed validation.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// A path identifier is not a hyphenated UUID.
    #[schema(rename = "invalid_identifier")]
    InvalidIdentifier,
    /// The request body is not valid JSON.
    #[schema(rename = "malformed_body")]
    MalformedBody,
    /// No such user or route.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message.
    #[schema(example = "User input validation failed")]
    error: String,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Individual violations; present for validation failures only.
    #[schema(example = json!(["Age is required and must be a number."]))]
    errors: Option<Vec<String>>,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(rename = "traceId", example = "00000000-0000-0000-0000-000000000000")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Server-assigned identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Ada Lovelace")]
    username: String,
    #[schema(example = 36)]
    age: f64,
    #[schema(example = json!(["chess", "mathematics"]))]
    hobbies: Vec<String>,
}

/// OpenAPI schema for create and update request bodies.
///
/// Any `id` field is ignored; the server owns identifiers.
#[derive(ToSchema)]
#[schema(as = UserPayload)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserPayloadSchema {
    /// Must contain a non-whitespace character.
    #[schema(example = "Ada Lovelace")]
    username: String,
    #[schema(example = 36)]
    age: f64,
    #[schema(example = json!(["chess"]))]
    hobbies: Vec<String>,
}
