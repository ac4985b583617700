//! User resource handlers.
//!
//! ```text
//! GET    /api/users
//! POST   /api/users        {"username":"Ada","age":36,"hobbies":["chess"]}
//! GET    /api/users/{id}
//! PUT    /api/users/{id}   {"username":"Ada","age":37,"hobbies":[]}
//! DELETE /api/users/{id}
//! ```
//!
//! Handlers are invoked by the dispatcher with the already-matched path
//! segment and the raw body. Each returns the success response or an
//! [`Error`] for the dispatcher to render.

use actix_web::HttpResponse;

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_json_body, parse_user_id, validate_user_payload};

fn map_persistence_error(error: UserPersistenceError) -> Error {
    Error::unexpected(error)
}

async fn find_user(state: &HttpState, id: &UserId) -> ApiResult<User> {
    state
        .users
        .get_by_id(id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| Error::user_not_found(id))
}

/// List every stored user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [crate::inbound::http::schemas::UserSchema]),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(state: &HttpState) -> ApiResult<HttpResponse> {
    let users = state.users.get_all().await.map_err(map_persistence_error)?;
    Ok(HttpResponse::Ok().json(users))
}

/// Create a user from a JSON payload; the identifier is always generated.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = crate::inbound::http::schemas::UserPayloadSchema,
    responses(
        (status = 201, description = "User created", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Invalid payload or malformed JSON", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(state: &HttpState, body: &[u8]) -> ApiResult<HttpResponse> {
    let payload = parse_json_body(body)?;
    let draft = validate_user_payload(&payload)?;
    let created = state
        .users
        .create_or_update(draft.into_new_user())
        .await
        .map_err(map_persistence_error)?;
    Ok(HttpResponse::Created().json(created))
}

/// Fetch a single user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Hyphenated UUID of the user")),
    responses(
        (status = 200, description = "User", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Malformed identifier", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
pub async fn get_user(state: &HttpState, raw_id: &str) -> ApiResult<HttpResponse> {
    let id = parse_user_id(raw_id)?;
    let user = find_user(state, &id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Replace an existing user, keeping its identifier.
///
/// The user must already exist; the body is only read once that is known, so
/// a missing user reports 404 even when the payload is also invalid.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Hyphenated UUID of the user")),
    request_body = crate::inbound::http::schemas::UserPayloadSchema,
    responses(
        (status = 200, description = "User replaced", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Malformed identifier, payload or JSON", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
pub async fn update_user(state: &HttpState, raw_id: &str, body: &[u8]) -> ApiResult<HttpResponse> {
    let id = parse_user_id(raw_id)?;
    let existing = find_user(state, &id).await?;
    let payload = parse_json_body(body)?;
    let draft = validate_user_payload(&payload)?;
    let updated = state
        .users
        .create_or_update(draft.into_user(existing.id().clone()))
        .await
        .map_err(map_persistence_error)?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Hyphenated UUID of the user")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed identifier", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub async fn delete_user(state: &HttpState, raw_id: &str) -> ApiResult<HttpResponse> {
    let id = parse_user_id(raw_id)?;
    find_user(state, &id).await?;
    state
        .users
        .delete_by_id(&id)
        .await
        .map_err(map_persistence_error)?;
    Ok(HttpResponse::NoContent().finish())
}
