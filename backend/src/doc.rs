//! OpenAPI documentation for the user API.
//!
//! Registers the five user operations from [`crate::inbound::http::users`] and
//! the schema wrappers from [`crate::inbound::http::schemas`]. Export it with
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, UserPayloadSchema, UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "CRUD access to an in-memory collection of users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(UserSchema, UserPayloadSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "Operations on users")
    )
)]
pub struct ApiDoc;
