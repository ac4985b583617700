//! HTTP inbound adapter exposing the users REST API.
//!
//! Every request lands in [`dispatch::dispatch`], which resolves the route,
//! runs the matching operation from [`users`] and maps any failure through
//! [`error`].

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::middleware::Trace;

pub mod dispatch;
pub mod error;
pub mod schemas;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;
use state::HttpState;

/// Assemble the application: shared state, trace middleware and the
/// catch-all dispatcher.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use user_service::inbound::http::{build_app, state::HttpState};
/// use user_service::outbound::persistence::StoreUserRepository;
///
/// let state = web::Data::new(HttpState::new(Arc::new(StoreUserRepository::in_memory())));
/// let _app = build_app(state);
/// ```
pub fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .wrap(Trace)
        .default_service(web::to(dispatch::dispatch))
}
