//! Server construction and wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use tracing::info;

use user_service::inbound::http::build_app;
use user_service::inbound::http::state::HttpState;
use user_service::outbound::persistence::StoreUserRepository;

/// Construct an Actix HTTP server backed by a fresh in-memory user store.
///
/// All workers share the same store, so every request sees the same users.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(Arc::new(StoreUserRepository::in_memory())));
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "user service listening");
    Ok(server)
}
