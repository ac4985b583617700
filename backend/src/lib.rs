//! In-memory user management service.
//!
//! Layout follows ports and adapters: [`domain`] holds the user model, error
//! type and ports; [`inbound::http`] dispatches requests; [`outbound`] holds
//! the storage adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
