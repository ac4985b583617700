//! Domain ports for the hexagonal boundary.
//!
//! [`Store`] is the generic key/value persistence seam; [`UserRepository`] is
//! the typed user facade that inbound adapters depend on.

mod macros;
pub(crate) use macros::define_port_error;

mod store;
mod user_repository;

pub use store::{Store, StoreError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
