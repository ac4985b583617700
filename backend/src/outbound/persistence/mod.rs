//! Process-local persistence adapters.
//!
//! [`InMemoryStore`] is the only [`crate::domain::ports::Store`] backend; it
//! keeps values in a lock-guarded `HashMap` for the lifetime of the process.
//! [`StoreUserRepository`] binds any store to the user aggregate, keyed by the
//! user's identifier.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use user_service::domain::ports::UserRepository;
//! use user_service::outbound::persistence::StoreUserRepository;
//!
//! let users: Arc<dyn UserRepository> = Arc::new(StoreUserRepository::in_memory());
//! # let _ = users;
//! ```

mod in_memory_store;
mod store_user_repository;

pub use in_memory_store::InMemoryStore;
pub use store_user_repository::StoreUserRepository;
