//! Port abstraction for user persistence and its errors.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::{StoreError, define_port_error};

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The underlying store could not serve the request.
        Unavailable { message: String } => "user repository unavailable: {message}",
    }
}

impl From<StoreError> for UserPersistenceError {
    fn from(value: StoreError) -> Self {
        Self::unavailable(value.to_string())
    }
}

/// Typed user persistence. Identifier policy (what counts as "missing") is
/// left to callers: absent users are `Ok(None)`, deleting one is a no-op.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user.
    async fn get_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Store `user` under its own identifier and return the stored value.
    async fn create_or_update(&self, user: User) -> Result<User, UserPersistenceError>;

    /// Remove the user with `id`, if present.
    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserPersistenceError>;
}
