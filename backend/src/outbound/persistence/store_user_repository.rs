//! [`UserRepository`] adapter over a generic key/value [`Store`].

use async_trait::async_trait;

use crate::domain::ports::{Store, UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

use super::InMemoryStore;

/// User repository keyed by the textual user identifier.
#[derive(Debug, Default)]
pub struct StoreUserRepository<S> {
    store: S,
}

impl<S> StoreUserRepository<S> {
    /// Bind a store to the user aggregate.
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl StoreUserRepository<InMemoryStore<User>> {
    /// Repository over a fresh, empty process-local store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }
}

#[async_trait]
impl<S> UserRepository for StoreUserRepository<S>
where
    S: Store<User>,
{
    async fn get_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.store.get_all().await?)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.store.get(id.as_ref()).await?)
    }

    async fn create_or_update(&self, user: User) -> Result<User, UserPersistenceError> {
        self.store.put(user.id().as_ref(), user.clone()).await?;
        Ok(user)
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserPersistenceError> {
        Ok(self.store.delete(id.as_ref()).await?)
    }
}
