//! Generic key/value persistence port.
//!
//! A store maps string keys to owned values. Absence is a normal outcome
//! (`Ok(None)`, or a no-op delete), never an error; the only failures are
//! those of the backing mechanism itself.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Failures raised by a store backend.
    pub enum StoreError {
        /// The backing map was left poisoned by a panicking writer.
        Poisoned { message: String } => "store lock poisoned: {message}",
    }
}

/// Create-or-overwrite key/value persistence.
///
/// Implementations must tolerate concurrent callers; writes to one key are
/// last-write-wins and `get_all` returns a point-in-time snapshot.
#[async_trait]
pub trait Store<V>: Send + Sync
where
    V: Send + 'static,
{
    /// Insert `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: V) -> Result<(), StoreError>;

    /// Fetch a copy of the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<V>, StoreError>;

    /// Snapshot every stored value, in no particular order.
    async fn get_all(&self) -> Result<Vec<V>, StoreError>;

    /// Remove `key`; removing an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
