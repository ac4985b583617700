//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: the process-local key/value store and the user
//!   repository built on top of it.
//!
//! Adapters translate between domain types and their storage representation
//! and hold no request policy of their own.

pub mod persistence;
