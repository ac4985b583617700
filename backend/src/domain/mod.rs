//! Domain primitives, errors and ports.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `User`, `UserId`, `Username`, `Age`, `UserDraft`: the user aggregate and
//!   its validated parts.
//! - `TraceId`: request correlation identifier.
//! - `ports`: repository abstraction consumed by inbound adapters.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user::{Age, User, UserDraft, UserId, UserValidationError, Username};

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
