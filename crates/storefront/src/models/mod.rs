//! Server-side models that are not part of the wire contract.

pub mod session;

pub use session::{CurrentUser, keys as session_keys};
