//! Authentication error types.

use thiserror::Error;

use recircuit_core::types::PhoneError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid phone number format.
    #[error("invalid phone number: {0}")]
    InvalidPhone(#[from] PhoneError),

    /// Invalid credentials (wrong password or unknown phone).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Phone number already registered.
    #[error("phone number already registered")]
    PhoneTaken,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
