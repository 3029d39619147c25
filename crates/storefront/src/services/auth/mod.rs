//! Authentication service.
//!
//! Registration and password login over the storage repository. Passwords
//! are hashed with Argon2; the repository only ever sees the hash.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use recircuit_core::User;
use recircuit_core::types::Phone;

use crate::storage::{NewUser, RepositoryError, Storage};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
pub struct AuthService<'a> {
    storage: &'a dyn Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Register a new account with phone and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidPhone` if the phone format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::PhoneTaken` if the phone is already registered.
    pub fn register(
        &self,
        phone: &str,
        password: &str,
        name: Option<String>,
    ) -> Result<User, AuthError> {
        let phone = Phone::parse(phone)?;

        validate_password(password)?;

        let password_hash = hash_password(password)?;

        let user = self
            .storage
            .create_user(NewUser {
                phone,
                password_hash,
                name,
            })
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::PhoneTaken,
            })?;

        Ok(user)
    }

    /// Login with phone and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the phone is unknown or
    /// the password is wrong - indistinguishably, so the endpoint is not
    /// an account-existence oracle.
    pub fn login(&self, phone: &str, password: &str) -> Result<User, AuthError> {
        let phone = Phone::parse(phone).map_err(|_| AuthError::InvalidCredentials)?;

        let (user, password_hash) = self
            .storage
            .credentials_by_phone(&phone)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(user)
    }
}

/// Validate password strength requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password with Argon2 and a fresh random salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AuthError::PasswordHash)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2 hash.
fn verify_password(password: &str, stored_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| AuthError::PasswordHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    #[test]
    fn register_then_login_roundtrip() {
        let storage = MemStorage::new();
        let auth = AuthService::new(&storage);

        let registered = auth
            .register("9876543210", "correct horse", Some("Asha".to_owned()))
            .unwrap();
        assert_eq!(registered.phone.as_str(), "9876543210");
        assert_eq!(registered.name.as_deref(), Some("Asha"));

        let logged_in = auth.login("9876543210", "correct horse").unwrap();
        assert_eq!(logged_in.id, registered.id);
    }

    #[test]
    fn wrong_password_and_unknown_phone_are_indistinguishable() {
        let storage = MemStorage::new();
        let auth = AuthService::new(&storage);
        auth.register("9876543210", "correct horse", None).unwrap();

        let wrong = auth.login("9876543210", "battery staple").unwrap_err();
        assert!(matches!(wrong, AuthError::InvalidCredentials));

        let unknown = auth.login("9000000000", "correct horse").unwrap_err();
        assert!(matches!(unknown, AuthError::InvalidCredentials));
    }

    #[test]
    fn register_rejects_short_password_before_storing() {
        let storage = MemStorage::new();
        let auth = AuthService::new(&storage);

        let err = auth.register("9876543210", "short", None).unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
        assert!(
            storage
                .user_by_phone(&Phone::parse("9876543210").unwrap())
                .is_none()
        );
    }

    #[test]
    fn register_rejects_malformed_phone() {
        let storage = MemStorage::new();
        let auth = AuthService::new(&storage);
        let err = auth.register("not-a-phone", "correct horse", None).unwrap_err();
        assert!(matches!(err, AuthError::InvalidPhone(_)));
    }

    #[test]
    fn duplicate_phone_registration_is_a_conflict() {
        let storage = MemStorage::new();
        let auth = AuthService::new(&storage);
        auth.register("9876543210", "correct horse", None).unwrap();

        let err = auth
            .register("9876543210", "battery staple", None)
            .unwrap_err();
        assert!(matches!(err, AuthError::PhoneTaken));
    }

    #[test]
    fn stored_hash_is_not_the_plaintext() {
        let storage = MemStorage::new();
        let auth = AuthService::new(&storage);
        auth.register("9876543210", "correct horse", None).unwrap();

        let (_, hash) = storage
            .credentials_by_phone(&Phone::parse("9876543210").unwrap())
            .unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("correct horse"));
    }
}
