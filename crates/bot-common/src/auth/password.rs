//! Password hashing and verification utilities
//!
//! Uses Argon2id with a random salt per hash. Hashing is CPU-bound, so the
//! async `PasswordService` pushes it onto the blocking pool.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash (constant-time comparison)
///
/// # Errors
/// Returns an error if the stored hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Burn the same amount of work as a real verification
///
/// Used when the account does not exist, so response timing does not reveal
/// which emails are registered.
pub fn verify_dummy(password: &str) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    let hash = DUMMY_HASH.get_or_init(|| hash_password("dummy-password-for-timing").ok());
    if let Some(hash) = hash {
        let _ = verify_password(password, hash);
    }
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password on the blocking pool
    ///
    /// # Errors
    /// Returns an error if hashing fails or the blocking task panics
    pub async fn hash(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(AppError::internal)?
    }

    /// Verify a password on the blocking pool
    ///
    /// `None` means the account is unknown: a dummy verification runs and the
    /// result is always `InvalidCredentials`.
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub async fn verify_or_error(&self, password: &str, hash: Option<String>) -> Result<(), AppError> {
        let password = password.to_string();
        let matched = tokio::task::spawn_blocking(move || match hash {
            Some(hash) => verify_password(&password, &hash),
            None => {
                verify_dummy(&password);
                Ok(false)
            }
        })
        .await
        .map_err(AppError::internal)??;

        if matched {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}
