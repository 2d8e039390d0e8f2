//! Argon2id password hashing.
//!
//! Length rules live with the rest of the form validation; this module
//! only turns plaintext into PHC strings and back-checks them.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a plaintext password with a fresh random salt
///
/// # Errors
/// Fails only when the hasher itself reports an error
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("argon2 hashing failed: {e}")))
}

/// Check a plaintext password against a stored PHC string.
///
/// A wrong password is `Ok(false)`; only an unparseable stored hash is
/// an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("stored hash is not a PHC string: {e}")))?;

    let verdict = Argon2::default().verify_password(password.as_bytes(), &parsed);
    Ok(verdict.is_ok())
}
