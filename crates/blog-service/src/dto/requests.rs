//! Request DTOs for form submissions
//!
//! Fields use `#[serde(default)]` so a missing form field deserializes to an
//! empty string instead of rejecting the body; `validate` then reports it
//! with the same message as a field submitted blank.
//!
//! Validation is sequential on purpose. Each form reports exactly one
//! message, and the first failed check in declaration order wins.

use blog_core::DomainError;
use validator::ValidateEmail;

use serde::Deserialize;

/// Minimum accepted password length, in characters
const MIN_PASSWORD_CHARS: usize = 6;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration form
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    /// Check the form in order: presence, email shape, password length
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.username.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(DomainError::MissingFields);
        }
        if !self.email.validate_email() {
            return Err(DomainError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(DomainError::PasswordTooShort);
        }
        Ok(())
    }
}

/// Login form. The credential matches either a username or an email.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub credential: String,

    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// Check that both fields were submitted
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.credential.is_empty() || self.password.is_empty() {
            return Err(DomainError::MissingCredentials);
        }
        Ok(())
    }
}

// ============================================================================
// Post Requests
// ============================================================================

/// Post content form, shared by the create and edit pages
#[derive(Debug, Clone, Deserialize)]
pub struct PostContentRequest {
    #[serde(default)]
    pub content: String,
}

impl PostContentRequest {
    /// Reject blank content, including whitespace-only submissions
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.content.trim().is_empty() {
            return Err(DomainError::MissingContent);
        }
        Ok(())
    }
}
