//! Errors raised by the domain layer
//!
//! Display strings double as the user-facing messages rendered in forms,
//! so they stay short and never carry internals. Infrastructure variants
//! are the exception: their Display is for logs only and the web layer
//! substitutes generic text.

use thiserror::Error;

use crate::value_objects::Snowflake;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("post not found")]
    PostNotFound(Snowflake),

    /// A form field was left empty
    #[error("all fields required")]
    MissingFields,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("password too short")]
    PasswordTooShort,

    #[error("credential and password required")]
    MissingCredentials,

    #[error("content required")]
    MissingContent,

    /// Covers every login failure, wrong password included
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Someone other than the author tried to edit or delete a post
    #[error("not the post author")]
    NotPostAuthor,

    /// Username or email already registered
    #[error("credential already in use")]
    CredentialTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Coarse classification backing the `is_*` predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    NotFound,
    Validation,
    AuthFailure,
    Authorization,
    Conflict,
    Infrastructure,
}

impl DomainError {
    fn kind(&self) -> Kind {
        match self {
            Self::PostNotFound(_) => Kind::NotFound,
            Self::MissingFields
            | Self::InvalidEmail
            | Self::PasswordTooShort
            | Self::MissingCredentials
            | Self::MissingContent => Kind::Validation,
            Self::InvalidCredentials => Kind::AuthFailure,
            Self::NotPostAuthor => Kind::Authorization,
            Self::CredentialTaken => Kind::Conflict,
            Self::DatabaseError(_) => Kind::Infrastructure,
        }
    }

    /// Stable identifier used in logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::MissingContent => "MISSING_CONTENT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotPostAuthor => "NOT_POST_AUTHOR",
            Self::CredentialTaken => "CREDENTIAL_TAKEN",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Kind::NotFound
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == Kind::Validation
    }

    pub fn is_auth_failure(&self) -> bool {
        self.kind() == Kind::AuthFailure
    }

    /// Ownership failures, distinct from failed logins
    pub fn is_authorization(&self) -> bool {
        self.kind() == Kind::Authorization
    }

    pub fn is_conflict(&self) -> bool {
        self.kind() == Kind::Conflict
    }
}
