//! Service layer error type.
//!
//! Wraps domain errors (whose messages are user-facing) and app errors
//! (whose messages are not); the web layer decides which text to render.

use blog_common::AppError;
use blog_core::DomainError;

/// Error from any service operation
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A domain outcome, passed through untouched
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Application error below the domain (hashing and the like)
    #[error(transparent)]
    App(#[from] AppError),

    /// Bad input caught at the service boundary
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Anything else
    #[error("Internal failure: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status this error maps to
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(e) if e.is_authorization() => 403,
            Self::Domain(e) if e.is_validation() || e.is_auth_failure() || e.is_conflict() => 400,
            Self::Domain(_) => 500,
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Stable code for log lines
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// The domain error behind this failure, if any. Sees through the
    /// App wrapper so handlers can branch on domain kinds uniformly.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) | Self::App(AppError::Domain(e)) => Some(e),
            _ => None,
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
