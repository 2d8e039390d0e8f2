//! Cross-cutting application errors
//!
//! Sits one level below the web layer: domain outcomes pass through
//! transparently, and infrastructure failures such as hashing problems
//! are folded into an opaque internal variant.

use blog_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Anything the user should only ever see as a 500
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Status for a domain outcome. Failed logins deliberately render as a
/// plain form error rather than a 401 challenge.
fn domain_status(e: &DomainError) -> u16 {
    if e.is_not_found() {
        return 404;
    }
    if e.is_authorization() {
        return 403;
    }
    if e.is_validation() || e.is_auth_failure() || e.is_conflict() {
        return 400;
    }
    500
}

impl AppError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Internal(_) => 500,
            Self::Domain(e) => domain_status(e),
        }
    }

    /// Stable identifier used in logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

pub type AppResult<T> = Result<T, AppError>;
