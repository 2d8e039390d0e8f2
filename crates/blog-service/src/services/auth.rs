//! Account and session workflows
//!
//! Registration, credential login, logout, and resolving a session cookie
//! back to its user.

use blog_common::auth::{hash_password, verify_password};
use blog_core::entities::User;
use blog_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Maps a session-store failure onto the opaque internal error variant.
fn store_error(e: impl std::fmt::Display) -> ServiceError {
    ServiceError::internal(e.to_string())
}

/// Authentication workflows, borrowed from a [`ServiceContext`]
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account from a registration form
    ///
    /// The new user is not logged in; the caller redirects to the login
    /// form afterwards.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<User> {
        request.validate()?;

        // An up-front lookup gives the form a friendly message. Racing
        // registrations are still stopped by the unique indexes.
        let taken = self
            .ctx
            .user_repo()
            .find_by_username_or_email(&request.username, &request.email)
            .await?
            .is_some();
        if taken {
            warn!("Registration rejected: username or email already in use");
            return Err(DomainError::CredentialTaken.into());
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(self.ctx.generate_id(), request.username, request.email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Exchange a username-or-email plus password for a new session ID
    ///
    /// All rejection paths surface the same invalid-credentials error, so a
    /// response never says whether the account exists.
    #[instrument(skip(self, request), fields(credential = %request.credential))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<String> {
        request.validate()?;

        // One input, matched against either column
        let Some(user) = self
            .ctx
            .user_repo()
            .find_by_username_or_email(&request.credential, &request.credential)
            .await?
        else {
            warn!("Login rejected: no matching user");
            return Err(DomainError::InvalidCredentials.into());
        };

        let Some(password_hash) = self.ctx.user_repo().get_password_hash(user.id).await? else {
            warn!(user_id = %user.id, "Login rejected: password hash missing");
            return Err(DomainError::InvalidCredentials.into());
        };

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(DomainError::InvalidCredentials.into());
        }

        let session_id = self
            .ctx
            .session_store()
            .create(user.id)
            .await
            .map_err(store_error)?;

        info!(user_id = %user.id, "User logged in");
        Ok(session_id)
    }

    /// Drop the server-side session named by the cookie
    ///
    /// Unknown and already-expired sessions destroy cleanly.
    #[instrument(skip_all)]
    pub async fn logout(&self, session_id: &str) -> ServiceResult<()> {
        let removed = self
            .ctx
            .session_store()
            .destroy(session_id)
            .await
            .map_err(store_error)?;

        if removed {
            info!("Session destroyed");
        }
        Ok(())
    }

    /// Look up which user a live session belongs to
    #[instrument(skip_all)]
    pub async fn session_user(&self, session_id: &str) -> ServiceResult<Option<Snowflake>> {
        let session = self
            .ctx
            .session_store()
            .get(session_id)
            .await
            .map_err(store_error)?;

        Ok(session.map(|s| s.user_id))
    }
}
