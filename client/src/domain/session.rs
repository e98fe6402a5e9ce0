//! Session lifecycle on top of the authentication port.
//!
//! The controller owns the cached session token. It validates what screens
//! submit before any call leaves the client, restores a session on start-up,
//! and wipes every draft on logout so the next user starts clean.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use super::drafts::clear_all_drafts;
use super::ports::{AuthService, KeyValueStore};
use super::{
    AuthSession, DomainError, LoginCredentials, LoginValidationError, NewPassword, ServiceMessage,
    SessionToken, SignupRequest, User, looks_like_email,
};

/// Storage key holding the session token.
pub const SESSION_TOKEN_KEY: &str = "auth_token";

/// Whether a user is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No usable session.
    LoggedOut,
    /// Signed in as this user.
    LoggedIn(User),
}

impl SessionState {
    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(user) => Some(user),
        }
    }
}

fn login_error(error: &LoginValidationError) -> DomainError {
    let field = match error {
        LoginValidationError::EmptyEmail | LoginValidationError::MalformedEmail => "email",
        LoginValidationError::EmptyPassword => "password",
    };
    DomainError::invalid_request(error.to_string()).with_details(json!({ "field": field }))
}

/// Coordinates authentication calls with the locally cached token.
pub struct SessionController<A, S>
where
    A: AuthService + ?Sized,
    S: KeyValueStore + ?Sized,
{
    auth: Arc<A>,
    storage: Arc<S>,
}

impl<A, S> SessionController<A, S>
where
    A: AuthService + ?Sized,
    S: KeyValueStore + ?Sized,
{
    /// Create a controller over the given service and storage.
    pub fn new(auth: Arc<A>, storage: Arc<S>) -> Self {
        Self { auth, storage }
    }

    /// Validate credentials, sign in, and cache the token.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, DomainError> {
        credentials.validate().map_err(|err| login_error(&err))?;
        let session = self.auth.login(credentials).await?;
        self.store_token(&session.token);
        info!(user_id = %session.user.id, "signed in");
        Ok(session)
    }

    /// Register, sign in, and cache the token.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthSession, DomainError> {
        let malformed = request
            .email
            .as_deref()
            .is_some_and(|email| !looks_like_email(email.trim()));
        if malformed {
            return Err(
                DomainError::invalid_request("email must be a valid address")
                    .with_details(json!({ "field": "email" })),
            );
        }
        let session = self.auth.signup(request).await?;
        self.store_token(&session.token);
        info!(user_id = %session.user.id, "signed up");
        Ok(session)
    }

    /// Resume a cached session.
    ///
    /// Without a cached token the service is not called. Any service failure
    /// discards the token and reports logged out.
    pub async fn restore(&self) -> SessionState {
        if self.stored_token().is_none() {
            debug!("no cached session");
            return SessionState::LoggedOut;
        }

        match self.auth.current_user().await {
            Ok(user) => {
                debug!(user_id = %user.id, "restored session");
                SessionState::LoggedIn(user)
            }
            Err(error) => {
                warn!(code = ?error.code(), %error, "session restore failed; signing out");
                self.forget_token();
                SessionState::LoggedOut
            }
        }
    }

    /// Sign out, drop the cached token, and delete every draft.
    ///
    /// Local state is cleared even when the service call fails; the service
    /// outcome is still returned.
    pub async fn logout(&self) -> Result<(), DomainError> {
        let outcome = self.auth.logout().await;
        self.forget_token();
        let removed = clear_all_drafts(self.storage.as_ref());
        info!(drafts_removed = removed, "signed out");
        outcome
    }

    /// Request a password reset email.
    pub async fn forgot_password(&self, email: &str) -> Result<ServiceMessage, DomainError> {
        let email = email.trim();
        if !looks_like_email(email) {
            return Err(
                DomainError::invalid_request("email must be a valid address")
                    .with_details(json!({ "field": "email" })),
            );
        }
        self.auth.forgot_password(email).await
    }

    /// Validate the new password against its confirmation, then reset it.
    pub async fn reset_password(
        &self,
        reset_token: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<ServiceMessage, DomainError> {
        let new_password = NewPassword::try_from_parts(password, confirmation).map_err(|err| {
            DomainError::invalid_request(err.to_string()).with_details(json!({ "field": "password" }))
        })?;
        self.auth.reset_password(reset_token, &new_password).await
    }

    /// The cached token, if a readable one exists.
    pub fn stored_token(&self) -> Option<SessionToken> {
        match self.storage.get(SESSION_TOKEN_KEY) {
            Ok(raw) => raw.and_then(|value| SessionToken::new(value).ok()),
            Err(error) => {
                warn!(%error, "failed to read session token");
                None
            }
        }
    }

    fn store_token(&self, token: &SessionToken) {
        if let Err(error) = self.storage.set(SESSION_TOKEN_KEY, token.expose()) {
            warn!(%error, "failed to cache session token");
        }
    }

    fn forget_token(&self) {
        if let Err(error) = self.storage.remove(SESSION_TOKEN_KEY) {
            warn!(%error, "failed to delete session token");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
