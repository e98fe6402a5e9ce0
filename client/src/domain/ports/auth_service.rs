//! Driving port for session use-cases.
//!
//! Screens call this port to sign users in and out without knowing which
//! backend answers. The mock backend implements it with fixture data; tests
//! substitute the generated mock.

use async_trait::async_trait;

use crate::domain::{
    AuthSession, DomainError, LoginCredentials, NewPassword, ServiceMessage, SignupRequest, User,
};

/// Domain use-case port for authentication and account recovery.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a session.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, DomainError>;

    /// Register a new account and sign it in.
    async fn signup(&self, request: &SignupRequest) -> Result<AuthSession, DomainError>;

    /// Return the user that owns the current session.
    async fn current_user(&self) -> Result<User, DomainError>;

    /// End the current session.
    async fn logout(&self) -> Result<(), DomainError>;

    /// Start password recovery for `email`.
    async fn forgot_password(&self, email: &str) -> Result<ServiceMessage, DomainError>;

    /// Complete password recovery using the emailed reset token.
    async fn reset_password(
        &self,
        reset_token: &str,
        new_password: &NewPassword,
    ) -> Result<ServiceMessage, DomainError>;
}
