//! In-process stand-in for the wallet backend.
//!
//! Every call resolves with fixture data after a fixed delay, mirroring the
//! latency screens see against a real service. Nothing is validated and
//! nothing fails: credentials are accepted as given and password flows return
//! canned confirmations. Logout is the only call that resolves immediately.

mod latency;
mod mapping;

use std::sync::Arc;

use async_trait::async_trait;
use fixture_data::FixtureCatalogue;
use tracing::debug;

pub use latency::SimulatedLatency;
pub use mapping::{FixtureMappingError, FixtureSet};

use crate::domain::ports::{AccountQuery, AuthService, ReferenceDataQuery, Sleeper, TokioSleeper};
use crate::domain::{
    AuthSession, Bank, Card, Country, DomainError, LoginCredentials, NewPassword,
    ServiceMessage, SignupRequest, State, Transaction, User,
};

/// Confirmation returned by [`AuthService::forgot_password`].
pub const FORGOT_PASSWORD_MESSAGE: &str = "Password reset link sent to your email";
/// Confirmation returned by [`AuthService::reset_password`].
pub const RESET_PASSWORD_MESSAGE: &str = "Password reset successful";

/// Fixture-backed implementation of every driving port.
pub struct MockBackend {
    fixtures: FixtureSet,
    latency: SimulatedLatency,
    sleeper: Arc<dyn Sleeper>,
}

impl MockBackend {
    /// Serve `fixtures` with the given latency.
    pub fn new(fixtures: FixtureSet, latency: SimulatedLatency, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            fixtures,
            latency,
            sleeper,
        }
    }

    /// Serve the embedded catalogue with default latency on the Tokio timer.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] with an internal code if the embedded catalogue is
    /// malformed.
    pub fn embedded() -> Result<Self, DomainError> {
        let catalogue = FixtureCatalogue::embedded()
            .map_err(|err| DomainError::internal(format!("invalid embedded catalogue: {err}")))?;
        let fixtures = FixtureSet::from_catalogue(&catalogue)
            .map_err(|err| DomainError::internal(err.to_string()))?;
        Ok(Self::new(
            fixtures,
            SimulatedLatency::default(),
            Arc::new(TokioSleeper),
        ))
    }

    /// The fixtures being served.
    pub fn fixtures(&self) -> &FixtureSet {
        &self.fixtures
    }

    async fn standard_delay(&self) {
        self.sleeper.sleep(self.latency.standard).await;
    }

    async fn short_delay(&self) {
        self.sleeper.sleep(self.latency.short).await;
    }
}

impl std::fmt::Debug for MockBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockBackend")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthService for MockBackend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, DomainError> {
        self.standard_delay().await;
        debug!(email = credentials.email(), "mock login accepted");
        Ok(self.fixtures.session.clone())
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthSession, DomainError> {
        self.standard_delay().await;
        let mut session = self.fixtures.session.clone();
        request.apply_to(&mut session.user);
        debug!(email = %session.user.email, "mock signup accepted");
        Ok(session)
    }

    async fn current_user(&self) -> Result<User, DomainError> {
        self.short_delay().await;
        Ok(self.fixtures.session.user.clone())
    }

    async fn logout(&self) -> Result<(), DomainError> {
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<ServiceMessage, DomainError> {
        self.standard_delay().await;
        debug!(%email, "mock password reset requested");
        Ok(ServiceMessage::new(FORGOT_PASSWORD_MESSAGE))
    }

    async fn reset_password(
        &self,
        _reset_token: &str,
        _new_password: &NewPassword,
    ) -> Result<ServiceMessage, DomainError> {
        self.standard_delay().await;
        Ok(ServiceMessage::new(RESET_PASSWORD_MESSAGE))
    }
}

#[async_trait]
impl AccountQuery for MockBackend {
    async fn transactions(&self) -> Result<Vec<Transaction>, DomainError> {
        self.standard_delay().await;
        Ok(self.fixtures.transactions.clone())
    }

    async fn cards(&self) -> Result<Vec<Card>, DomainError> {
        self.standard_delay().await;
        Ok(self.fixtures.cards.clone())
    }
}

#[async_trait]
impl ReferenceDataQuery for MockBackend {
    async fn banks(&self) -> Result<Vec<Bank>, DomainError> {
        self.standard_delay().await;
        Ok(self.fixtures.banks.clone())
    }

    async fn countries(&self) -> Result<Vec<Country>, DomainError> {
        self.standard_delay().await;
        Ok(self.fixtures.countries.clone())
    }

    async fn states(&self, country_code: &str) -> Result<Vec<State>, DomainError> {
        self.standard_delay().await;
        Ok(self.fixtures.states_for(country_code))
    }
}

#[cfg(test)]
#[path = "mock_backend_tests.rs"]
mod tests;
