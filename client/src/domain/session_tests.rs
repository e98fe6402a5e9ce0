//! Regression coverage for the session controller.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockAuthService;
use crate::domain::{AccountNumber, ErrorCode, Money, Tier, UserId};
use crate::outbound::storage::InMemoryKeyValueStore;

fn user() -> User {
    User {
        id: UserId::new("9b2f6c3e-4d1a-4f8e-9a7b-2c5d8e1f0a34").expect("user id"),
        first_name: "Chidinma".to_owned(),
        last_name: "Okafor".to_owned(),
        email: "chidinma.okafor@example.com".to_owned(),
        phone: "+2348031234567".to_owned(),
        balance: Money::from_naira(250_000),
        account_number: AccountNumber::new("0123456789").expect("account number"),
        tier: Tier::Tier2,
        is_verified: true,
    }
}

fn session() -> AuthSession {
    AuthSession {
        user: user(),
        token: SessionToken::new("token-abc").expect("token"),
    }
}

#[fixture]
fn storage() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::default())
}

fn controller(
    auth: MockAuthService,
    storage: &Arc<InMemoryKeyValueStore>,
) -> SessionController<MockAuthService, InMemoryKeyValueStore> {
    SessionController::new(Arc::new(auth), Arc::clone(storage))
}

#[rstest]
#[case("", "secret", "email")]
#[case("not-an-email", "secret", "email")]
#[case("ada@example.com", "", "password")]
#[tokio::test]
async fn login_validates_before_calling_service(
    storage: Arc<InMemoryKeyValueStore>,
    #[case] email: &str,
    #[case] password: &str,
    #[case] field: &str,
) {
    let mut auth = MockAuthService::new();
    auth.expect_login().never();

    let err = controller(auth, &storage)
        .login(&LoginCredentials::new(email, password))
        .await
        .expect_err("validation failure");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.details().and_then(|d| d.get("field")), Some(&json!(field)));
    assert_eq!(storage.get(SESSION_TOKEN_KEY).expect("read"), None);
}

#[rstest]
#[tokio::test]
async fn login_caches_token(storage: Arc<InMemoryKeyValueStore>) {
    let mut auth = MockAuthService::new();
    auth.expect_login()
        .withf(|creds| creds.email() == "ada@example.com")
        .times(1)
        .returning(|_| Ok(session()));

    let result = controller(auth, &storage)
        .login(&LoginCredentials::new(" ada@example.com ", "pw"))
        .await
        .expect("login");

    assert_eq!(result.user, user());
    assert_eq!(
        storage.get(SESSION_TOKEN_KEY).expect("read").as_deref(),
        Some("token-abc")
    );
}

#[rstest]
#[tokio::test]
async fn restore_without_token_skips_service(storage: Arc<InMemoryKeyValueStore>) {
    let mut auth = MockAuthService::new();
    auth.expect_current_user().never();

    let state = controller(auth, &storage).restore().await;
    assert_eq!(state, SessionState::LoggedOut);
}

#[rstest]
#[tokio::test]
async fn restore_with_token_returns_user(storage: Arc<InMemoryKeyValueStore>) {
    storage.set(SESSION_TOKEN_KEY, "token-abc").expect("seed");
    let mut auth = MockAuthService::new();
    auth.expect_current_user().times(1).returning(|| Ok(user()));

    let state = controller(auth, &storage).restore().await;
    assert_eq!(state.user(), Some(&user()));
}

#[rstest]
#[tokio::test]
async fn restore_failure_signs_out_and_drops_token(storage: Arc<InMemoryKeyValueStore>) {
    storage.set(SESSION_TOKEN_KEY, "stale").expect("seed");
    let mut auth = MockAuthService::new();
    auth.expect_current_user()
        .times(1)
        .returning(|| Err(DomainError::unauthorized("session expired")));

    let state = controller(auth, &storage).restore().await;

    assert_eq!(state, SessionState::LoggedOut);
    assert_eq!(storage.get(SESSION_TOKEN_KEY).expect("read"), None);
}

#[rstest]
#[tokio::test]
async fn logout_drops_token_and_sweeps_drafts(storage: Arc<InMemoryKeyValueStore>) {
    storage.set(SESSION_TOKEN_KEY, "token-abc").expect("seed");
    storage.set("form_transfer", "{}").expect("seed");
    storage.set("form_hotel-booking", "{}").expect("seed");
    storage.set("theme", "dark").expect("seed");
    let mut auth = MockAuthService::new();
    auth.expect_logout().times(1).returning(|| Ok(()));

    controller(auth, &storage).logout().await.expect("logout");

    assert_eq!(storage.keys().expect("keys"), vec!["theme".to_owned()]);
}

#[rstest]
#[tokio::test]
async fn logout_clears_local_state_when_service_fails(storage: Arc<InMemoryKeyValueStore>) {
    storage.set(SESSION_TOKEN_KEY, "token-abc").expect("seed");
    storage.set("form_transfer", "{}").expect("seed");
    let mut auth = MockAuthService::new();
    auth.expect_logout()
        .returning(|| Err(DomainError::service_unavailable("offline")));

    let err = controller(auth, &storage)
        .logout()
        .await
        .expect_err("service failure surfaces");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    assert!(storage.keys().expect("keys").is_empty());
}

#[rstest]
#[case("short", "short")]
#[case("longenough", "longenough!")]
#[tokio::test]
async fn reset_password_validates_locally(
    storage: Arc<InMemoryKeyValueStore>,
    #[case] password: &str,
    #[case] confirmation: &str,
) {
    let mut auth = MockAuthService::new();
    auth.expect_reset_password().never();

    let err = controller(auth, &storage)
        .reset_password("reset-123", password, confirmation)
        .await
        .expect_err("validation failure");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn reset_password_forwards_valid_password(storage: Arc<InMemoryKeyValueStore>) {
    let mut auth = MockAuthService::new();
    auth.expect_reset_password()
        .withf(|token, password| token == "reset-123" && password.expose() == "longenough")
        .times(1)
        .returning(|_, _| Ok(ServiceMessage::new("Password reset successful")));

    let message = controller(auth, &storage)
        .reset_password("reset-123", "longenough", "longenough")
        .await
        .expect("reset");
    assert_eq!(message.message, "Password reset successful");
}

#[rstest]
#[tokio::test]
async fn forgot_password_rejects_malformed_email(storage: Arc<InMemoryKeyValueStore>) {
    let mut auth = MockAuthService::new();
    auth.expect_forgot_password().never();

    let err = controller(auth, &storage)
        .forgot_password("ada")
        .await
        .expect_err("malformed email");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn signup_caches_token(storage: Arc<InMemoryKeyValueStore>) {
    let mut auth = MockAuthService::new();
    auth.expect_signup().times(1).returning(|_| Ok(session()));

    let request = SignupRequest {
        email: Some("new@example.com".to_owned()),
        ..SignupRequest::default()
    };
    controller(auth, &storage).signup(&request).await.expect("signup");

    assert!(storage.get(SESSION_TOKEN_KEY).expect("read").is_some());
}
