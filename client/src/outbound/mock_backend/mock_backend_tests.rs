//! Behaviour of the fixture-backed backend.

use std::sync::Mutex;
use std::time::Duration;

use rstest::{fixture, rstest};

use super::*;

#[derive(Debug, Default)]
struct RecordingSleeper(Mutex<Vec<Duration>>);

impl RecordingSleeper {
    fn recorded(&self) -> Vec<Duration> {
        self.0.lock().expect("sleeper mutex").clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.0.lock().expect("sleeper mutex").push(duration);
    }
}

struct Harness {
    backend: MockBackend,
    sleeper: Arc<RecordingSleeper>,
}

#[fixture]
fn harness() -> Harness {
    let catalogue = FixtureCatalogue::embedded().expect("embedded catalogue");
    let fixtures = FixtureSet::from_catalogue(&catalogue).expect("fixtures");
    let sleeper = Arc::new(RecordingSleeper::default());
    let backend = MockBackend::new(fixtures, SimulatedLatency::default(), sleeper.clone());
    Harness { backend, sleeper }
}

const STANDARD: Duration = Duration::from_millis(1000);
const SHORT: Duration = Duration::from_millis(500);

#[rstest]
#[case("", "")]
#[case("nobody", "x")]
#[case("chidinma.okafor@example.com", "wrong-password")]
#[tokio::test]
async fn login_accepts_any_credentials(
    harness: Harness,
    #[case] email: &str,
    #[case] password: &str,
) {
    let session = harness
        .backend
        .login(&LoginCredentials::new(email, password))
        .await
        .expect("login never rejects");

    assert_eq!(session.user.first_name, "Chidinma");
    assert_eq!(session.token.expose(), "mock-jwt-token-6f1c2a9e");
    assert_eq!(harness.sleeper.recorded(), vec![STANDARD]);
}

#[rstest]
#[tokio::test]
async fn signup_overlays_supplied_fields(harness: Harness) {
    let request = SignupRequest {
        first_name: Some("Tunde".to_owned()),
        email: Some("tunde@example.com".to_owned()),
        ..SignupRequest::default()
    };

    let session = harness.backend.signup(&request).await.expect("signup");

    assert_eq!(session.user.first_name, "Tunde");
    assert_eq!(session.user.email, "tunde@example.com");
    assert_eq!(session.user.last_name, "Okafor");
    assert_eq!(harness.sleeper.recorded(), vec![STANDARD]);
}

#[rstest]
#[tokio::test]
async fn current_user_uses_short_delay(harness: Harness) {
    let user = harness.backend.current_user().await.expect("user");
    assert_eq!(user.account_number.as_str(), "0123456789");
    assert_eq!(harness.sleeper.recorded(), vec![SHORT]);
}

#[rstest]
#[tokio::test]
async fn logout_resolves_without_delay(harness: Harness) {
    harness.backend.logout().await.expect("logout");
    assert!(harness.sleeper.recorded().is_empty());
}

#[rstest]
#[tokio::test]
async fn password_flows_return_canned_messages(harness: Harness) {
    let forgot = harness
        .backend
        .forgot_password("anyone@example.com")
        .await
        .expect("forgot password");
    let password = NewPassword::try_from_parts("longenough", "longenough").expect("password");
    let reset = harness
        .backend
        .reset_password("not-checked", &password)
        .await
        .expect("reset password");

    assert_eq!(forgot.message, FORGOT_PASSWORD_MESSAGE);
    assert_eq!(reset.message, RESET_PASSWORD_MESSAGE);
    assert_eq!(harness.sleeper.recorded(), vec![STANDARD, STANDARD]);
}

#[rstest]
#[case("NG", 10)]
#[case("US", 0)]
#[case("GH", 0)]
#[case("ng", 0)]
#[case("NGA", 0)]
#[case("", 0)]
#[tokio::test]
async fn states_only_exist_for_nigeria(
    harness: Harness,
    #[case] code: &str,
    #[case] expected: usize,
) {
    let states = harness.backend.states(code).await.expect("states");
    assert_eq!(states.len(), expected);
}

#[rstest]
#[tokio::test]
async fn lists_match_fixtures(harness: Harness) {
    let backend = &harness.backend;
    assert_eq!(backend.transactions().await.expect("transactions"), backend.fixtures().transactions);
    assert_eq!(backend.cards().await.expect("cards").len(), 3);
    assert_eq!(backend.banks().await.expect("banks").len(), 10);
    assert_eq!(backend.countries().await.expect("countries").len(), 6);
    assert_eq!(harness.sleeper.recorded().len(), 4);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn embedded_backend_sleeps_on_the_tokio_timer() {
    let backend = MockBackend::embedded().expect("embedded backend");
    let start = tokio::time::Instant::now();

    backend.banks().await.expect("banks");

    assert!(start.elapsed() >= STANDARD);
}
