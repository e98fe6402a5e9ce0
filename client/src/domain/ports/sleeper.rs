//! Driven port for simulated latency.

use std::time::Duration;

use async_trait::async_trait;

/// Async sleeping abstraction so latency can be observed in tests.
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use client::domain::ports::Sleeper;
/// use std::sync::Mutex;
/// use std::time::Duration;
///
/// #[derive(Default)]
/// struct CountingSleeper {
///     calls: Mutex<u32>,
/// }
///
/// #[async_trait]
/// impl Sleeper for CountingSleeper {
///     async fn sleep(&self, _duration: Duration) {
///         *self.calls.lock().expect("calls mutex") += 1;
///     }
/// }
/// ```
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend execution for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
