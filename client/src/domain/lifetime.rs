//! Ties in-flight service calls to the screen that started them.
//!
//! A screen holds a [`ScreenLifetime`] and hands [`LifetimeHandle`]s to the
//! calls it starts. Once the screen is dismissed, guarded calls resolve to
//! `None` and their results are never applied. The `client` binary treats
//! each command as a screen and closes it on Ctrl-C.

use std::future::Future;

use tokio::sync::watch;

use super::DomainError;

/// Liveness signal owned by a screen. Dropping it closes the screen.
#[derive(Debug)]
pub struct ScreenLifetime {
    alive: watch::Sender<bool>,
}

impl ScreenLifetime {
    /// Open a new lifetime.
    pub fn new() -> Self {
        let (alive, _initial) = watch::channel(true);
        Self { alive }
    }

    /// Handle for guarding calls made on behalf of this screen.
    pub fn handle(&self) -> LifetimeHandle {
        LifetimeHandle {
            alive: self.alive.subscribe(),
        }
    }

    /// Mark the screen as dismissed.
    pub fn close(&self) {
        self.alive.send_replace(false);
    }

    /// Whether the screen is still shown.
    pub fn is_open(&self) -> bool {
        *self.alive.borrow()
    }
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScreenLifetime {
    fn drop(&mut self) {
        self.alive.send_replace(false);
    }
}

/// Observer side of a [`ScreenLifetime`].
#[derive(Debug, Clone)]
pub struct LifetimeHandle {
    alive: watch::Receiver<bool>,
}

impl LifetimeHandle {
    /// Whether the owning screen is still shown.
    pub fn is_alive(&self) -> bool {
        *self.alive.borrow()
    }

    /// Resolve once the owning screen closes.
    pub async fn closed(&mut self) {
        // An error means the sender is gone, which also means closed.
        drop(self.alive.wait_for(|alive| !*alive).await);
    }

    /// Run `future` unless the screen closes first.
    ///
    /// Returns `None` when the screen closed before or while the future ran.
    pub async fn guard<F>(&self, future: F) -> Option<F::Output>
    where
        F: Future,
    {
        if !self.is_alive() {
            return None;
        }
        let mut watcher = self.clone();
        tokio::select! {
            biased;
            () = watcher.closed() => None,
            output = future => self.is_alive().then_some(output),
        }
    }
}

/// Progress of a single service call as a screen renders it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    /// Not started.
    #[default]
    Idle,
    /// Waiting on the service.
    Loading,
    /// Resolved with a value.
    Succeeded(T),
    /// Resolved with an error.
    Failed(DomainError),
}

impl<T> RequestState<T> {
    /// Whether a call is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Mark loading, await `request` under `handle`, and record the outcome.
    ///
    /// Returns `false`, leaving the state at `Loading`, when the screen
    /// closed before the call resolved.
    pub async fn run<Fut>(&mut self, handle: &LifetimeHandle, request: Fut) -> bool
    where
        Fut: Future<Output = Result<T, DomainError>>,
    {
        *self = Self::Loading;
        match handle.guard(request).await {
            Some(result) => {
                *self = result.into();
                true
            }
            None => false,
        }
    }
}

impl<T> From<Result<T, DomainError>> for RequestState<T> {
    fn from(value: Result<T, DomainError>) -> Self {
        match value {
            Ok(value) => Self::Succeeded(value),
            Err(error) => Self::Failed(error),
        }
    }
}
