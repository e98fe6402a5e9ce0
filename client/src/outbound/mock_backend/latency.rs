//! Simulated network latency.

use std::time::Duration;

/// Delays applied before the mock backend resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    /// Delay for most calls.
    pub standard: Duration,
    /// Delay for the session check run at start-up.
    pub short: Duration,
}

impl SimulatedLatency {
    /// Default delay for most calls.
    pub const STANDARD: Duration = Duration::from_millis(1000);
    /// Default delay for the start-up session check.
    pub const SHORT: Duration = Duration::from_millis(500);

    /// Custom delays.
    pub const fn new(standard: Duration, short: Duration) -> Self {
        Self { standard, short }
    }

    /// Resolve immediately.
    pub const fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(Self::STANDARD, Self::SHORT)
    }
}
