//! Client core for a mobile wallet.
//!
//! Persists in-progress form drafts, manages the cached session, and serves
//! account and reference data from an embedded fixture catalogue with
//! simulated latency. The `client` binary drives all of it from the shell.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
