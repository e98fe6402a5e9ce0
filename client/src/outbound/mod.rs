//! Outbound adapters implementing domain ports.
//!
//! - **storage**: key-value stores backing drafts and the session token
//! - **mock_backend**: fixture-backed stand-in for the wallet service

pub mod mock_backend;
pub mod storage;
