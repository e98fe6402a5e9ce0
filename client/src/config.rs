//! Client configuration loaded via OrthoConfig.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use fixture_data::{CatalogueError, FixtureCatalogue, GenerationError, generate_transaction_history};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::outbound::mock_backend::SimulatedLatency;

const DEFAULT_STORAGE_DIR: &str = ".client-storage";
const DEFAULT_HISTORY_SEED: u64 = 42;

/// Configuration for the client binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CLIENT")]
pub struct ClientSettings {
    /// Delay in milliseconds before most mock calls resolve.
    #[ortho_config(default = 1000)]
    pub latency_ms: u64,
    /// Delay in milliseconds before the session check resolves.
    #[ortho_config(default = 500)]
    pub short_latency_ms: u64,
    /// Directory holding persisted drafts and the session token.
    pub storage_dir: Option<PathBuf>,
    /// Seed for generated transaction history.
    pub history_seed: Option<u64>,
    /// Number of generated transactions appended to the fixtures.
    pub history_count: Option<usize>,
    /// Replacement fixture catalogue.
    pub catalogue_path: Option<PathBuf>,
}

/// Errors raised while preparing fixtures from settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The catalogue could not be loaded.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    /// Extra history could not be generated.
    #[error(transparent)]
    History(#[from] GenerationError),
}

impl ClientSettings {
    /// Mock latency built from the configured delays.
    pub fn latency(&self) -> SimulatedLatency {
        SimulatedLatency::new(
            Duration::from_millis(self.latency_ms),
            Duration::from_millis(self.short_latency_ms),
        )
    }

    /// Storage directory, falling back to `.client-storage`.
    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR))
    }

    /// Seed for generated history, falling back to a fixed value.
    pub fn history_seed(&self) -> u64 {
        self.history_seed.unwrap_or(DEFAULT_HISTORY_SEED)
    }

    /// Load the configured catalogue and append any requested history.
    ///
    /// Generated history ends just before the oldest fixture transaction, or
    /// before `now` when the catalogue has none.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the catalogue cannot be read or the
    /// requested history is too long.
    pub fn catalogue(&self, now: DateTime<Utc>) -> Result<FixtureCatalogue, SettingsError> {
        let mut catalogue = match &self.catalogue_path {
            Some(path) => FixtureCatalogue::from_file(path)?,
            None => FixtureCatalogue::embedded()?,
        };

        let count = self.history_count.unwrap_or(0);
        if count > 0 {
            let anchor = catalogue
                .transactions()
                .iter()
                .map(|transaction| transaction.date)
                .min()
                .unwrap_or(now);
            let history = generate_transaction_history(self.history_seed(), count, anchor)?;
            info!(count, seed = self.history_seed(), "appending generated history");
            catalogue.extend_transactions(history);
        }
        Ok(catalogue)
    }
}
