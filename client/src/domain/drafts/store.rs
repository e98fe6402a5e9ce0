//! Storage-backed draft container.
//!
//! A [`FormDraftStore`] owns one form's in-progress state. Reads tolerate any
//! stored garbage by falling back to the caller's defaults; writes are
//! best-effort. Neither path surfaces storage failures to the screen, which
//! only ever sees a usable form.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use super::{DraftForm, DraftKey, FormName};
use crate::domain::ports::KeyValueStore;

/// A form's fields plus the time they were last edited.
///
/// Serialises as the form's own fields with an extra `lastUpdated` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft<F> {
    /// Current field values.
    #[serde(flatten)]
    pub fields: F,
    /// Set on every update; absent for untouched defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl<F> Draft<F> {
    fn pristine(fields: F) -> Self {
        Self {
            fields,
            last_updated: None,
        }
    }
}

#[derive(Debug, Error)]
enum DraftLoadError {
    #[error("stored draft is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("stored draft is not a JSON object")]
    NotAnObject,
    #[error("stored draft does not match the form shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Typed draft persistence for a single form.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use client::domain::drafts::{FormDraftStore, FormName, TransferForm, TransferPatch};
/// use client::outbound::storage::InMemoryKeyValueStore;
/// use mockable::DefaultClock;
///
/// let storage = Arc::new(InMemoryKeyValueStore::default());
/// let name = FormName::new("transfer").expect("valid name");
/// let mut store = FormDraftStore::initialize(
///     name,
///     TransferForm::default(),
///     Arc::clone(&storage),
///     Arc::new(DefaultClock),
/// );
/// store.update(TransferPatch {
///     amount: Some("5000".to_owned()),
///     ..TransferPatch::default()
/// });
/// assert_eq!(store.fields().amount, "5000");
/// ```
pub struct FormDraftStore<F, S>
where
    F: DraftForm,
    S: KeyValueStore + ?Sized,
{
    key: DraftKey,
    initial: F,
    state: Draft<F>,
    storage: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<F, S> FormDraftStore<F, S>
where
    F: DraftForm,
    S: KeyValueStore + ?Sized,
{
    /// Load the stored draft for `name`, merged over `initial`.
    ///
    /// Missing or unreadable drafts yield `initial` unchanged.
    pub fn initialize(name: FormName, initial: F, storage: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        let key = name.draft_key();
        let state = load(&key, &initial, storage.as_ref());
        Self {
            key,
            initial,
            state,
            storage,
            clock,
        }
    }

    /// Current draft including its timestamp.
    pub fn state(&self) -> &Draft<F> {
        &self.state
    }

    /// Current field values.
    pub fn fields(&self) -> &F {
        &self.state.fields
    }

    /// Storage key this draft lives under.
    pub fn key(&self) -> &DraftKey {
        &self.key
    }

    /// Apply `patch`, stamp the edit time, and persist the result.
    pub fn update(&mut self, patch: F::Patch) -> &Draft<F> {
        self.state.fields.merge(patch);
        self.state.last_updated = Some(self.clock.utc());
        self.persist();
        &self.state
    }

    /// Reset to the initial fields and delete the stored draft.
    pub fn clear(&mut self) {
        self.state = Draft::pristine(self.initial.clone());
        if let Err(error) = self.storage.remove(self.key.as_str()) {
            warn!(key = %self.key, %error, "failed to delete draft");
        }
    }

    fn persist(&self) {
        let fields_empty = match serde_json::to_value(&self.state.fields) {
            Ok(Value::Object(map)) => map.is_empty(),
            Ok(_) => false,
            Err(error) => {
                warn!(key = %self.key, %error, "failed to serialise draft");
                return;
            }
        };

        if fields_empty {
            if let Err(error) = self.storage.remove(self.key.as_str()) {
                warn!(key = %self.key, %error, "failed to delete empty draft");
            }
            return;
        }

        let encoded = match serde_json::to_string(&self.state) {
            Ok(encoded) => encoded,
            Err(error) => {
                warn!(key = %self.key, %error, "failed to serialise draft");
                return;
            }
        };
        if let Err(error) = self.storage.set(self.key.as_str(), &encoded) {
            warn!(key = %self.key, %error, "failed to persist draft");
        }
    }
}

impl<F, S> std::fmt::Debug for FormDraftStore<F, S>
where
    F: DraftForm + std::fmt::Debug,
    S: KeyValueStore + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormDraftStore")
            .field("key", &self.key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn load<F, S>(key: &DraftKey, initial: &F, storage: &S) -> Draft<F>
where
    F: DraftForm,
    S: KeyValueStore + ?Sized,
{
    let raw = match storage.get(key.as_str()) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Draft::pristine(initial.clone()),
        Err(error) => {
            warn!(%key, %error, "failed to read draft; using defaults");
            return Draft::pristine(initial.clone());
        }
    };

    match merge_stored(&raw, initial) {
        Ok(draft) => {
            debug!(%key, "restored draft");
            draft
        }
        Err(error) => {
            warn!(%key, %error, "discarding unreadable draft");
            Draft::pristine(initial.clone())
        }
    }
}

/// Shallow-merge the stored object's keys over the serialised defaults,
/// then read the result back as a typed draft.
fn merge_stored<F: DraftForm>(raw: &str, initial: &F) -> Result<Draft<F>, DraftLoadError> {
    let Value::Object(stored) = serde_json::from_str::<Value>(raw).map_err(DraftLoadError::Parse)?
    else {
        return Err(DraftLoadError::NotAnObject);
    };

    let defaults = serde_json::to_value(Draft::pristine(initial.clone()))
        .map_err(DraftLoadError::Shape)?;
    let mut merged = match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    merged.extend(stored);

    serde_json::from_value(Value::Object(merged)).map_err(DraftLoadError::Shape)
}

/// Delete every stored draft, leaving unrelated keys alone.
///
/// Returns how many drafts were removed. Failures are logged and skipped.
pub fn clear_all_drafts<S>(storage: &S) -> usize
where
    S: KeyValueStore + ?Sized,
{
    let keys = match storage.keys() {
        Ok(keys) => keys,
        Err(error) => {
            warn!(%error, "failed to list keys for draft sweep");
            return 0;
        }
    };

    let mut removed = 0;
    for key in keys.iter().filter(|key| DraftKey::is_draft_key(key)) {
        match storage.remove(key) {
            Ok(()) => removed += 1,
            Err(error) => warn!(%key, %error, "failed to delete draft during sweep"),
        }
    }
    debug!(removed, "swept drafts");
    removed
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
