//! Key/value storage seam and the JSON codec for the persisted collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The board mirrors its whole collection to a single key after every
//! mutation and reads it back once at startup. The trait mirrors the browser
//! `localStorage` API (string keys, string values) so the UI crate can back
//! it with `window.localStorage` while tests use [`MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure here is recoverable at the board boundary: reads fall back
//! to the seed set and failed writes leave the in-memory collection
//! authoritative. Errors are still typed so the fallback can be logged with
//! its cause.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::{HashMap, HashSet};

use crate::incident::{Incident, IncidentNumber};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage backend is reachable (e.g. storage disabled in the browser).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected a read or write (e.g. quota exceeded).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// The stored value is not a JSON array of incidents.
    #[error("failed to decode stored incidents: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to encode incidents: {0}")]
    Encode(String),
    /// The stored array repeats an incident number.
    #[error("duplicate incident number: {0}")]
    DuplicateNumber(IncidentNumber),
}

/// String key/value storage, shaped like `window.localStorage`.
pub trait IncidentStore {
    /// Raw value under `key`, or `None` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite `key` with `raw`.
    fn write(&mut self, key: &str, raw: &str) -> Result<(), StoreError>;
}

/// In-process store for tests and non-browser builds.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// When set, every write fails with [`StoreError::Backend`].
    pub reject_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `raw` under `key`.
    #[must_use]
    pub fn with_entry(key: &str, raw: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_owned(), raw.to_owned());
        store
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl IncidentStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, raw: &str) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError::Backend(format!("write rejected for {key}")));
        }
        self.entries.insert(key.to_owned(), raw.to_owned());
        Ok(())
    }
}

/// Parse a persisted collection. Rejects anything that is not an array of
/// well-formed incidents with distinct numbers.
pub fn decode_incidents(raw: &str) -> Result<Vec<Incident>, StoreError> {
    let incidents: Vec<Incident> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(incidents.len());
    for incident in &incidents {
        if !seen.insert(&incident.number) {
            return Err(StoreError::DuplicateNumber(incident.number.clone()));
        }
    }
    Ok(incidents)
}

/// Serialize a collection to the persisted JSON array.
pub fn encode_incidents(incidents: &[Incident]) -> Result<String, StoreError> {
    serde_json::to_string(incidents).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Read and decode `key`. `Ok(None)` means the key is absent.
pub fn load_incidents<S: IncidentStore + ?Sized>(store: &S, key: &str) -> Result<Option<Vec<Incident>>, StoreError> {
    match store.read(key)? {
        Some(raw) => Ok(Some(decode_incidents(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write the whole collection to `key`.
pub fn save_incidents<S: IncidentStore + ?Sized>(store: &mut S, key: &str, incidents: &[Incident]) -> Result<(), StoreError> {
    let raw = encode_incidents(incidents)?;
    store.write(key, &raw)
}
