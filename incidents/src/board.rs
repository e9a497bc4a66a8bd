//! The incident board: owner of the in-memory collection.
//!
//! DESIGN
//! ======
//! The collection lives here and nowhere else. Storage is a passive mirror:
//! it is read at construction (and when another tab writes the same key) and
//! overwritten wholesale after every mutation. Each operation runs to
//! completion synchronously, so no locking is involved.
//!
//! ERROR HANDLING
//! ==============
//! No operation fails from the caller's point of view. Absent or malformed
//! stored data degrades to the seed set; failed writes are logged and the
//! in-memory collection stays authoritative.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use log::{debug, warn};

use crate::config::BoardConfig;
use crate::filter::IncidentFilter;
use crate::incident::{Incident, IncidentNumber, NewIncident, Status, next_number};
use crate::seed::seed_incidents;
use crate::store::{IncidentStore, StoreError, decode_incidents, load_incidents, save_incidents};

/// Where the current collection came from at the last (re)load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded from storage.
    Stored,
    /// Storage had no value for the key.
    SeedMissing,
    /// Storage was unreadable or held malformed data.
    SeedMalformed,
    /// Seed set restored by an explicit reset.
    Reset,
}

#[derive(Debug, Clone)]
pub struct IncidentBoard<S> {
    store: S,
    storage_key: String,
    incidents: Vec<Incident>,
    source: LoadSource,
}

impl<S: IncidentStore> IncidentBoard<S> {
    /// Load the persisted collection, substituting the seed set (stamped
    /// `now`) when it is absent or malformed. Does not write.
    pub fn load(store: S, config: &BoardConfig, now: &str) -> Self {
        let (incidents, source) = read_or_seed(&store, &config.storage_key, now);
        debug!("incident board loaded {} records ({source:?})", incidents.len());
        Self { store, storage_key: config.storage_key.clone(), incidents, source }
    }

    /// All records, newest first.
    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    #[must_use]
    pub fn source(&self) -> LoadSource {
        self.source
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn get(&self, number: &str) -> Option<&Incident> {
        self.incidents.iter().find(|incident| incident.number.as_str() == number)
    }

    /// Records matching `filter`, in collection order.
    #[must_use]
    pub fn visible(&self, filter: &IncidentFilter) -> Vec<&Incident> {
        filter.apply(&self.incidents)
    }

    /// Number the next created incident will receive.
    #[must_use]
    pub fn next_number(&self) -> IncidentNumber {
        next_number(&self.incidents)
    }

    /// Add a new incident at the front with status `New` and the next
    /// sequential number, then persist. Returns the assigned number.
    pub fn create(&mut self, draft: NewIncident, created_at: &str) -> IncidentNumber {
        let number = self.next_number();
        let incident = draft.into_incident(number.clone(), created_at);
        self.incidents.insert(0, incident);
        debug!("created incident {number}");
        self.persist();
        number
    }

    /// Move one record to its next status, then persist. Returns the new
    /// status, or `None` when no record has that number.
    pub fn advance_status(&mut self, number: &str) -> Option<Status> {
        let advanced = self
            .incidents
            .iter_mut()
            .find(|incident| incident.number.as_str() == number)
            .map(|incident| {
                incident.status = incident.status.advance();
                incident.status
            });
        match advanced {
            Some(status) => debug!("incident {number} advanced to {status}"),
            None => debug!("advance ignored: no incident {number}"),
        }
        self.persist();
        advanced
    }

    /// Remove the record with `number`, then persist. Returns whether a
    /// record was removed.
    pub fn delete(&mut self, number: &str) -> bool {
        let before = self.incidents.len();
        self.incidents.retain(|incident| incident.number.as_str() != number);
        let removed = self.incidents.len() != before;
        if removed {
            debug!("deleted incident {number}");
        } else {
            debug!("delete ignored: no incident {number}");
        }
        self.persist();
        removed
    }

    /// Replace the whole collection with the seed set, then persist.
    pub fn reset_seed(&mut self, now: &str) {
        self.incidents = seed_incidents(now);
        self.source = LoadSource::Reset;
        debug!("incident board reset to seed data");
        self.persist();
    }

    /// Adopt a value another writer stored under our key (`None` when the key
    /// was removed), with the same fallback rules as [`IncidentBoard::load`].
    /// Does not write back.
    pub fn adopt_external(&mut self, raw: Option<&str>, now: &str) {
        let (incidents, source) = match raw {
            Some(raw) => match decode_incidents(raw) {
                Ok(incidents) => (incidents, LoadSource::Stored),
                Err(e) => {
                    warn!("ignoring malformed external write to {}: {e}", self.storage_key);
                    (seed_incidents(now), LoadSource::SeedMalformed)
                }
            },
            None => (seed_incidents(now), LoadSource::SeedMissing),
        };
        debug!("adopted external write: {} records ({source:?})", incidents.len());
        self.incidents = incidents;
        self.source = source;
    }

    fn persist(&mut self) {
        if let Err(e) = save_incidents(&mut self.store, &self.storage_key, &self.incidents) {
            warn!("failed to persist incidents to {}: {e}", self.storage_key);
        }
    }
}

fn read_or_seed<S: IncidentStore>(store: &S, key: &str, now: &str) -> (Vec<Incident>, LoadSource) {
    match load_incidents(store, key) {
        Ok(Some(incidents)) => (incidents, LoadSource::Stored),
        Ok(None) => (seed_incidents(now), LoadSource::SeedMissing),
        Err(e) => {
            log_fallback(key, &e);
            (seed_incidents(now), LoadSource::SeedMalformed)
        }
    }
}

fn log_fallback(key: &str, error: &StoreError) {
    warn!("falling back to seed incidents; could not load {key}: {error}");
}
