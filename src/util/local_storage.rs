//! Browser `localStorage` backing for the incident store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` is the only place the board touches web-sys storage.
//! Under `csr` it reads and writes `window.localStorage`; otherwise it reads
//! nothing and accepts every write, so native builds start from the seed set.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use incidents::store::{IncidentStore, StoreError};

/// Zero-sized handle; the storage object is looked up on each call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StoreError::Unavailable("localStorage is disabled".to_owned())),
        Err(e) => Err(StoreError::Unavailable(format!("{e:?}"))),
    }
}

impl IncidentStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| StoreError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&mut self, key: &str, raw: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, raw).map_err(|e| StoreError::Backend(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, raw);
            Ok(())
        }
    }
}

/// Whether a `storage` event with `event_key` concerns `storage_key`.
/// A `None` key means the whole storage area was cleared.
pub fn event_targets(event_key: Option<&str>, storage_key: &str) -> bool {
    event_key.is_none_or(|key| key == storage_key)
}
