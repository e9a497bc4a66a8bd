//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock) from
//! page and component logic so the rest of the crate tests natively.

pub mod clock;
pub mod local_storage;
