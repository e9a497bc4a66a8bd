//! Domain model and operations for the incident board.
//!
//! This crate holds everything the board does that is not DOM glue: the
//! incident record and its enumerations, sequential numbering, the status
//! rotation, search/filter predicates, the fixed seed set, and the
//! [`board::IncidentBoard`] that owns the collection and mirrors it to a
//! key/value store after every mutation. The browser UI supplies a
//! `localStorage`-backed [`store::IncidentStore`]; tests use
//! [`store::MemoryStore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`incident`] | `Incident`, `IncidentNumber`, `Priority`, `Status`, numbering |
//! | [`filter`] | Search text, status and priority predicates |
//! | [`seed`] | The fixed two-record default collection |
//! | [`store`] | Storage seam, in-memory store, JSON codec, `StoreError` |
//! | [`board`] | `IncidentBoard` load/create/advance/delete/reset |
//! | [`config`] | `BoardConfig` storage key and form choices |

pub mod board;
pub mod config;
pub mod filter;
pub mod incident;
pub mod seed;
pub mod store;
