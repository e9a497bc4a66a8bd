//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The board collection, the filter controls, and the create-form draft are
//! separate models so the table, filter bar, and form each depend only on the
//! state they render.

pub mod board;
pub mod draft;
pub mod filters;
