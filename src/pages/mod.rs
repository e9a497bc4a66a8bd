//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The page owns board orchestration (create, advance, delete, reset) and
//! delegates rendering details to `components`.

pub mod board;
