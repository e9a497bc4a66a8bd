//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the form, filter controls, and results table. Shared
//! state comes from Leptos context; board mutations are reported to the page
//! through callbacks.

pub mod filter_bar;
pub mod incident_form;
pub mod incident_table;
