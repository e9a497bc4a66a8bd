//! Board configuration: where the collection is stored and which choices the
//! create form offers.
//!
//! DESIGN
//! ======
//! The board runs in a browser tab with no environment to read from, so
//! configuration is a plain value with prototype defaults. Fields are public;
//! callers override them with struct update syntax before loading the board.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::incident::Priority;

/// Storage key the collection has always been written under.
pub const DEFAULT_STORAGE_KEY: &str = "servicenow-addon-prototype-incidents";

pub const DEFAULT_CATEGORIES: [&str; 5] = ["Network", "Access", "Hardware", "Software", "Database"];

pub const DEFAULT_ASSIGNMENT_GROUPS: [&str; 5] = [
    "Service Desk",
    "Network Operations",
    "Identity Management",
    "Infrastructure",
    "Application Support",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Key holding the JSON array of incidents.
    pub storage_key: String,
    /// Category select options, in display order. The first is the form default.
    pub categories: Vec<String>,
    /// Assignment-group select options. The first is the form default.
    pub assignment_groups: Vec<String>,
    /// Priority preselected on a fresh form.
    pub default_priority: Priority,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            categories: DEFAULT_CATEGORIES.iter().map(|&c| c.to_owned()).collect(),
            assignment_groups: DEFAULT_ASSIGNMENT_GROUPS.iter().map(|&g| g.to_owned()).collect(),
            default_priority: Priority::Moderate,
        }
    }
}

impl BoardConfig {
    /// Category preselected on a fresh form.
    #[must_use]
    pub fn default_category(&self) -> &str {
        self.categories.first().map_or("", String::as_str)
    }

    /// Assignment group preselected on a fresh form.
    #[must_use]
    pub fn default_assignment_group(&self) -> &str {
        self.assignment_groups.first().map_or("", String::as_str)
    }
}
