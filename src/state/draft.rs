//! Create-form draft state.
//!
//! Fields hold what the inputs currently show. Required-field checks are left
//! to the browser (`required` inputs block submit); trimming happens when the
//! draft becomes a `NewIncident`.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use incidents::config::BoardConfig;
use incidents::incident::{NewIncident, Priority};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftState {
    pub short_description: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub assignment_group: String,
    pub requested_by: String,
}

impl DraftState {
    /// A blank form with the configured default selections.
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            short_description: String::new(),
            description: String::new(),
            category: config.default_category().to_owned(),
            priority: config.default_priority,
            assignment_group: config.default_assignment_group().to_owned(),
            requested_by: String::new(),
        }
    }

    /// Apply a priority select value. Unknown values leave the current one.
    pub fn set_priority_value(&mut self, value: &str) {
        if let Ok(priority) = value.parse::<Priority>() {
            self.priority = priority;
        }
    }

    pub fn to_new_incident(&self) -> NewIncident {
        NewIncident {
            short_description: self.short_description.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            priority: self.priority,
            assignment_group: self.assignment_group.clone(),
            requested_by: self.requested_by.clone(),
        }
    }
}
