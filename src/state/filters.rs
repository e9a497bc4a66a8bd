//! Search box and filter select state for the incident table.
//!
//! DESIGN
//! ======
//! Controls write raw DOM values here; parsing into typed filters happens on
//! the way in so the table only ever sees a valid `IncidentFilter`. Nothing
//! here is persisted.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use incidents::filter::{IncidentFilter, PriorityFilter, StatusFilter};

/// Current values of the search box and the two filter selects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Search box text exactly as typed.
    pub search: String,
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

impl FilterState {
    /// Apply a status select value. Unknown values reset to "all".
    pub fn set_status_value(&mut self, value: &str) {
        self.status = StatusFilter::parse(value).unwrap_or_default();
    }

    /// Apply a priority select value. Unknown values reset to "all".
    pub fn set_priority_value(&mut self, value: &str) {
        self.priority = PriorityFilter::parse(value).unwrap_or_default();
    }

    /// Typed filter for the current control values.
    pub fn filter(&self) -> IncidentFilter {
        IncidentFilter::new(&self.search, self.status, self.priority)
    }
}
