//! Search and filter predicates for the incident table.
//!
//! Filtering is a pure view over the collection: it never reorders or
//! mutates records, and the three predicates are independent, so applying
//! them in any order (or more than once) gives the same result.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::incident::{Incident, ParseError, Priority, Status};

/// Select value meaning "no restriction".
pub const ALL_VALUE: &str = "all";

/// Status select: everything, or one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    /// Parse a status select value (`"all"` or a status name).
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        if value == ALL_VALUE {
            return Ok(StatusFilter::All);
        }
        Ok(StatusFilter::Only(value.parse()?))
    }

    #[must_use]
    pub fn as_value(self) -> &'static str {
        match self {
            StatusFilter::All => ALL_VALUE,
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

/// Priority select: everything, or one priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Parse a priority select value (`"all"` or `"1"`..`"4"`).
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        if value == ALL_VALUE {
            return Ok(PriorityFilter::All);
        }
        Ok(PriorityFilter::Only(value.parse()?))
    }

    #[must_use]
    pub fn as_value(self) -> &'static str {
        match self {
            PriorityFilter::All => ALL_VALUE,
            PriorityFilter::Only(priority) => priority.as_str(),
        }
    }

    #[must_use]
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => wanted == priority,
        }
    }
}

/// Combined table filter driven by the search box and the two selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentFilter {
    search: String,
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

impl IncidentFilter {
    #[must_use]
    pub fn new(search: &str, status: StatusFilter, priority: PriorityFilter) -> Self {
        Self { search: normalize_search(search), status, priority }
    }

    /// Only the search predicate.
    #[cfg(test)]
    pub(crate) fn search(search: &str) -> Self {
        Self::new(search, StatusFilter::All, PriorityFilter::All)
    }

    /// Only the status predicate.
    #[cfg(test)]
    pub(crate) fn status(status: StatusFilter) -> Self {
        Self::new("", status, PriorityFilter::All)
    }

    /// Only the priority predicate.
    #[cfg(test)]
    pub(crate) fn priority(priority: PriorityFilter) -> Self {
        Self::new("", StatusFilter::All, priority)
    }

    /// Trimmed, lowercased search needle.
    #[cfg(test)]
    pub(crate) fn search_text(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty() && self.status == StatusFilter::All && self.priority == PriorityFilter::All
    }

    #[must_use]
    pub fn matches(&self, incident: &Incident) -> bool {
        let search_match = self.search.is_empty() || incident.search_text().contains(&self.search);
        search_match && self.status.matches(incident.status) && self.priority.matches(incident.priority)
    }

    /// Records passing every predicate, in collection order.
    pub fn apply<'a>(&self, incidents: impl IntoIterator<Item = &'a Incident>) -> Vec<&'a Incident> {
        incidents.into_iter().filter(|incident| self.matches(incident)).collect()
    }
}

fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}
