//! Incident record types and sequential numbering.
//!
//! The JSON layout (camelCase keys, priority as a `"1"`..`"4"` string, status
//! as its display text) matches what the board has always written to local
//! storage, so previously persisted collections stay readable.

#[cfg(test)]
#[path = "incident_test.rs"]
mod incident_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix shared by every incident number.
pub const NUMBER_PREFIX: &str = "INC";

/// Lowest sequence value considered when assigning the next number. The first
/// incident created against an empty board is therefore `INC001001`.
pub const NUMBER_FLOOR: u64 = 1000;

/// Minimum digit count after the prefix.
pub const NUMBER_WIDTH: usize = 6;

/// A select value that does not name a known status or priority.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown status: {0:?}")]
    Status(String),
    #[error("unknown priority: {0:?}")]
    Priority(String),
}

/// Decimal sequence part of an incident number, ordered numerically at any
/// width. Leading zeros are not significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(String);

impl Sequence {
    /// Parse a run of ASCII digits; an empty run is zero.
    #[must_use]
    pub fn parse(digits: &str) -> Option<Self> {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            return Some(Self("0".to_owned()));
        }
        Some(Self(significant.to_owned()))
    }

    /// The next value. Widens by one digit on carry out, so it never wraps
    /// or saturates.
    #[must_use]
    pub fn successor(&self) -> Self {
        let mut digits = self.0.clone().into_bytes();
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                return Self(String::from_utf8_lossy(&digits).into_owned());
            }
        }
        digits.insert(0, b'1');
        Self(String::from_utf8_lossy(&digits).into_owned())
    }

    /// Digits without leading zeros (`"0"` for zero).
    #[must_use]
    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Sequence {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Ord for Sequence {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Sequence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Human-readable incident identifier, e.g. `INC001002`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentNumber(String);

impl IncidentNumber {
    /// Format a sequence value as `INC` followed by at least six digits.
    #[must_use]
    pub fn from_sequence(sequence: &Sequence) -> Self {
        Self(format!("{NUMBER_PREFIX}{:0>width$}", sequence.as_digits(), width = NUMBER_WIDTH))
    }

    /// Numeric part after the `INC` prefix, if it is all digits.
    ///
    /// Numbers without the prefix are parsed whole; anything non-numeric
    /// yields `None` and is skipped by [`next_number`].
    #[must_use]
    pub fn sequence(&self) -> Option<Sequence> {
        let digits = self.0.strip_prefix(NUMBER_PREFIX).unwrap_or(self.0.as_str()).trim();
        Sequence::parse(digits)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IncidentNumber {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for IncidentNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for IncidentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Urgency level, stored as its digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "1")]
    Critical,
    #[serde(rename = "2")]
    High,
    #[default]
    #[serde(rename = "3")]
    Moderate,
    #[serde(rename = "4")]
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Critical, Priority::High, Priority::Moderate, Priority::Low];

    /// The stored digit (`"1"`..`"4"`), also used as the select value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "1",
            Priority::High => "2",
            Priority::Moderate => "3",
            Priority::Low => "4",
        }
    }

    /// Display label, e.g. `"1 - Critical"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "1 - Critical",
            Priority::High => "2 - High",
            Priority::Moderate => "3 - Moderate",
            Priority::Low => "4 - Low",
        }
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::Priority(s.to_owned()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Workflow state. Advances `New → In Progress → Resolved → New`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::New, Status::InProgress, Status::Resolved];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::New => "New",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
        }
    }

    /// Next state in the three-step rotation.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Status::New => Status::InProgress,
            Status::InProgress => Status::Resolved,
            Status::Resolved => Status::New,
        }
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseError::Status(s.to_owned()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked incident as held in memory and persisted to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub number: IncidentNumber,
    pub short_description: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub assignment_group: String,
    pub requested_by: String,
    pub status: Status,
    /// ISO-8601 creation time. Never modified after creation.
    pub created_at: String,
}

impl Incident {
    /// Lowercased text the search box matches against.
    #[must_use]
    pub fn search_text(&self) -> String {
        [
            self.number.as_str(),
            self.short_description.as_str(),
            self.description.as_str(),
            self.requested_by.as_str(),
            self.assignment_group.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// User-supplied fields for a new incident. Number, status and timestamp are
/// assigned by the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIncident {
    pub short_description: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub assignment_group: String,
    pub requested_by: String,
}

impl NewIncident {
    /// Build the stored record. Free-text fields typed by the user are
    /// trimmed; select-driven fields are taken as-is.
    #[must_use]
    pub fn into_incident(self, number: IncidentNumber, created_at: &str) -> Incident {
        Incident {
            number,
            short_description: self.short_description.trim().to_owned(),
            description: self.description.trim().to_owned(),
            category: self.category,
            priority: self.priority,
            assignment_group: self.assignment_group,
            requested_by: self.requested_by.trim().to_owned(),
            status: Status::New,
            created_at: created_at.to_owned(),
        }
    }
}

/// Next number for a collection: highest parsable sequence (at least
/// [`NUMBER_FLOOR`]) plus one. Sequences of any width take part, so the
/// result is strictly greater than, and never equal to, every existing one.
pub fn next_number<'a>(existing: impl IntoIterator<Item = &'a Incident>) -> IncidentNumber {
    let max = existing
        .into_iter()
        .filter_map(|incident| incident.number.sequence())
        .fold(Sequence::from(NUMBER_FLOOR), Ord::max);
    IncidentNumber::from_sequence(&max.successor())
}
