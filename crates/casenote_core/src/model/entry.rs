//! Case entry types.
//!
//! # Responsibility
//! - Define uploaded files, violations, people, timeline events, checklist
//!   items and evidence records.
//! - Validate role labels and event dates at the boundary.
//!
//! # Invariants
//! - `Person::violation` is a weak reference by violation code and may not
//!   resolve to any violation in the owning case.
//! - `TimelineEvent::date` is always an ISO-8601 `YYYY-MM-DD` string, so
//!   lexicographic order equals chronological order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Text extracted from one uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    /// Full extracted text, or a placeholder for image uploads.
    pub content: String,
}

/// Tagged legal violation. `code` is a free-form label and is not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub title: String,
    pub description: String,
}

/// Party role of a person involved in the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonRole {
    Plaintiff,
    Defendant,
    Witness,
    Other,
}

impl PersonRole {
    /// All roles in form-selection order.
    pub const ALL: [PersonRole; 4] = [
        PersonRole::Plaintiff,
        PersonRole::Defendant,
        PersonRole::Witness,
        PersonRole::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Plaintiff => "Plaintiff",
            Self::Defendant => "Defendant",
            Self::Witness => "Witness",
            Self::Other => "Other",
        }
    }
}

impl Display for PersonRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Role label did not match any `PersonRole`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRoleParseError(pub String);

impl Display for PersonRoleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported role `{}`; expected Plaintiff|Defendant|Witness|Other",
            self.0
        )
    }
}

impl Error for PersonRoleParseError {}

impl FromStr for PersonRole {
    type Err = PersonRoleParseError;

    /// Parses a role label case-insensitively, ignoring surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| PersonRoleParseError(normalized.to_string()))
    }
}

/// Person involved in the case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub role: PersonRole,
    pub notes: String,
    /// Violation code this person is linked to, resolved at read time.
    pub violation: Option<String>,
}

/// Dated event on the case timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub title: String,
    pub description: String,
}

impl TimelineEvent {
    /// Creates an event, storing `date` in its ISO-8601 form.
    pub fn new(date: NaiveDate, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date: format_event_date(date),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Event date string was not a valid `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDateError(pub String);

impl Display for EventDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid event date `{}`; expected YYYY-MM-DD", self.0)
    }
}

impl Error for EventDateError {}

/// Parses a `YYYY-MM-DD` boundary value into a calendar date.
pub fn parse_event_date(value: &str) -> Result<NaiveDate, EventDateError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, EVENT_DATE_FORMAT)
        .map_err(|_| EventDateError(trimmed.to_string()))
}

/// Formats a calendar date the way timeline events store it.
pub fn format_event_date(date: NaiveDate) -> String {
    date.format(EVENT_DATE_FORMAT).to_string()
}

/// Legal checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub done: bool,
}

impl ChecklistItem {
    /// Creates an unchecked item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// Evidence attached to the case by file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub name: String,
    pub description: String,
}
