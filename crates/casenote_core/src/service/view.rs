//! Display projections for case sections.
//!
//! # Responsibility
//! - Order the timeline for display without touching storage order.
//! - Resolve person-to-violation links by code at read time.
//! - Produce one display line per entry for every section.
//!
//! # Invariants
//! - Timeline display order is a stable ascending sort by date.
//! - An unresolved violation code is display data, never an error.

use crate::model::case::CaseRecord;
use crate::model::entry::{Person, TimelineEvent, Violation};

/// Characters of file text kept in a preview.
pub const FILE_PREVIEW_MAX_CHARS: usize = 1200;

/// Outcome of resolving `Person::violation` against the case violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationLink<'a> {
    /// The person carries no violation code.
    Unlinked,
    /// First violation whose code matches.
    Linked(&'a Violation),
    /// A code is stored but no violation carries it.
    Unresolved(&'a str),
}

impl ViolationLink<'_> {
    /// Code to show next to the person; unresolved links display as unlinked.
    pub fn display_code(&self) -> Option<&str> {
        match self {
            Self::Linked(violation) => Some(violation.code.as_str()),
            Self::Unlinked | Self::Unresolved(_) => None,
        }
    }
}

/// Resolves one person's violation reference.
pub fn resolve_violation_link<'a>(record: &'a CaseRecord, person: &'a Person) -> ViolationLink<'a> {
    let Some(code) = person.violation.as_deref() else {
        return ViolationLink::Unlinked;
    };
    record
        .violations
        .iter()
        .find(|violation| violation.code == code)
        .map_or(ViolationLink::Unresolved(code), ViolationLink::Linked)
}

/// Timeline events sorted ascending by date; ties keep insertion order.
pub fn timeline_display_order(record: &CaseRecord) -> Vec<&TimelineEvent> {
    let mut events = record.timeline.iter().collect::<Vec<_>>();
    events.sort_by(|left, right| left.date.cmp(&right.date));
    events
}

/// Truncates extracted file text for on-screen preview.
pub fn file_preview(content: &str) -> String {
    let mut preview = content
        .chars()
        .take(FILE_PREVIEW_MAX_CHARS)
        .collect::<String>();
    if content.chars().nth(FILE_PREVIEW_MAX_CHARS).is_some() {
        preview.push_str("...");
    }
    preview
}

/// Preview of one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub name: String,
    pub preview: String,
}

/// Checklist line with its toggle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistLine {
    pub index: usize,
    pub text: String,
    pub done: bool,
}

/// Display lines for every section of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseListing {
    pub case_name: String,
    pub files: Vec<FilePreview>,
    pub violations: Vec<String>,
    pub people: Vec<String>,
    pub timeline: Vec<String>,
    pub checklist: Vec<ChecklistLine>,
    pub evidence: Vec<String>,
}

impl CaseListing {
    pub fn from_record(record: &CaseRecord) -> Self {
        let files = record
            .files
            .iter()
            .map(|file| FilePreview {
                name: file.name.clone(),
                preview: file_preview(file.content.as_str()),
            })
            .collect();
        let violations = record
            .violations
            .iter()
            .map(|violation| format!("{} - {}", violation.code, violation.title))
            .collect();
        let people = record
            .people
            .iter()
            .map(|person| {
                let link = match resolve_violation_link(record, person) {
                    ViolationLink::Linked(violation) => violation.code.clone(),
                    ViolationLink::Unresolved(code) => format!("{code} (unresolved)"),
                    ViolationLink::Unlinked => "none".to_string(),
                };
                format!("{}: {} (linked: {link})", person.role, person.name)
            })
            .collect();
        let timeline = timeline_display_order(record)
            .into_iter()
            .map(|event| format!("{}: {} - {}", event.date, event.title, event.description))
            .collect();
        let checklist = record
            .checklist
            .iter()
            .enumerate()
            .map(|(index, item)| ChecklistLine {
                index,
                text: item.text.clone(),
                done: item.done,
            })
            .collect();
        let evidence = record
            .evidence
            .iter()
            .map(|item| format!("{}: {}", item.name, item.description))
            .collect();

        Self {
            case_name: record.name.clone(),
            files,
            violations,
            people,
            timeline,
            checklist,
            evidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{file_preview, FILE_PREVIEW_MAX_CHARS};

    #[test]
    fn short_content_is_not_truncated() {
        assert_eq!(file_preview("complaint text"), "complaint text");
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        let content = "é".repeat(FILE_PREVIEW_MAX_CHARS + 5);
        let preview = file_preview(&content);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), FILE_PREVIEW_MAX_CHARS + 3);
    }

    #[test]
    fn exact_limit_has_no_ellipsis() {
        let content = "x".repeat(FILE_PREVIEW_MAX_CHARS);
        assert_eq!(file_preview(&content), content);
    }
}
