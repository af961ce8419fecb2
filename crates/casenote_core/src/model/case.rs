//! Case record model.
//!
//! # Responsibility
//! - Aggregate every entry collection owned by one case.
//!
//! # Invariants
//! - `name` is non-empty and unique within a `CaseStore`.
//! - `id` is generated once and never reused; logs refer to cases by `id`
//!   so user-entered names stay out of diagnostics.
//! - Collections keep insertion order.

use crate::model::entry::{ChecklistItem, Evidence, Person, TimelineEvent, UploadedFile, Violation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one case within a session.
pub type CaseId = Uuid;

/// Top-level unit of organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: CaseId,
    pub name: String,
    pub files: Vec<UploadedFile>,
    pub violations: Vec<Violation>,
    pub people: Vec<Person>,
    /// Insertion order; see `service::view::timeline_display_order` for display.
    pub timeline: Vec<TimelineEvent>,
    pub checklist: Vec<ChecklistItem>,
    pub evidence: Vec<Evidence>,
}

impl CaseRecord {
    /// Creates an empty case with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            files: Vec::new(),
            violations: Vec::new(),
            people: Vec::new(),
            timeline: Vec::new(),
            checklist: Vec::new(),
            evidence: Vec::new(),
        }
    }

    /// Returns whether no entry of any kind has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
            && self.violations.is_empty()
            && self.people.is_empty()
            && self.timeline.is_empty()
            && self.checklist.is_empty()
            && self.evidence.is_empty()
    }
}
