//! In-memory case store and its consistency rules.
//!
//! # Responsibility
//! - Create and select cases by unique name.
//! - Append entries to the active case and toggle checklist items.
//! - Expose read access and the summary document projection.
//!
//! # Invariants
//! - Case names are unique; duplicates are rejected without overwrite.
//! - Case-scoped operations require an active case.
//! - Entries are appended in call order and never removed.
//! - Diagnostics carry `case_id` and counts only, never user text.

use crate::extract::ExtractedUpload;
use crate::model::case::{CaseId, CaseRecord};
use crate::model::entry::{
    ChecklistItem, Evidence, Person, PersonRole, TimelineEvent, UploadedFile, Violation,
};
use crate::service::summary::render_summary;
use chrono::NaiveDate;
use log::{info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Recoverable store error. None of these are fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A case with this name already exists.
    DuplicateCase(String),
    /// No case with this name exists.
    NotFound(String),
    /// A case-scoped operation ran before any case was created or selected.
    NoActiveCase,
    /// Checklist index does not address an existing item.
    IndexOutOfRange { index: usize, len: usize },
    /// Case name is empty.
    InvalidCaseName(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateCase(name) => write!(f, "case already exists: `{name}`"),
            Self::NotFound(name) => write!(f, "case not found: `{name}`"),
            Self::NoActiveCase => write!(f, "no active case; create or select a case first"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "checklist index {index} out of range (len {len})")
            }
            Self::InvalidCaseName(name) => write!(f, "invalid case name: `{name}`"),
        }
    }
}

impl Error for StoreError {}

/// Session-scoped owner of all case records.
#[derive(Debug, Default)]
pub struct CaseStore {
    cases: Vec<CaseRecord>,
    index_by_name: HashMap<String, usize>,
    active: Option<usize>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty case and makes it active.
    ///
    /// # Errors
    /// - `InvalidCaseName` when `name` is empty.
    /// - `DuplicateCase` when `name` is already taken; the existing case and
    ///   the active selection are left untouched.
    pub fn create_case(&mut self, name: impl Into<String>) -> StoreResult<CaseId> {
        let name = name.into();
        if name.is_empty() {
            return Err(StoreError::InvalidCaseName(name));
        }
        if self.index_by_name.contains_key(name.as_str()) {
            warn!("event=case_create module=store status=warn reason=duplicate_name");
            return Err(StoreError::DuplicateCase(name));
        }

        let record = CaseRecord::new(name.clone());
        let case_id = record.id;
        let index = self.cases.len();
        self.cases.push(record);
        self.index_by_name.insert(name, index);
        self.active = Some(index);

        info!(
            "event=case_create module=store status=ok case_id={} case_count={}",
            case_id,
            self.cases.len()
        );
        Ok(case_id)
    }

    /// Makes an existing case active.
    pub fn select_case(&mut self, name: &str) -> StoreResult<CaseId> {
        let index = *self.index_by_name.get(name).ok_or_else(|| {
            warn!("event=case_select module=store status=warn reason=not_found");
            StoreError::NotFound(name.to_string())
        })?;
        self.active = Some(index);
        let case_id = self.cases[index].id;
        info!("event=case_select module=store status=ok case_id={case_id}");
        Ok(case_id)
    }

    /// Case names in creation order.
    pub fn case_names(&self) -> Vec<&str> {
        self.cases.iter().map(|record| record.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Returns one case by name.
    pub fn case(&self, name: &str) -> Option<&CaseRecord> {
        self.index_by_name
            .get(name)
            .map(|&index| &self.cases[index])
    }

    pub fn active_case_name(&self) -> Option<&str> {
        self.active.map(|index| self.cases[index].name.as_str())
    }

    /// Returns the active case record.
    pub fn active_case(&self) -> StoreResult<&CaseRecord> {
        self.active
            .map(|index| &self.cases[index])
            .ok_or(StoreError::NoActiveCase)
    }

    /// Appends extracted file text to the active case.
    ///
    /// Returns `Ok(false)` without recording anything when `content` is empty,
    /// which is how extraction signals "no content".
    pub fn ingest_file(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<bool> {
        let case = self.active_case_mut()?;
        let content = content.into();
        if content.is_empty() {
            info!(
                "event=file_ingest module=store status=skipped case_id={} reason=empty_content",
                case.id
            );
            return Ok(false);
        }

        case.files.push(UploadedFile {
            name: name.into(),
            content,
        });
        info!(
            "event=file_ingest module=store status=ok case_id={} file_count={}",
            case.id,
            case.files.len()
        );
        Ok(true)
    }

    /// Appends the output of the extraction collaborator.
    pub fn ingest_upload(&mut self, upload: ExtractedUpload) -> StoreResult<bool> {
        self.ingest_file(upload.name, upload.content)
    }

    /// Appends a violation. Fields are stored as given, empty values included.
    pub fn add_violation(
        &mut self,
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<usize> {
        let case = self.active_case_mut()?;
        case.violations.push(Violation {
            code: code.into(),
            title: title.into(),
            description: description.into(),
        });
        let index = case.violations.len() - 1;
        info!(
            "event=violation_add module=store status=ok case_id={} index={index}",
            case.id
        );
        Ok(index)
    }

    /// Appends a person.
    ///
    /// `violation` is kept as a code reference without checking that a
    /// matching violation exists.
    pub fn add_person(
        &mut self,
        name: impl Into<String>,
        role: PersonRole,
        notes: impl Into<String>,
        violation: Option<String>,
    ) -> StoreResult<usize> {
        let case = self.active_case_mut()?;
        let linked = violation.is_some();
        case.people.push(Person {
            name: name.into(),
            role,
            notes: notes.into(),
            violation,
        });
        let index = case.people.len() - 1;
        info!(
            "event=person_add module=store status=ok case_id={} index={index} role={role} linked={linked}",
            case.id
        );
        Ok(index)
    }

    /// Appends a timeline event in insertion order.
    pub fn add_timeline_event(
        &mut self,
        date: NaiveDate,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<usize> {
        let case = self.active_case_mut()?;
        case.timeline.push(TimelineEvent::new(date, title, description));
        let index = case.timeline.len() - 1;
        info!(
            "event=timeline_add module=store status=ok case_id={} index={index}",
            case.id
        );
        Ok(index)
    }

    /// Appends an unchecked checklist item.
    pub fn add_checklist_item(&mut self, text: impl Into<String>) -> StoreResult<usize> {
        let case = self.active_case_mut()?;
        case.checklist.push(ChecklistItem::new(text));
        let index = case.checklist.len() - 1;
        info!(
            "event=checklist_add module=store status=ok case_id={} index={index}",
            case.id
        );
        Ok(index)
    }

    /// Sets `done` on one checklist item.
    pub fn toggle_checklist_item(&mut self, index: usize, done: bool) -> StoreResult<()> {
        let case = self.active_case_mut()?;
        let len = case.checklist.len();
        let Some(item) = case.checklist.get_mut(index) else {
            warn!(
                "event=checklist_toggle module=store status=warn case_id={} index={index} len={len}",
                case.id
            );
            return Err(StoreError::IndexOutOfRange { index, len });
        };
        item.done = done;
        info!(
            "event=checklist_toggle module=store status=ok case_id={} index={index} done={done}",
            case.id
        );
        Ok(())
    }

    /// Appends evidence when a file is present.
    ///
    /// Returns `Ok(false)` and records nothing when `file_name` is empty; a
    /// description on its own is dropped.
    pub fn add_evidence(
        &mut self,
        file_name: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<bool> {
        let case = self.active_case_mut()?;
        let name = file_name.into();
        if name.is_empty() {
            return Ok(false);
        }

        case.evidence.push(Evidence {
            name,
            description: description.into(),
        });
        info!(
            "event=evidence_add module=store status=ok case_id={} evidence_count={}",
            case.id,
            case.evidence.len()
        );
        Ok(true)
    }

    /// Renders the summary document for the active case.
    ///
    /// Pure projection: repeated calls without mutation return identical text.
    pub fn render_summary_document(&self) -> StoreResult<String> {
        self.active_case().map(render_summary)
    }

    fn active_case_mut(&mut self) -> StoreResult<&mut CaseRecord> {
        match self.active {
            Some(index) => Ok(&mut self.cases[index]),
            None => {
                warn!("event=case_access module=store status=warn reason=no_active_case");
                Err(StoreError::NoActiveCase)
            }
        }
    }
}
