//! FFI use-case API for the form-driven case UI.
//!
//! # Responsibility
//! - Expose one sync call per case operation to Dart via FRB.
//! - Parse role and date form values at the boundary.
//! - Return plain display data the UI can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One `CaseSession` owns one store; every call takes its lock.

use casenote_core::{
    classify_theory, core_version as core_version_inner, init_logging as init_logging_inner,
    parse_event_date, ping as ping_inner, CaseListing, CaseStore, ExtractorRegistry, FileKind,
    PersonRole, StoreResult,
};
use log::warn;
use std::sync::{Mutex, MutexGuard};

const NO_VIOLATION_LABEL: &str = "None";

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Outcome of one form action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the action changed or was accepted by the store.
    pub ok: bool,
    /// Human-readable message for a toast/banner.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Uploaded file as rendered in the case summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreviewItem {
    pub name: String,
    pub preview: String,
}

/// Checklist row with its checkbox state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistRow {
    pub index: u32,
    pub text: String,
    pub done: bool,
}

/// Everything the case page renders for the active case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSnapshot {
    pub case_name: String,
    pub files: Vec<FilePreviewItem>,
    pub violations: Vec<String>,
    /// Codes offered by the "link to violation" selector, `None` first.
    pub violation_choices: Vec<String>,
    pub people: Vec<String>,
    pub timeline: Vec<String>,
    pub checklist: Vec<ChecklistRow>,
    pub evidence: Vec<String>,
}

/// One UI session: a case store plus the extractors used for uploads.
pub struct CaseSession {
    store: Mutex<CaseStore>,
    extractors: ExtractorRegistry,
}

impl CaseSession {
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self {
            store: Mutex::new(CaseStore::new()),
            extractors: ExtractorRegistry::with_defaults(),
        }
    }

    /// Case names for the "open existing case" selector, in creation order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn case_names(&self) -> Vec<String> {
        self.lock()
            .case_names()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn active_case_name(&self) -> Option<String> {
        self.lock().active_case_name().map(str::to_owned)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn create_case(&self, name: String) -> ActionResponse {
        respond(
            self.lock().create_case(name.clone()),
            |_| format!("Created case: {name}"),
        )
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn select_case(&self, name: String) -> ActionResponse {
        respond(self.lock().select_case(name.as_str()), |_| {
            format!("Opened case: {name}")
        })
    }

    /// Extracts an uploaded file and records its text on the active case.
    ///
    /// `file_type` is the declared type (`pdf|docx|png|jpg|jpeg`); when it is
    /// empty the type is inferred from `name`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn upload_file(&self, name: String, file_type: String, bytes: Vec<u8>) -> ActionResponse {
        let upload = if file_type.trim().is_empty() {
            self.extractors.extract_by_name(name.as_str(), &bytes)
        } else {
            match FileKind::from_declared(file_type.as_str()) {
                Some(kind) => self.extractors.extract(name.as_str(), kind, &bytes),
                None => {
                    warn!("event=file_upload module=ffi status=warn reason=unsupported_type");
                    return ActionResponse::failure(format!(
                        "Unsupported file type: {}",
                        file_type.trim()
                    ));
                }
            }
        };

        match self.lock().ingest_upload(upload) {
            Ok(true) => ActionResponse::success(format!("{name} uploaded.")),
            Ok(false) => ActionResponse::failure(format!("No content extracted from {name}.")),
            Err(err) => ActionResponse::failure(err.to_string()),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn add_violation(&self, code: String, title: String, description: String) -> ActionResponse {
        respond(
            self.lock().add_violation(code, title, description),
            |_| "Violation added.".to_string(),
        )
    }

    /// Adds a person. `violation` of `None` or the `"None"` choice means unlinked.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_person(
        &self,
        name: String,
        role: String,
        notes: String,
        violation: Option<String>,
    ) -> ActionResponse {
        let role = match role.parse::<PersonRole>() {
            Ok(role) => role,
            Err(err) => return ActionResponse::failure(err.to_string()),
        };
        let violation = violation.filter(|code| code != NO_VIOLATION_LABEL);
        respond(
            self.lock().add_person(name, role, notes, violation),
            |_| "Person added.".to_string(),
        )
    }

    /// Adds a timeline event; `date` is `YYYY-MM-DD` from the date picker.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_timeline_event(
        &self,
        date: String,
        title: String,
        description: String,
    ) -> ActionResponse {
        let date = match parse_event_date(date.as_str()) {
            Ok(date) => date,
            Err(err) => return ActionResponse::failure(err.to_string()),
        };
        respond(
            self.lock().add_timeline_event(date, title, description),
            |_| "Timeline entry added.".to_string(),
        )
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn add_checklist_item(&self, text: String) -> ActionResponse {
        respond(self.lock().add_checklist_item(text), |_| {
            "Checklist item added.".to_string()
        })
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_checklist_item(&self, index: u32, done: bool) -> ActionResponse {
        respond(
            self.lock().toggle_checklist_item(index as usize, done),
            |_| "Checklist updated.".to_string(),
        )
    }

    /// Adds evidence. Without a file the description is dropped and `ok` is false.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_evidence(&self, file_name: Option<String>, description: String) -> ActionResponse {
        let file_name = file_name.unwrap_or_default();
        match self.lock().add_evidence(file_name.clone(), description) {
            Ok(true) => ActionResponse::success(format!("Uploaded: {file_name}")),
            Ok(false) => ActionResponse::failure("No evidence file attached."),
            Err(err) => ActionResponse::failure(err.to_string()),
        }
    }

    /// Renders the editable summary document; empty string without an active case.
    #[flutter_rust_bridge::frb(sync)]
    pub fn generate_document(&self) -> String {
        self.lock().render_summary_document().unwrap_or_default()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn analyze_theory(&self, theory: String) -> String {
        classify_theory(theory.as_str()).to_owned()
    }

    /// Display data for the active case, or `None` when no case is open.
    #[flutter_rust_bridge::frb(sync)]
    pub fn snapshot(&self) -> Option<CaseSnapshot> {
        let store = self.lock();
        let record = store.active_case().ok()?;
        let listing = CaseListing::from_record(record);

        let violation_choices = std::iter::once(NO_VIOLATION_LABEL.to_string())
            .chain(record.violations.iter().map(|violation| violation.code.clone()))
            .collect();

        Some(CaseSnapshot {
            case_name: listing.case_name,
            files: listing
                .files
                .into_iter()
                .map(|file| FilePreviewItem {
                    name: file.name,
                    preview: file.preview,
                })
                .collect(),
            violations: listing.violations,
            violation_choices,
            people: listing.people,
            timeline: listing.timeline,
            checklist: listing
                .checklist
                .into_iter()
                .map(|line| ChecklistRow {
                    index: u32::try_from(line.index).unwrap_or(u32::MAX),
                    text: line.text,
                    done: line.done,
                })
                .collect(),
            evidence: listing.evidence,
        })
    }

    fn lock(&self) -> MutexGuard<'_, CaseStore> {
        // A panic while holding the lock cannot leave a half-applied mutation:
        // store operations validate before they write.
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for CaseSession {
    fn default() -> Self {
        Self::new()
    }
}

fn respond<T>(result: StoreResult<T>, on_ok: impl FnOnce(T) -> String) -> ActionResponse {
    match result {
        Ok(value) => ActionResponse::success(on_ok(value)),
        Err(err) => ActionResponse::failure(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, ping, CaseSession};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/casenote-logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn duplicate_case_is_reported_not_fatal() {
        let session = CaseSession::new();
        assert!(session.create_case("Donald v County".to_string()).ok);

        let second = session.create_case("Donald v County".to_string());
        assert!(!second.ok);
        assert!(second.message.contains("already exists"));
        assert_eq!(session.case_names(), vec!["Donald v County".to_string()]);
    }

    #[test]
    fn operations_without_case_fail_with_message() {
        let session = CaseSession::new();
        let response = session.add_checklist_item("x".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("no active case"));
        assert!(session.snapshot().is_none());
        assert!(session.generate_document().is_empty());
    }

    #[test]
    fn form_values_are_parsed_at_the_boundary() {
        let session = CaseSession::new();
        session.create_case("A".to_string());

        let bad_role = session.add_person(
            "Judge Dee".to_string(),
            "Judge".to_string(),
            String::new(),
            None,
        );
        assert!(!bad_role.ok);

        let bad_date =
            session.add_timeline_event("2021-13-01".to_string(), "t".to_string(), String::new());
        assert!(!bad_date.ok);

        assert!(session
            .add_violation("4A".to_string(), "Search".to_string(), String::new())
            .ok);
        assert!(session
            .add_person(
                "Jane Doe".to_string(),
                "plaintiff".to_string(),
                String::new(),
                Some("None".to_string()),
            )
            .ok);
        assert!(session
            .add_timeline_event("2021-05-01".to_string(), "Stop".to_string(), String::new())
            .ok);

        let snapshot = session.snapshot().expect("active case");
        assert_eq!(snapshot.people, vec!["Plaintiff: Jane Doe (linked: none)"]);
        assert_eq!(snapshot.violation_choices, vec!["None", "4A"]);
        assert_eq!(snapshot.timeline, vec!["2021-05-01: Stop - "]);
    }

    #[test]
    fn image_upload_and_checklist_flow() {
        let session = CaseSession::new();
        session.create_case("A".to_string());

        let uploaded = session.upload_file("scan.png".to_string(), "png".to_string(), vec![1, 2]);
        assert!(uploaded.ok, "{}", uploaded.message);
        let rejected = session.upload_file("a.txt".to_string(), "txt".to_string(), vec![1]);
        assert!(!rejected.ok);

        session.add_checklist_item("serve".to_string());
        assert!(session.toggle_checklist_item(0, true).ok);
        assert!(!session.toggle_checklist_item(5, true).ok);

        let snapshot = session.snapshot().expect("active case");
        assert_eq!(snapshot.files.len(), 1);
        assert_eq!(snapshot.files[0].name, "scan.png");
        assert!(snapshot.checklist[0].done);
    }

    #[test]
    fn evidence_requires_a_file() {
        let session = CaseSession::new();
        session.create_case("A".to_string());
        assert!(!session.add_evidence(None, "desc".to_string()).ok);
        assert!(session
            .add_evidence(Some("dashcam.jpg".to_string()), "desc".to_string())
            .ok);
        assert_eq!(
            session.snapshot().expect("active case").evidence,
            vec!["dashcam.jpg: desc"]
        );
    }

    #[test]
    fn analyze_theory_uses_keyword_table() {
        let session = CaseSession::new();
        assert!(session
            .analyze_theory("qualified IMMUNITY?".to_string())
            .starts_with("Sovereign immunity"));
    }
}
