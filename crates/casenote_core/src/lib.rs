//! Core domain logic for CaseNote.
//! This crate owns the session case store and every consistency rule on it.

pub mod extract;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use extract::{
    ExtractError, ExtractedUpload, ExtractorRegistry, FileKind, TextExtractor, IMAGE_PLACEHOLDER,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::case::{CaseId, CaseRecord};
pub use model::entry::{
    format_event_date, parse_event_date, ChecklistItem, EventDateError, Evidence, Person,
    PersonRole, PersonRoleParseError, TimelineEvent, UploadedFile, Violation,
};
pub use service::summary::render_summary;
pub use service::theory::{classify_theory, classify_theory_topic, TheoryTopic};
pub use service::view::{
    file_preview, resolve_violation_link, timeline_display_order, CaseListing, ChecklistLine,
    FilePreview, ViolationLink, FILE_PREVIEW_MAX_CHARS,
};
pub use store::case_store::{CaseStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
