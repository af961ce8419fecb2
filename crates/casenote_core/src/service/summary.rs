//! Summary document generation.
//!
//! Sections are always emitted in the order People, Violations, Timeline with
//! one line per entry, each section in insertion order.

use crate::model::case::CaseRecord;
use crate::service::view::resolve_violation_link;

/// Renders the editable summary document for one case.
pub fn render_summary(record: &CaseRecord) -> String {
    let mut out = format!("Case: {}\n", record.name);

    out.push_str("\nPeople:\n");
    for person in &record.people {
        let link = resolve_violation_link(record, person);
        match link.display_code() {
            Some(code) => out.push_str(&format!(
                "- {}: {} [violation: {code}]\n",
                person.role, person.name
            )),
            None => out.push_str(&format!("- {}: {} [unlinked]\n", person.role, person.name)),
        }
    }

    out.push_str("\nViolations:\n");
    for violation in &record.violations {
        out.push_str(&format!("- {}: {}\n", violation.code, violation.title));
    }

    out.push_str("\nTimeline:\n");
    for event in &record.timeline {
        out.push_str(&format!("- {}: {}\n", event.date, event.title));
    }

    out
}
