//! Read-side projections over case records.
//!
//! # Responsibility
//! - Render the summary document and the per-section display listings.
//! - Answer legal-theory prompts from the fixed keyword table.
//!
//! # Invariants
//! - Everything here is a pure function of its inputs; nothing mutates a case.

pub mod summary;
pub mod theory;
pub mod view;
