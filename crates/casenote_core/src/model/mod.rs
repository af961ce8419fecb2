//! Case domain model.
//!
//! # Responsibility
//! - Define the case record and the six entry kinds it owns.
//! - Parse boundary values (roles, calendar dates) into typed fields.
//!
//! # Invariants
//! - Every entry is owned by exactly one `CaseRecord`.
//! - Entries are append-only; `ChecklistItem::done` is the only mutable field.
//!
//! # See also
//! - crate::store::case_store

pub mod case;
pub mod entry;
