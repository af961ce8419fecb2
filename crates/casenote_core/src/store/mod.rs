//! Session case store.
//!
//! # Responsibility
//! - Own every case record for the lifetime of one session.
//! - Act as the sole mutator of case data.
//!
//! # Invariants
//! - Failed operations leave the store unchanged.
//! - Nothing here performs I/O; extracted text is handed in by callers.

pub mod case_store;
