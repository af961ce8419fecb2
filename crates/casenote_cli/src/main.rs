//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `casenote_core` linkage without the Flutter/FFI runtime.
//! - Print a deterministic demo summary document.
//!
//! Set `CASENOTE_LOG_DIR` to an absolute path to also write session logs.

use casenote_core::{
    classify_theory, default_log_level, init_logging, CaseStore, PersonRole, StoreResult,
};
use chrono::NaiveDate;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "CASENOTE_LOG_DIR";

fn main() -> ExitCode {
    println!("casenote_core ping={}", casenote_core::ping());
    println!("casenote_core version={}", casenote_core::core_version());

    if let Ok(raw) = std::env::var(LOG_DIR_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            if let Err(err) = init_logging(default_log_level(), trimmed) {
                eprintln!("logging disabled: {err}");
            }
        }
    }

    match demo_document() {
        Ok(document) => {
            println!();
            print!("{document}");
            println!();
            println!("theory: {}", classify_theory("Is there a conspiracy here?"));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn demo_document() -> StoreResult<String> {
    let mut store = CaseStore::new();
    store.create_case("Demo v County")?;
    store.add_violation("42 USC 1983", "Deprivation of rights", "")?;
    store.add_person(
        "Pat Demo",
        PersonRole::Plaintiff,
        "",
        Some("42 USC 1983".to_string()),
    )?;
    store.add_person("County Clerk", PersonRole::Defendant, "", None)?;
    if let Some(date) = NaiveDate::from_ymd_opt(2021, 5, 1) {
        store.add_timeline_event(date, "Records request denied", "")?;
    }
    if let Some(date) = NaiveDate::from_ymd_opt(2019, 1, 1) {
        store.add_timeline_event(date, "Records request filed", "")?;
    }
    store.render_summary_document()
}
