use casenote_core::{
    classify_theory, parse_event_date, resolve_violation_link, timeline_display_order,
    CaseListing, CaseStore, PersonRole, ViolationLink,
};

fn populated_store() -> CaseStore {
    let mut store = CaseStore::new();
    store.create_case("Doe v County").unwrap();
    store
        .add_violation("42 USC 1983", "Deprivation of rights", "unlawful stop")
        .unwrap();
    store
        .add_person(
            "Jane Doe",
            PersonRole::Plaintiff,
            "",
            Some("42 USC 1983".to_string()),
        )
        .unwrap();
    store
        .add_person("Officer Roe", PersonRole::Defendant, "", None)
        .unwrap();
    store
        .add_person("Sam Poe", PersonRole::Witness, "", Some("GONE".to_string()))
        .unwrap();
    store
        .add_timeline_event(parse_event_date("2021-05-01").unwrap(), "Stop", "traffic stop")
        .unwrap();
    store
        .add_timeline_event(parse_event_date("2019-01-01").unwrap(), "Complaint", "prior")
        .unwrap();
    store
}

#[test]
fn summary_document_has_fixed_section_order() {
    let store = populated_store();
    let document = store.render_summary_document().unwrap();

    let expected = "Case: Doe v County\n\
        \n\
        People:\n\
        - Plaintiff: Jane Doe [violation: 42 USC 1983]\n\
        - Defendant: Officer Roe [unlinked]\n\
        - Witness: Sam Poe [unlinked]\n\
        \n\
        Violations:\n\
        - 42 USC 1983: Deprivation of rights\n\
        \n\
        Timeline:\n\
        - 2021-05-01: Stop\n\
        - 2019-01-01: Complaint\n";
    assert_eq!(document, expected);
}

#[test]
fn summary_document_keeps_timeline_insertion_order() {
    let store = populated_store();
    let document = store.render_summary_document().unwrap();
    let late = document.find("- 2021-05-01: Stop").unwrap();
    let early = document.find("- 2019-01-01: Complaint").unwrap();
    assert!(late < early);
}

#[test]
fn summary_document_is_idempotent() {
    let store = populated_store();
    let first = store.render_summary_document().unwrap();
    let second = store.render_summary_document().unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn summary_of_empty_case_lists_headers_only() {
    let mut store = CaseStore::new();
    store.create_case("Empty").unwrap();
    assert_eq!(
        store.render_summary_document().unwrap(),
        "Case: Empty\n\nPeople:\n\nViolations:\n\nTimeline:\n"
    );
}

#[test]
fn timeline_display_is_sorted_while_storage_is_not() {
    let store = populated_store();
    let record = store.active_case().unwrap();

    let displayed = timeline_display_order(record)
        .into_iter()
        .map(|event| event.date.as_str())
        .collect::<Vec<_>>();
    assert_eq!(displayed, vec!["2019-01-01", "2021-05-01"]);
    assert_eq!(record.timeline[0].date, "2021-05-01");
}

#[test]
fn timeline_ties_keep_insertion_order() {
    let mut store = CaseStore::new();
    store.create_case("ties").unwrap();
    let day = parse_event_date("2020-02-02").unwrap();
    store.add_timeline_event(day, "first", "").unwrap();
    store
        .add_timeline_event(parse_event_date("2020-01-01").unwrap(), "earlier", "")
        .unwrap();
    store.add_timeline_event(day, "second", "").unwrap();

    let titles = timeline_display_order(store.active_case().unwrap())
        .into_iter()
        .map(|event| event.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["earlier", "first", "second"]);
}

#[test]
fn violation_links_resolve_at_read_time() {
    let store = populated_store();
    let record = store.active_case().unwrap();

    match resolve_violation_link(record, &record.people[0]) {
        ViolationLink::Linked(violation) => assert_eq!(violation.title, "Deprivation of rights"),
        other => panic!("expected linked violation, got {other:?}"),
    }
    assert_eq!(
        resolve_violation_link(record, &record.people[1]),
        ViolationLink::Unlinked
    );
    assert_eq!(
        resolve_violation_link(record, &record.people[2]),
        ViolationLink::Unresolved("GONE")
    );
}

#[test]
fn listing_renders_every_section() {
    let mut store = populated_store();
    store.ingest_file("complaint.pdf", "x".repeat(1300)).unwrap();
    store.add_checklist_item("serve summons").unwrap();
    store.toggle_checklist_item(0, true).unwrap();
    store.add_evidence("dashcam.png", "frame 12").unwrap();

    let listing = CaseListing::from_record(store.active_case().unwrap());
    assert_eq!(listing.case_name, "Doe v County");
    assert_eq!(listing.files.len(), 1);
    assert!(listing.files[0].preview.ends_with("..."));
    assert_eq!(listing.violations, vec!["42 USC 1983 - Deprivation of rights"]);
    assert_eq!(
        listing.people,
        vec![
            "Plaintiff: Jane Doe (linked: 42 USC 1983)",
            "Defendant: Officer Roe (linked: none)",
            "Witness: Sam Poe (linked: GONE (unresolved))",
        ]
    );
    assert_eq!(
        listing.timeline,
        vec!["2019-01-01: Complaint - prior", "2021-05-01: Stop - traffic stop"]
    );
    assert!(listing.checklist[0].done);
    assert_eq!(listing.evidence, vec!["dashcam.png: frame 12"]);
}

#[test]
fn theory_classification_ignores_case() {
    let immunity = classify_theory("Does sovereign IMMUNITY apply here?");
    assert!(immunity.starts_with("Sovereign immunity"));

    let conspiracy = classify_theory("They had a Conspiracy");
    assert!(conspiracy.starts_with("Prove shared intent"));

    let fallback = classify_theory("What about due process?");
    assert!(fallback.starts_with("No hallucinations"));
}

#[test]
fn theory_responses_use_exact_canned_text() {
    assert_eq!(
        classify_theory("conspiracy"),
        "Prove shared intent, agreement, and overt act. Don\'t guess \u{2014} prove."
    );
    assert_eq!(
        classify_theory("anything else"),
        "No hallucinations. Stick to the statutes. Play devil\u{2019}s advocate, but anchor it in law."
    );
}
