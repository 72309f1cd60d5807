use crate::cli::support::{ids, score, TestStore};
use predicates::prelude::*;

// ============================================================================
// list / candidates
// ============================================================================

struct Seeded {
    store: TestStore,
    doc: String,
    photo: String,
    list: String,
}

/// relevance: doc 0.66, photo 0.62, list 0.50
/// preservation: photo 0.63, doc 0.58, list 0.11
fn seeded() -> Seeded {
    let store = TestStore::new();
    let doc = store.add(
        "Project Documentation",
        &[
            "--content",
            "Docs.",
            "-t",
            "project",
            "-t",
            "documentation",
            "-t",
            "important",
            "-t",
            "reference",
            "-x",
            "importance=0.9",
            "-x",
            "preservation_importance=0.8",
        ],
    );
    let photo = store.add(
        "Family Photo",
        &[
            "-c",
            "image",
            "--content",
            "ref://photos/family.jpg",
            "-t",
            "photo",
            "-t",
            "family",
            "-t",
            "archive",
            "-t",
            "historical",
            "-x",
            "importance=0.7",
            "-x",
            "preservation_importance=0.9",
        ],
    );
    let list = store.add(
        "Shopping List",
        &[
            "-c",
            "note",
            "--content",
            "Milk, eggs",
            "-t",
            "shopping",
            "-t",
            "temporary",
            "-x",
            "importance=0.3",
            "-x",
            "preservation_importance=0.1",
        ],
    );
    Seeded {
        store,
        doc,
        photo,
        list,
    }
}

#[test]
fn test_list_default_sort_by_relevance() {
    let s = seeded();
    let listing = s.store.json(&["list"]);
    assert_eq!(ids(&listing), vec![s.doc, s.photo, s.list]);
}

#[test]
fn test_list_sort_by_preservation() {
    let s = seeded();
    let listing = s.store.json(&["list", "--sort", "preservation"]);
    assert_eq!(ids(&listing), vec![s.photo, s.doc, s.list]);
}

#[test]
fn test_list_filters() {
    let s = seeded();
    let listing = s.store.json(&["list", "--min-relevance", "0.6"]);
    assert_eq!(ids(&listing), vec![s.doc.clone(), s.photo.clone()]);

    let listing = s.store.json(&["list", "--min-preservation", "0.6"]);
    assert_eq!(ids(&listing), vec![s.photo.clone()]);

    let listing = s.store.json(&["list", "--category", "note"]);
    assert_eq!(ids(&listing), vec![s.list.clone()]);

    let listing = s.store.json(&["list", "--tag", "family"]);
    assert_eq!(ids(&listing), vec![s.photo]);
}

#[test]
fn test_list_empty_human() {
    let store = TestStore::new();
    store
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No resources found"));
}

#[test]
fn test_list_records_format() {
    let s = seeded();
    s.store
        .cmd()
        .args(["--format", "records", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H forgetit=1 records=1 mode=list resources=3",
        ))
        .stdout(predicate::str::contains(format!(
            "R {} image relevance=0.62 preservation=0.63 level=1",
            s.photo
        )));
}

#[test]
fn test_candidates_low_threshold() {
    let s = seeded();
    let low = s.store.json(&["candidates", "low", "--threshold", "0.6"]);
    assert_eq!(ids(&low), vec![s.list]);

    let none = s.store.json(&["candidates", "low"]);
    assert!(none.as_array().unwrap().is_empty());
}

#[test]
fn test_candidates_archive_and_deletion() {
    let store = TestStore::new();
    let keep = store.add(
        "Old photo",
        &[
            "-c",
            "image",
            "--content",
            "ref://old.jpg",
            "-t",
            "archive",
            "-t",
            "historical",
            "-x",
            "preservation_importance=1.0",
            "--relevance",
            "0.15",
        ],
    );
    let toss = store.add(
        "Scratch",
        &[
            "-c",
            "note",
            "--content",
            "tmp",
            "-x",
            "preservation_importance=0.0",
            "--relevance",
            "0.05",
        ],
    );

    // Preservation grows with age: 0.66 -> 0.96 for the photo after a year
    store
        .cmd_at("2025-06-01T12:00:00Z")
        .args(["--model", "evolving", "recompute"])
        .assert()
        .success();

    let archive = store.json(&["candidates", "archive"]);
    assert_eq!(ids(&archive), vec![keep.clone()]);
    assert!((score(&archive[0], "preservation") - 0.96).abs() < 1e-9);

    let deletion = store.json(&["candidates", "deletion"]);
    assert!(deletion.as_array().unwrap().is_empty());

    let low = store.json(&["candidates", "low"]);
    assert_eq!(ids(&low), vec![toss, keep]);
}

#[test]
fn test_candidates_deletion_fresh_scratch() {
    let store = TestStore::new();
    let scratch = store.add(
        "Scratch",
        &[
            "-c",
            "note",
            "--content",
            "tmp",
            "-x",
            "preservation_importance=0.0",
            "--relevance",
            "0.05",
        ],
    );
    let deletion = store.json(&["candidates", "deletion"]);
    assert_eq!(ids(&deletion), vec![scratch]);
}

#[test]
fn test_threshold_only_for_low() {
    let store = TestStore::new();
    store
        .cmd()
        .args(["candidates", "archive", "--threshold", "0.5"])
        .assert()
        .code(2);
}
