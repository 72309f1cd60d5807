use crate::cli::support::{forgetit, score, TestStore};
use predicates::prelude::*;

// ============================================================================
// classify / condense / advance / recompute / simulate
// ============================================================================

#[test]
fn test_classify_levels() {
    for (score, expected) in [
        ("0.95", "0 (original)"),
        ("0.8", "1 (light)"),
        ("0.5", "2 (medium)"),
        ("0.3", "3 (heavy)"),
        ("0.15", "4 (severe)"),
        ("0.1", "5 (maximum)"),
    ] {
        forgetit()
            .args(["classify", score])
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("{}\n", expected)));
    }
}

#[test]
fn test_classify_json() {
    let output = forgetit()
        .args(["--format", "json", "classify", "0.45"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["level"], 2);
    assert_eq!(json["level_label"], "medium");
}

#[test]
fn test_condense_note_levels() {
    let content = "one two three four five six seven eight nine ten";
    forgetit()
        .args(["condense", "--category", "note", "--level", "1"])
        .write_stdin(content)
        .assert()
        .success()
        .stdout("one two three four five six seven eight\n");

    forgetit()
        .args(["condense", "--category", "note", "--level", "5"])
        .write_stdin(content)
        .assert()
        .success()
        .stdout("[Note reference]\n");
}

#[test]
fn test_condense_by_score() {
    forgetit()
        .args(["condense", "--category", "image", "--score", "0.3"])
        .write_stdin("ref://photos/beach.jpg")
        .assert()
        .success()
        .stdout("[Image: thumbnail]\n");
}

#[test]
fn test_condense_unknown_category_is_identity() {
    forgetit()
        .args(["condense", "--category", "video", "--level", "5"])
        .write_stdin("raw bytes reference")
        .assert()
        .success()
        .stdout("raw bytes reference\n");
}

#[test]
fn test_condense_email_maximum_keeps_subject() {
    forgetit()
        .args(["condense", "-c", "email", "-l", "5"])
        .write_stdin("From: a@example.com\nTo: b@example.com\nSubject: Lunch\n\nSee you at noon.")
        .assert()
        .success()
        .stdout("Subject: Lunch [Email reference]\n");
}

#[test]
fn test_condense_requires_level_or_score() {
    forgetit()
        .args(["condense", "--category", "note"])
        .write_stdin("x")
        .assert()
        .code(2);
}

#[test]
fn test_advance_evolving_decays() {
    let store = TestStore::new();
    let id = store.add(
        "Supplies",
        &[
            "-c",
            "note",
            "--content",
            "Paper, pens",
            "--relevance",
            "0.8",
        ],
    );
    let before = store.json(&["show", "--peek", &id]);
    let preservation = score(&before, "preservation");

    store
        .cmd()
        .args(["--model", "evolving", "advance", "365"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Advanced 1 resources by 365 days"));

    let after = store.json(&["show", "--peek", &id]);
    let rate = 0.1 * 1.3 * (1.0 - 0.5 * preservation);
    assert!((score(&after, "relevance") - 0.8 * (1.0 - rate)).abs() < 1e-9);
}

#[test]
fn test_advance_rejects_negative_days() {
    let store = TestStore::new();
    store
        .cmd()
        .args(["advance", "--", "-3"])
        .assert()
        .code(2);
}

#[test]
fn test_recompute_reflects_elapsed_time() {
    let store = TestStore::new();
    let id = store.add(
        "Docs",
        &[
            "--content",
            "Docs.",
            "-t",
            "a",
            "-t",
            "b",
            "-t",
            "c",
            "-t",
            "d",
            "-x",
            "importance=0.9",
            "-x",
            "preservation_importance=0.8",
        ],
    );

    store
        .cmd_at("2025-06-01T12:00:00Z")
        .arg("recompute")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recomputed 1 resources (recomputed model)"));

    let resource = store.json(&["show", "--peek", &id]);
    // recency has vanished after a year: 0.2*0.9 + 0.1*0.8
    assert!((score(&resource, "relevance") - 0.26).abs() < 1e-6);
    // age saturated, no preservation tags: 0.3 + 0.14 + 0.24
    assert!((score(&resource, "preservation") - 0.68).abs() < 1e-9);
    assert_eq!(resource["level"], 3);
}

#[test]
fn test_simulate_json() {
    let output = forgetit()
        .args(["--format", "json", "--now", "2024-01-01T00:00:00Z", "simulate"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let resources = json.as_array().unwrap();
    assert_eq!(resources.len(), 4);
    for resource in resources {
        assert_eq!(resource["model"], "evolving");
        let snapshots = resource["snapshots"].as_array().unwrap();
        assert_eq!(snapshots.len(), 5);
        let days: Vec<_> = snapshots.iter().map(|s| s["day"].as_i64().unwrap()).collect();
        assert_eq!(days, vec![0, 30, 90, 180, 360]);
    }
    assert_eq!(resources[0]["category"], "document");
    assert_eq!(resources[3]["category"], "note");
}

#[test]
fn test_simulate_does_not_touch_store() {
    let store = TestStore::new();
    store
        .cmd()
        .arg("simulate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Office Supplies to Order (note)"))
        .stdout(predicate::str::contains("day 360"));
    assert!(!store.path.exists());
}
