use crate::cli::support::{score, TestStore};
use predicates::prelude::*;

// ============================================================================
// add / show / edit / delete / access
// ============================================================================

fn add_project_doc(store: &TestStore) -> String {
    store.add(
        "Important Project Documentation",
        &[
            "--category",
            "document",
            "--content",
            "This is a detailed documentation of an important project.",
            "--tag",
            "project",
            "--tag",
            "documentation",
            "--tag",
            "important",
            "--tag",
            "reference",
            "--context",
            "importance=0.9",
            "--context",
            "preservation_importance=0.8",
        ],
    )
}

#[test]
fn test_add_computes_scores() {
    let store = TestStore::new();
    let id = add_project_doc(&store);
    assert!(id.starts_with("fg-"));

    let resource = store.json(&["show", "--peek", &id]);
    assert_eq!(resource["id"], id.as_str());
    assert_eq!(resource["category"], "document");
    assert_eq!(resource["access_count"], 0);
    assert!((score(&resource, "relevance") - 0.66).abs() < 1e-9);
    assert!((score(&resource, "preservation") - 0.58).abs() < 1e-9);
    assert_eq!(resource["level"], 1);
    assert_eq!(resource["level_label"], "light");
    assert_eq!(resource["context"]["importance"], 0.9);
}

#[test]
fn test_add_reads_content_from_stdin() {
    let store = TestStore::new();
    let output = store
        .cmd()
        .args(["--quiet", "add", "Shopping List", "--category", "note"])
        .write_stdin("Milk, eggs, bread, cheese, apples")
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = String::from_utf8_lossy(&output.stdout).trim().to_string();

    let resource = store.json(&["show", "--peek", &id]);
    assert_eq!(resource["content"], "Milk, eggs, bread, cheese, apples");
    assert_eq!(resource["category"], "note");
}

#[test]
fn test_add_human_output() {
    let store = TestStore::new();
    store
        .cmd()
        .args(["add", "Plain", "--content", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created fg-"))
        .stdout(predicate::str::contains("Plain"));
}

#[test]
fn test_show_logs_view_and_peek_does_not() {
    let store = TestStore::new();
    let id = add_project_doc(&store);

    store
        .cmd()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Important Project Documentation"))
        .stdout(predicate::str::contains("accesses: 1"));

    let peeked = store.json(&["show", "--peek", &id]);
    assert_eq!(peeked["access_count"], 1);

    let history = store.json(&["history", &id]);
    assert_eq!(history["events"].as_array().unwrap().len(), 1);
    assert_eq!(history["events"][0]["kind"], "view");
}

#[test]
fn test_show_condensed_content_at_level() {
    let store = TestStore::new();
    let id = store.add(
        "Old note",
        &[
            "--category",
            "note",
            "--content",
            "one two three four five six seven eight nine ten",
            "--relevance",
            "0.05",
        ],
    );

    let resource = store.json(&["show", "--peek", &id]);
    assert_eq!(resource["level"], 5);
    assert_eq!(resource["condensed"], "[Note reference]");
    assert_eq!(
        resource["content"],
        "one two three four five six seven eight nine ten"
    );
}

#[test]
fn test_edit_updates_attributes() {
    let store = TestStore::new();
    let id = add_project_doc(&store);

    let updated = store.json(&[
        "edit",
        &id,
        "--title",
        "Project Docs v2",
        "--tag",
        "archive",
    ]);
    assert_eq!(updated["title"], "Project Docs v2");
    assert_eq!(updated["tags"], serde_json::json!(["archive"]));
    assert_eq!(updated["access_count"], 1);

    let history = store.json(&["history", &id]);
    assert_eq!(history["events"][0]["kind"], "edit");
}

#[test]
fn test_edit_without_changes_is_usage_error() {
    let store = TestStore::new();
    let id = add_project_doc(&store);
    store
        .cmd()
        .args(["edit", &id])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nothing to edit"));
}

#[test]
fn test_delete_then_show_is_not_found() {
    let store = TestStore::new();
    let id = add_project_doc(&store);

    store
        .cmd()
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    store
        .cmd()
        .args(["--format", "json", "show", &id])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("resource_not_found"));
}

#[test]
fn test_access_kind_recorded() {
    let store = TestStore::new();
    let id = add_project_doc(&store);

    let result = store.json(&["access", &id, "--kind", "share"]);
    assert_eq!(result["access_kind"], "share");
    assert_eq!(result["access_count"], 1);
    assert!((score(&result, "previous_relevance") - 0.66).abs() < 1e-9);
    // frequency 1/10 adds 0.03
    assert!((score(&result, "relevance") - 0.69).abs() < 1e-9);

    store
        .cmd()
        .args(["history", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("share"));
}

#[test]
fn test_snapshot_captures_current_level() {
    let store = TestStore::new();
    let id = add_project_doc(&store);

    let snapshot = store.json(&["snapshot", &id]);
    assert_eq!(snapshot["level"], 1);
    assert_eq!(snapshot["timestamp"], "2024-06-01T12:00:00Z");

    let history = store.json(&["history", &id]);
    assert_eq!(history["snapshots"].as_array().unwrap().len(), 1);
}
