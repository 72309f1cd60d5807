use crate::cli::support::{forgetit, TestStore};
use predicates::prelude::*;

// ============================================================================
// Help, exit codes, and structured errors
// ============================================================================

#[test]
fn test_help_flag() {
    forgetit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: forgetit"))
        .stdout(predicate::str::contains("candidates"))
        .stdout(predicate::str::contains("simulate"));
}

#[test]
fn test_version_flag() {
    forgetit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("forgetit"));
}

#[test]
fn test_no_command_prints_banner() {
    forgetit()
        .assert()
        .success()
        .stdout(predicate::str::contains("forgetit --help"));
}

#[test]
fn test_out_of_range_context_is_usage_error() {
    let store = TestStore::new();
    store
        .cmd()
        .args(["add", "Bad", "--content", "x", "-x", "importance=1.5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid importance"));
    assert!(!store.path.exists());
}

#[test]
fn test_corrupt_store_is_data_error() {
    let store = TestStore::new();
    std::fs::write(&store.path, "{ not json").unwrap();
    store
        .cmd()
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid store file"));
}

#[test]
fn test_unknown_resource_json_envelope() {
    let store = TestStore::new();
    let output = store
        .cmd()
        .args(["--format", "json", "access", "fg-missing"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "resource_not_found");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_parse_error_json_envelope() {
    let output = forgetit()
        .args(["--format", "json", "classify", "high"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_invalid_config_is_usage_error() {
    let store = TestStore::new();
    let config = store.dir.path().join("engine.toml");
    std::fs::write(&config, "[dynamics]\nfloor = 0.9\nceiling = 0.5\n").unwrap();
    store
        .cmd()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("dynamics bounds"));
}

#[test]
fn test_config_model_selects_evolving() {
    let store = TestStore::new();
    let config = store.dir.path().join("config.toml");
    std::fs::write(&config, "model = \"evolving\"\n").unwrap();

    let id = store.add("Note", &["-c", "note", "--content", "x", "--relevance", "0.5"]);
    let result = store.json(&["--config", config.to_str().unwrap(), "access", &id]);
    // evolving boost: 0.5 + 0.2 * 0.5
    assert!((result["relevance"].as_f64().unwrap() - 0.6).abs() < 1e-12);
}
