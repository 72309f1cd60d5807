use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::PathBuf;
use tempfile::TempDir;

/// Fixed evaluation instant so scores are deterministic
pub const NOW: &str = "2024-06-01T12:00:00Z";

/// Get a Command for forgetit
pub fn forgetit() -> Command {
    let mut cmd = cargo_bin_cmd!("forgetit");
    cmd.env_remove("FORGETIT_STORE")
        .env_remove("FORGETIT_CONFIG")
        .env_remove("FORGETIT_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// A store file inside its own temporary directory
pub struct TestStore {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("forgetit.json");
        TestStore { dir, path }
    }

    /// Command bound to this store, the fixed clock, and an empty config dir
    pub fn cmd(&self) -> Command {
        self.cmd_at(NOW)
    }

    pub fn cmd_at(&self, now: &str) -> Command {
        let mut cmd = forgetit();
        cmd.env("FORGETIT_CONFIG_DIR", self.dir.path())
            .arg("--store")
            .arg(&self.path)
            .args(["--now", now]);
        cmd
    }

    /// Add a resource and return its id
    pub fn add(&self, title: &str, args: &[&str]) -> String {
        let output = self
            .cmd()
            .args(["--quiet", "add", title])
            .args(args)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Run a command with `--format json` and parse stdout
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .cmd()
            .args(["--format", "json"])
            .args(args)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

/// Float field of a JSON object
pub fn score(value: &serde_json::Value, field: &str) -> f64 {
    value[field].as_f64().unwrap()
}

/// Ids of a JSON resource listing, in order
pub fn ids(listing: &serde_json::Value) -> Vec<String> {
    listing
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}
