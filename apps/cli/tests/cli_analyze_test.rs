//! Integration tests for the `autopilot` commands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = r#"
[[servers]]
name = "filesystem"

[[servers.capabilities]]
name = "read_file"
category = "file_management"

[[servers]]
name = "writer"

[[servers.capabilities]]
name = "draft_text"
category = "content_creation"
"#;

/// Command isolated from any real user or project config.
fn autopilot(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("autopilot").unwrap();
    cmd.current_dir(home.path()).env("HOME", home.path());
    cmd
}

#[test]
fn test_analyze_simple_task() {
    let temp_dir = TempDir::new().unwrap();

    autopilot(&temp_dir)
        .arg("analyze")
        .arg("List the files in the current directory")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task Analysis"))
        .stdout(predicate::str::contains("Complexity: SIMPLE"))
        .stdout(predicate::str::contains("Pattern: direct"))
        .stdout(predicate::str::contains("Required servers: none"));
}

#[test]
fn test_analyze_with_server_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = temp_dir.path().join("servers.toml");
    fs::write(&catalog, CATALOG).unwrap();

    autopilot(&temp_dir)
        .arg("analyze")
        .arg("Write a professional project description and keep improving it until it's excellent")
        .arg("--servers")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pattern: evaluator_optimizer"))
        .stdout(predicate::str::contains("Required servers: writer"));
}

#[test]
fn test_analyze_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let assert = autopilot(&temp_dir)
        .arg("analyze")
        .arg("Analyze this project from both technical and business perspectives")
        .arg("--json")
        .assert()
        .success();

    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["recommendation"]["pattern"], "parallel");
    assert_eq!(json["analysis"]["parallelizable"], true);
    assert!(json["recommendation"]["fallback_patterns"].is_array());
}

#[test]
fn test_analyze_missing_catalog_fails() {
    let temp_dir = TempDir::new().unwrap();

    autopilot(&temp_dir)
        .arg("analyze")
        .arg("List the files")
        .arg("--servers")
        .arg("does-not-exist.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load server catalog"));
}

#[test]
fn test_patterns_lists_every_pattern() {
    let temp_dir = TempDir::new().unwrap();

    let mut assert = autopilot(&temp_dir).arg("patterns").arg("List the files").assert().success();
    for pattern in ["direct", "parallel", "router", "swarm", "orchestrator", "evaluator_optimizer"] {
        assert = assert.stdout(predicate::str::contains(pattern));
    }
}

#[test]
fn test_patterns_does_not_resolve_servers() {
    let temp_dir = TempDir::new().unwrap();

    autopilot(&temp_dir)
        .arg("patterns")
        .arg("Search the web and save to a file")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stderr(predicate::str::contains("No available server").not());
}

#[test]
fn test_analyze_without_catalog_warns_about_missing_servers() {
    let temp_dir = TempDir::new().unwrap();

    autopilot(&temp_dir)
        .arg("analyze")
        .arg("Search the web and save to a file")
        .assert()
        .success()
        .stderr(predicate::str::contains("No available server"));
}

#[test]
fn test_explicit_config_is_applied() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "[base_times]\ndirect = 25.0\n").unwrap();

    autopilot(&temp_dir)
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg("List the files in the current directory")
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated execution time: 25s"));
}

#[test]
fn test_local_config_is_discovered() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".autopilot");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("decision.toml"), "[base_times]\ndirect = 40.0\n").unwrap();

    autopilot(&temp_dir)
        .arg("analyze")
        .arg("List the files in the current directory")
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated execution time: 40s"));
}

#[test]
fn test_invalid_discovered_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".autopilot");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("decision.toml"), "base_confidence = 2.0\n").unwrap();

    autopilot(&temp_dir)
        .arg("analyze")
        .arg("List the files")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load decision config"));
}

#[test]
fn test_validate_config_success() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("decision.toml");
    fs::write(&config, "max_fallbacks = 3\nfallback_threshold = 0.25\n").unwrap();

    autopilot(&temp_dir)
        .arg("validate-config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("up to 3 above 0.25"));
}

#[test]
fn test_validate_config_rejects_bad_priority() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("decision.toml");
    fs::write(&config, "pattern_priority = [\"direct\", \"direct\"]\n").unwrap();

    autopilot(&temp_dir)
        .arg("validate-config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("pattern_priority"));
}

#[test]
fn test_no_command_prints_help() {
    let temp_dir = TempDir::new().unwrap();

    autopilot(&temp_dir).assert().success().stdout(predicate::str::contains("Usage"));
}
