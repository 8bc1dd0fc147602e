//! Integration tests for `rshed create`

mod common;

use common::{stderr, stdout, TestEnv};
use rshed::config::defaults::METADATA_FILE;

#[test]
fn test_create_materializes_playground() {
    let env = TestEnv::new();
    let out = env.run_ok(&["create", "-n", "demo", "-t", "cli", "--tags", "rust,cli"]);

    assert!(out.contains("Created playground 'demo'"), "stdout: {out}");
    let dir = env.projects_dir().join("demo");
    assert!(dir.join(METADATA_FILE).is_file());
    assert!(dir.join("Cargo.toml").is_file());
    assert!(dir.join("src/main.rs").is_file());
    assert!(dir.join("src/cli.rs").is_file());

    let project = env.registry().get("demo").unwrap();
    assert_eq!(project.template, "cli");
    assert_eq!(project.tags, vec!["rust", "cli"]);
    assert_eq!(project.created, project.last_accessed);
}

#[test]
fn test_create_keeps_tags_verbatim() {
    let env = TestEnv::new();
    env.run_ok(&["create", "-n", "spaced", "--tags", "a, b"]);

    assert_eq!(env.registry().get("spaced").unwrap().tags, vec!["a", " b"]);
}

#[test]
fn test_create_defaults_to_basic_template() {
    let env = TestEnv::new();
    env.run_ok(&["create", "-n", "plain"]);
    assert_eq!(env.registry().get("plain").unwrap().template, "basic");
}

#[test]
fn test_create_unknown_template_falls_back() {
    let env = TestEnv::new();
    let output = env.run(&["create", "-n", "odd", "-t", "fortran"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Template 'fortran' not found"));
    assert_eq!(env.registry().get("odd").unwrap().template, "basic");
}

#[test]
fn test_create_duplicate_fails() {
    let env = TestEnv::new();
    env.run_ok(&["create", "-n", "twice"]);

    let output = env.run(&["create", "-n", "twice"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"), "stderr: {}", stderr(&output));
}

#[test]
fn test_create_rejects_path_names() {
    let env = TestEnv::new();
    let output = env.run(&["create", "-n", "../escape"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid playground name"));
    assert!(!env.data_dir().join("escape").exists());
}

#[test]
fn test_create_json_output() {
    let env = TestEnv::new();
    let output = env.run(&["--json", "create", "-n", "js", "--tags", "a"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["name"], "js");
    assert_eq!(value["template"], "basic");
    assert_eq!(value["tags"], serde_json::json!(["a"]));
    assert!(value["lastAccessed"].is_string());
}
