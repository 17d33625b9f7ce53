//! Runs the compose-services binary against files in a temporary directory.

#![cfg(feature = "cli")]

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const COMPOSE: &str = r#"
services:
  web:
    image: nginx
    ports: ["80:80"]
  db:
    labels:
      tier: backend
"#;

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_compose-services"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run compose-services")
}

fn read_json(path: std::path::PathBuf) -> serde_json::Value {
    let text = fs::read_to_string(path).expect("Failed to read output");
    serde_json::from_str(&text).expect("Output is not JSON")
}

#[test]
fn test_positional_arguments() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stack.yml"), COMPOSE).unwrap();

    let output = run_in(&dir, &["stack.yml", "out.json"]);

    assert!(output.status.success());
    let value = read_json(dir.path().join("out.json"));
    assert_eq!(value["web"]["ports"], serde_json::json!(["80:80"]));
    assert_eq!(value["db"]["labels"]["tier"], "backend");
}

#[test]
fn test_fixed_paths_without_arguments() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("docker-compose.yml"), COMPOSE).unwrap();

    let output = run_in(&dir, &[]);

    assert!(output.status.success());
    let value = read_json(dir.path().join("services.json"));
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn test_missing_input_exits_with_io_code() {
    let dir = TempDir::new().unwrap();

    let output = run_in(&dir, &["nope.yml", "out.json"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(!dir.path().join("out.json").exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.yml"));
}

#[test]
fn test_invalid_yaml_exits_with_parse_code() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("docker-compose.yml"), "services: [unclosed\n").unwrap();

    let output = run_in(&dir, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("services.json").exists());
}

#[test]
fn test_same_input_and_output_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("docker-compose.yml"), COMPOSE).unwrap();

    let output = run_in(&dir, &["docker-compose.yml", "./docker-compose.yml"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        fs::read_to_string(dir.path().join("docker-compose.yml")).unwrap(),
        COMPOSE
    );
}

#[test]
fn test_config_file_supplies_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app.yml"), COMPOSE).unwrap();
    fs::write(
        dir.path().join("compose-services.toml"),
        "[extract]\ninput_path = \"app.yml\"\n\n[load]\noutput_path = \"app.json\"\n",
    )
    .unwrap();

    let output = run_in(&dir, &["--config", "compose-services.toml"]);

    assert!(output.status.success());
    assert!(dir.path().join("app.json").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("docker-compose.yml"), COMPOSE).unwrap();

    let output = run_in(&dir, &["--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("web: 0 labels, 1 ports"));
    assert!(stdout.contains("db: 1 labels, 0 ports"));
    assert!(!dir.path().join("services.json").exists());
}
