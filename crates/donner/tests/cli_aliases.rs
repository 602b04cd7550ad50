//! Integration tests for `donner aliases`.
//!
//! stdout must contain only the alias block so it can be fed to `eval`.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SINGLE_COMMAND_CONFIG: &str = r#"
strategies:
  default:
    handler: docker_run
commands:
  build: x
"#;

fn write_config(dir: &Path, contents: &str) {
    fs::write(dir.join(".donner.yml"), contents).expect("Failed to write config");
}

fn run_donner(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_donner"))
        .current_dir(dir)
        .env_remove("DONNER_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute donner")
}

#[test]
fn test_aliases_exact_output() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), SINGLE_COMMAND_CONFIG);

    let output = run_donner(temp_dir.path(), &["aliases"]);

    assert!(
        output.status.success(),
        "donner aliases failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\nalias build='donner run build'\n\n\
         # copy and paste the output into your terminal or run\n\
         #  eval $(donner aliases)\n"
    );
}

#[test]
fn test_aliases_strict_flag() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), SINGLE_COMMAND_CONFIG);

    let output = run_donner(temp_dir.path(), &["aliases", "--strict"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("alias build='donner run --strict build'"));
    assert!(stdout.contains("#  eval $(donner aliases --strict)"));
}

#[test]
fn test_aliases_flag_order_is_fixed() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(
        temp_dir.path(),
        r#"
strategies:
  run:
    handler: docker_compose_run
    service: app
default_strategy: run
commands:
  rails: run
  rake: run
"#,
    );

    let output = run_donner(temp_dir.path(), &["aliases", "--fallback", "--strict"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("alias rails='donner run --strict --fallback rails'"));
    assert!(stdout.contains("alias rake='donner run --strict --fallback rake'"));
    assert!(stdout.contains("#  eval $(donner aliases --strict --fallback)"));
}

#[test]
fn test_aliases_output_is_stable() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(
        temp_dir.path(),
        r#"
strategies:
  run:
    handler: docker_compose_run
commands:
  rspec: run
  rails: run
  bundle: run
  rake: run
"#,
    );

    let first = run_donner(temp_dir.path(), &["aliases"]);
    let second = run_donner(temp_dir.path(), &["aliases"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_aliases_verbose_logs_stay_off_stdout() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), SINGLE_COMMAND_CONFIG);

    let output = run_donner(temp_dir.path(), &["-v", "aliases"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, got: {}",
        stderr
    );
}

#[test]
fn test_aliases_invalid_config_prints_nothing() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "strategies: {}\ncommands: {}\n");

    let output = run_donner(temp_dir.path(), &["aliases"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no partial output expected");
    assert!(
        stderr.contains("doesn't contain any strategies"),
        "Expected strategies error in stderr, got: {}",
        stderr
    );
}

#[test]
fn test_aliases_config_error_reported_once() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "strategies: {}\ncommands: {}\n");

    let output = run_donner(temp_dir.path(), &["aliases"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    let error_events = stderr
        .lines()
        .filter(|line| line.contains(r#""level":"ERROR""#))
        .count();
    let messages = stderr.lines().filter(|line| line.starts_with("❌")).count();

    assert_eq!(error_events, 1, "Expected one ERROR event, got: {}", stderr);
    assert_eq!(messages, 1, "Expected one error message, got: {}", stderr);
}

#[test]
fn test_aliases_handlerless_strategy_is_unknown_handler() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(
        temp_dir.path(),
        "strategies:\n  app:\n    service: web\ncommands:\n  build: app\n",
    );

    let output = run_donner(temp_dir.path(), &["aliases"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("unknown handler ''"), "got: {}", stderr);
}

#[test]
fn test_aliases_unknown_handler() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_config(
        temp_dir.path(),
        "strategies:\n  app:\n    handler: podman_run\ncommands:\n  build: app\n",
    );

    let output = run_donner(temp_dir.path(), &["aliases"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("unknown handler 'podman_run'"), "got: {}", stderr);
}

#[test]
fn test_aliases_missing_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_donner(temp_dir.path(), &["aliases"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Config file not found"), "got: {}", stderr);
}

#[test]
fn test_aliases_file_override() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let other = temp_dir.path().join("other.yml");
    fs::write(&other, SINGLE_COMMAND_CONFIG).expect("Failed to write config");

    let output = run_donner(
        temp_dir.path(),
        &["aliases", "--file", other.to_str().expect("utf-8 temp path")],
    );

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("alias build="));
}

#[test]
fn test_aliases_env_override() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let other = temp_dir.path().join("env.yml");
    fs::write(&other, SINGLE_COMMAND_CONFIG).expect("Failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_donner"))
        .current_dir(temp_dir.path())
        .env("DONNER_CONFIG", &other)
        .arg("aliases")
        .output()
        .expect("Failed to execute donner");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("alias build="));
}
