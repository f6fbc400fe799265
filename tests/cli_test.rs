use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_claude-session-usage"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_no_argument_prints_usage_and_fails() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("Usage: claude-session-usage <project-dir>\n"));
}

#[test]
fn test_hyphen_named_project_dir_relative_to_cwd() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("-Users-me-app");
    fs::create_dir(&project).unwrap();
    fs::write(
        project.join("a.jsonl"),
        r#"{"type":"user","timestamp":"2025-10-18T10:00:00Z"}"#,
    )
    .unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_claude-session-usage"))
        .arg("-Users-me-app")
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("| 1 | `a` | 2025-10-18 |"));

    let out = Command::new(env!("CARGO_BIN_EXE_claude-session-usage"))
        .arg("-Users-me-missing")
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("Error: directory not found: -Users-me-missing"));
}

#[test]
fn test_missing_directory_fails_without_table() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");
    let out = run(&[missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.starts_with("Error: directory not found: "));
    assert!(!text.contains("| # |"));
}

#[test]
fn test_empty_directory_succeeds_without_table() {
    let tmp = TempDir::new().unwrap();
    let out = run(&[tmp.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "No session files found.\n");
}

#[test]
fn test_report_written_to_stdout() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("b-second.jsonl"),
        r#"{"type":"user","timestamp":"2025-10-19T08:00:00Z"}
{"type":"assistant","timestamp":"2025-10-19T09:30:00Z","message":{"usage":{"input_tokens":10,"output_tokens":20,"cache_read_input_tokens":2000000,"cache_creation_input_tokens":3000}}}
"#,
    )
    .unwrap();
    fs::write(
        tmp.path().join("a-first.jsonl"),
        r#"{"type":"user","timestamp":"2025-10-18T10:00:00Z"}"#,
    )
    .unwrap();

    let out = run(&[tmp.path().to_str().unwrap(), "ignored-extra"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[3].starts_with("| 1 | `a-first` | 2025-10-18 |"));
    assert!(lines[4].starts_with("| 2 | `b-second` | 2025-10-19 |   1h 30m |"));
    assert!(lines[5].contains("**    2.0M**"));
}

#[test]
fn test_malformed_record_aborts_run() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.jsonl"), "{\"type\":\"user\"}\n").unwrap();
    fs::write(tmp.path().join("b.jsonl"), "{broken\n").unwrap();

    let out = run(&[tmp.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("malformed record"));
    assert!(err.contains("b.jsonl:1"));
}
