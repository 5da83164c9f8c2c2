//! End-to-end tests for the mtg binary.
//!
//! Every test uses `--dry-run`, `--list` or a failing path so no opener is
//! ever spawned.

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const ENV: &str = "\
# meetings
MEET_DAILY=https://meet.google.com/abc-defg-hij
ZOOM_Retro=\"https://zoom.us/j/1234567890?pwd=AbC123\"
ZOOM_BROKEN=https://example.com/nope
LAUNCH_VIDEO_CMD=mtg-test-browser-that-does-not-exist
";

const DEFAULTS: &str = "MEET_DAILY=\nLAUNCH_VIDEO_CMD=\n";

fn setup(env: &str, defaults: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), env).unwrap();
    fs::write(dir.path().join(".env.defaults"), defaults).unwrap();
    dir
}

fn mtg(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mtg"))
        .args(args)
        .env("MTG_HOME", home)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run mtg")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_list_meetings() {
    let dir = setup(ENV, DEFAULTS);
    let output = mtg(dir.path(), &["--list"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "broken  zoom\ndaily   google-meet\nretro   zoom\n"
    );
}

#[test]
fn test_dry_run_zoom_deep_link() {
    let dir = setup(ENV, DEFAULTS);
    let output = mtg(dir.path(), &["retro", "--dry-run"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output)
        .trim_end()
        .ends_with(" zoommtg://zoom.us/join?action=join&confno=1234567890&pwd=AbC123"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_dry_run_meet_falls_back_to_default_opener() {
    let dir = setup(ENV, DEFAULTS);
    let output = mtg(dir.path(), &["DAILY", "-n"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "xdg-open https://meet.google.com/abc-defg-hij\n"
    );
}

#[test]
fn test_invalid_zoom_url_fails() {
    let dir = setup(ENV, DEFAULTS);
    let output = mtg(dir.path(), &["broken", "--dry-run"]);

    assert_eq!(output.status.code(), Some(65));
    assert!(stderr(&output).contains("'broken' is invalid"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_unknown_meeting_lists_valid_calls() {
    let dir = setup(ENV, DEFAULTS);
    let output = mtg(dir.path(), &["planning", "--dry-run"]);

    assert_eq!(output.status.code(), Some(65));
    assert!(stderr(&output).contains("broken, daily, retro"));
}

#[test]
fn test_non_interactive_without_meeting_is_no_selection() {
    let dir = setup(ENV, DEFAULTS);
    let output = mtg(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(130));
    assert!(stderr(&output).contains("No meeting selected"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let output = mtg(dir.path(), &["--list"]);

    assert_eq!(output.status.code(), Some(78));
    assert!(stderr(&output).contains("Configuration file not found"));
}

#[test]
fn test_missing_required_key() {
    let dir = setup(ENV, "MEET_DAILY=\nZOOM_STANDUP=\n");
    let output = mtg(dir.path(), &["--list"]);

    assert_eq!(output.status.code(), Some(78));
    assert!(stderr(&output).contains("ZOOM_STANDUP"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_empty_value_rejected_unless_allowed() {
    let dir = setup("MEET_DAILY=https://meet.google.com/x\nNOTES=\n", "");

    let strict = mtg(dir.path(), &["--list"]);
    assert_eq!(strict.status.code(), Some(78));
    assert!(stderr(&strict).contains("NOTES"));

    let relaxed = mtg(dir.path(), &["--list", "--allow-empty"]);
    assert!(relaxed.status.success(), "{}", stderr(&relaxed));
}

#[test]
fn test_missing_template_requires_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "MEET_DAILY=https://meet.google.com/abc-defg-hij\n",
    )
    .unwrap();

    let output = mtg(dir.path(), &["--list"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "daily  google-meet\n");
}

#[test]
fn test_explicit_env_file_without_template() {
    let dir = TempDir::new().unwrap();
    let env = dir.path().join("meetings.env");
    fs::write(&env, "MEET_SYNC=https://meet.google.com/sync\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mtg"))
        .arg("--env-file")
        .arg(&env)
        .arg("--no-defaults")
        .arg("--list")
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "sync  google-meet\n");
}

#[test]
fn test_duplicate_meeting_names_rejected() {
    let dir = setup(
        "MEET_X=https://meet.google.com/x\nZOOM_X=https://zoom.us/j/1?pwd=a\n",
        "",
    );
    let output = mtg(dir.path(), &["--list"]);

    assert_eq!(output.status.code(), Some(78));
    assert!(stderr(&output).contains("MEET_X, ZOOM_X"));
}
