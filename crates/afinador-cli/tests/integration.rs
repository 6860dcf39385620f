//! Integration tests for the afinador CLI binary.
//!
//! Exercises the generate → analyze round trip end to end; device and live
//! capture commands need audio hardware and are not covered here.

use std::path::Path;
use std::process::Command;

/// Helper to get the path to the `afinador` binary built by cargo.
fn afinador_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_afinador"))
}

fn generate_tone(path: &Path, extra: &[&str]) {
    let output = afinador_bin()
        .arg("generate")
        .arg(path)
        .args(extra)
        .output()
        .expect("failed to run afinador generate");
    assert!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn generate_then_analyze_reports_an_in_tune_string() {
    let dir = tempfile::tempdir().unwrap();
    let tone = dir.path().join("a2.wav");
    generate_tone(&tone, &["--note", "A2"]);

    let output = afinador_bin()
        .arg("analyze")
        .arg(&tone)
        .output()
        .expect("failed to run afinador analyze");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("A2"), "got: {stdout}");
    assert!(stdout.contains("in tune"), "got: {stdout}");
    assert!(stdout.contains("directive(s) emitted"), "got: {stdout}");
}

#[test]
fn analyze_of_a_flat_tone_says_tune_up() {
    let dir = tempfile::tempdir().unwrap();
    let tone = dir.path().join("flat.wav");
    generate_tone(&tone, &["--note", "A2", "--cents", "-30"]);

    let output = afinador_bin()
        .arg("analyze")
        .arg(&tone)
        .output()
        .expect("failed to run afinador analyze");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("A2"), "got: {stdout}");
    assert!(stdout.contains("tune up"), "got: {stdout}");
}

#[test]
fn json_output_is_line_delimited_records() {
    let dir = tempfile::tempdir().unwrap();
    let tone = dir.path().join("e4.wav");
    generate_tone(&tone, &["--note", "E4"]);

    let output = afinador_bin()
        .arg("analyze")
        .arg(&tone)
        .arg("--json")
        .output()
        .expect("failed to run afinador analyze --json");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = 0;
    for line in stdout.lines().filter(|l| !l.is_empty()) {
        let value: serde_json::Value =
            serde_json::from_str(line).unwrap_or_else(|e| panic!("bad JSON line {line}: {e}"));
        assert_eq!(value["note"], "E4");
        assert_eq!(value["guidance"], "in-tune");
        lines += 1;
    }
    assert!(lines > 0, "no directives in: {stdout}");
}

#[test]
fn per_frame_mode_shows_assessments() {
    let dir = tempfile::tempdir().unwrap();
    let tone = dir.path().join("d3.wav");
    generate_tone(&tone, &["--note", "D3", "--duration", "0.5"]);

    let output = afinador_bin()
        .arg("analyze")
        .arg(&tone)
        .arg("--per-frame")
        .output()
        .expect("failed to run afinador analyze --per-frame");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("frame"), "got: {stdout}");
    assert!(stdout.contains("D3"), "got: {stdout}");
}

#[test]
fn generate_rejects_unknown_notes() {
    let dir = tempfile::tempdir().unwrap();
    let tone = dir.path().join("x.wav");

    let output = afinador_bin()
        .arg("generate")
        .arg(&tone)
        .args(["--note", "C7"])
        .output()
        .expect("failed to run afinador generate");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown note"), "got: {stderr}");
}

#[test]
fn analyze_honors_a_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let tone = dir.path().join("a2.wav");
    generate_tone(&tone, &["--note", "A2"]);

    // A gate above the tone's level silences every frame.
    let settings = dir.path().join("afinador.toml");
    std::fs::write(&settings, "rms_gate = 0.9\n").unwrap();

    let output = afinador_bin()
        .arg("analyze")
        .arg(&tone)
        .args(["--settings", settings.to_str().unwrap()])
        .output()
        .expect("failed to run afinador analyze");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 directive(s) emitted"), "got: {stdout}");
}

#[test]
fn invalid_settings_fail_with_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let tone = dir.path().join("a2.wav");
    generate_tone(&tone, &["--note", "A2", "--duration", "0.2"]);

    let settings = dir.path().join("bad.toml");
    std::fs::write(&settings, "quorum = 9\n").unwrap();

    let output = afinador_bin()
        .arg("analyze")
        .arg(&tone)
        .args(["--settings", settings.to_str().unwrap()])
        .output()
        .expect("failed to run afinador analyze");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("quorum"), "got: {stderr}");
}
