use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const CONFIG: &str = "tests/fixtures/badges.json";
const ROSTER: &str = "tests/fixtures/roster.json";

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_badge-pdf"));
    cmd.args(["--config", CONFIG]);
    cmd
}

fn output_dir() -> &'static Path {
    Path::new("tests/output")
}

fn setup() {
    fs::create_dir_all(output_dir()).expect("Failed to create output directory");
}

fn cleanup_file(name: &str) {
    let path = output_dir().join(name);
    if path.exists() {
        fs::remove_file(&path).ok();
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_pdf(name: &str) {
    let path = output_dir().join(name);
    assert!(path.exists(), "PDF file was not created");

    let bytes = fs::read(&path).expect("Failed to read PDF");
    assert!(bytes.starts_with(b"%PDF-"), "Output is not a PDF");
    assert!(bytes.len() > 1000, "PDF file is too small, likely empty or corrupt");
}

#[test]
fn test_badges_from_roster() {
    setup();
    let output_file = "test-roster.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "badges",
            "--roster", ROSTER,
            "-d", "2026-05-29",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_pdf(output_file);

    let out = stdout(&output);
    assert!(out.contains("Badges: 5 of 5"), "{}", out);
    assert!(out.contains("Offset: x 0 y 0"), "{}", out);
}

#[test]
fn test_badges_with_device_offset() {
    setup();
    let output_file = "test-device.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "badges",
            "--roster", ROSTER,
            "--device", "reg-1",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_pdf(output_file);
    assert!(stdout(&output).contains("Offset: x 10 y -5"));
}

#[test]
fn test_offset_flags_override_device() {
    setup();
    let output_file = "test-offset-override.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "badges",
            "--roster", ROSTER,
            "--device", "reg-1",
            "-x", "3",
            "--y-offset", "-7",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout(&output).contains("Offset: x 3 y -7"));
}

#[test]
fn test_partial_build_still_writes_pdf() {
    setup();
    let output_file = "test-partial.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "badges",
            "--roster", "tests/fixtures/roster_misprinted.json",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2), "Command should report a partial build");
    assert_pdf(output_file);
    assert!(stdout(&output).contains("Badges: 1 of 3"));
    assert!(stderr(&output).contains("Invalid stripe color: navy"));
}

#[test]
fn test_prices() {
    let output = cargo_bin()
        .arg("prices")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let out = stdout(&output);
    assert!(out.contains("Adult (18+)"));
    assert!(out.contains("$60.00"));
    assert!(out.contains("$0.00"));
    assert!(out.contains("$300.00"));
    assert!(out.contains("ERROR"), "VIP has no youth or child prices");
    assert!(!out.contains("Misprinted"), "Hidden badge types are not priced");

    assert!(stderr(&output).contains("Error getting age ranges for badge VIP"));
}

#[test]
fn test_test_badges_for_all_visible_types() {
    setup();
    let output_file = "test-calibration.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "test-badges",
            "-x", "-4",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_pdf(output_file);
    assert!(stdout(&output).contains("Badges: 6 of 6"));
    assert!(stdout(&output).contains("Offset: x -4 y 0"));
}

#[test]
fn test_test_badges_single_type() {
    setup();
    let output_file = "test-calibration-vip.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "test-badges",
            "--badge", "VIP",
            "-n", "1",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout(&output).contains("Badges: 1 of 1"));
}

#[test]
fn test_test_badges_count_out_of_range() {
    let output = cargo_bin()
        .args(["test-badges", "-n", "4", "-o", "tests/output/should-not-exist.pdf"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for 4 test badges");
}

#[test]
fn test_unknown_badge_type_in_roster() {
    let output = cargo_bin()
        .args([
            "badges",
            "--roster", "tests/fixtures/roster_unknown_badge.json",
            "-o", "tests/output/should-not-exist.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Error: Failed to read roster file: badge Saturday"), "{}", err);
    assert!(!err.contains("Failed to read roster:"), "{}", err);
}

#[test]
fn test_unknown_device() {
    let output = cargo_bin()
        .args([
            "badges",
            "--roster", ROSTER,
            "--device", "nowhere",
            "-o", "tests/output/should-not-exist.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for unknown device");
}

#[test]
fn test_invalid_roster_file() {
    let output = cargo_bin()
        .args([
            "badges",
            "--roster", "nonexistent.json",
            "-o", "tests/output/should-not-exist.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for missing roster");
    let err = stderr(&output);
    assert!(err.contains("Error: Failed to read roster file: nonexistent.json"), "{}", err);
    assert!(!err.contains("Failed to read roster:"), "{}", err);
}

#[test]
fn test_invalid_date_format() {
    let output = cargo_bin()
        .args([
            "badges",
            "--roster", ROSTER,
            "-d", "not-a-date",
            "-o", "tests/output/should-not-exist.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for invalid date");
}

#[test]
fn test_missing_config() {
    let output = Command::new(env!("CARGO_BIN_EXE_badge-pdf"))
        .args(["--config", "tests/fixtures/missing.json", "prices"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for missing config");
    assert!(stderr(&output).contains("Failed to read configuration"));
}
