//! Binary-level tests for the non-interactive subcommands.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{fixture_pair, write_csv};

fn detview() -> Command {
    Command::cargo_bin("detview").expect("binary builds")
}

#[test]
fn info_reports_records_and_frames() {
    let (dir, image, radar) = fixture_pair();

    detview()
        .arg("info")
        .arg(&image)
        .arg(&radar)
        .assert()
        .success()
        .stdout(predicate::str::contains("image: 5 records"))
        .stdout(predicate::str::contains("radar: 5 records"))
        .stdout(predicate::str::contains("timeline: 7 frames"));

    drop(dir);
}

#[test]
fn info_json_is_machine_readable() {
    let (dir, image, radar) = fixture_pair();

    let output = detview()
        .arg("info")
        .arg(&image)
        .arg(&radar)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(summary["frames"], 7);
    assert_eq!(summary["image"]["records"], 5);
    assert_eq!(summary["span_seconds"], 10.0);

    drop(dir);
}

#[test]
fn info_fails_on_missing_file() {
    detview()
        .args(["info", "/nonexistent/image.csv", "/nonexistent/radar.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("image detections"));
}

#[test]
fn info_fails_on_malformed_timestamp() {
    let (dir, image, _radar) = fixture_pair();
    let bad = write_csv(&dir, "bad.csv", "time,x,y\nnoon,1,2\n");

    detview()
        .arg("info")
        .arg(&image)
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a recognized date-time"));

    drop(dir);
}

#[test]
fn completions_generate_for_bash() {
    detview()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("detview"));
}
