use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

const BINARY_NAME: &str = "packet-dashboard";

/// Writes `contents` to a file named `name` inside a fresh temp dir.
fn capture_file(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write capture");
    (dir, path)
}

fn render_headless(path: &PathBuf) -> assert_cmd::assert::Assert {
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("render")
        .arg(path)
        .arg("--headless")
        .assert()
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Dashboard of captured network packet summaries"));
}

#[test]
fn headless_empty_capture_shows_waiting_notice() {
    let (_dir, path) = capture_file("empty.csv", "timestamp,protocol,size\n");
    render_headless(&path)
        .success()
        .stdout(contains("Real-Time Network Traffic Dashboard"))
        .stdout(contains("No data available yet"))
        .stdout(contains("Protocol Distribution").not());
}

#[test]
fn headless_capture_renders_every_widget() {
    let (_dir, path) = capture_file(
        "capture.csv",
        "timestamp,protocol,size,source\n\
         0,TCP,10,10.0.0.1\n\
         0.5,TCP,20,10.0.0.1\n\
         1,UDP,30,10.0.0.2\n",
    );
    render_headless(&path)
        .success()
        .stdout(contains("Protocol Distribution (Live)"))
        .stdout(contains("Packets per Second"))
        .stdout(contains("15.0 bytes"))
        .stdout(contains("30.0 bytes"))
        .stdout(contains("Top Source IPs"))
        .stdout(contains("10.0.0.1"))
        .stdout(contains("Dashboard updated successfully!"));
}

#[test]
fn headless_json_capture_matches_csv() {
    let (_dir, path) = capture_file(
        "capture.json",
        r#"[
            {"timestamp": 0, "protocol": "TCP", "size": 10},
            {"timestamp": 1, "protocol": "TCP", "size": 20}
        ]"#,
    );
    render_headless(&path)
        .success()
        .stdout(contains("15.0 bytes"))
        .stdout(contains("Dashboard updated successfully!"));
}

#[test]
fn headless_without_source_column_skips_top_talkers() {
    let (_dir, path) = capture_file(
        "capture.csv",
        "timestamp,protocol,size\n0,TCP,10\n1,UDP,20\n",
    );
    render_headless(&path)
        .success()
        .stdout(contains("Top Source IPs").not())
        .stdout(contains("Dashboard updated successfully!"));
}

#[test]
fn headless_bad_timestamps_report_conversion_failure() {
    let (_dir, path) = capture_file(
        "capture.csv",
        "timestamp,protocol,size\nsoon,TCP,10\nlater,UDP,20\n",
    );
    render_headless(&path)
        .success()
        .stdout(contains("Timestamp conversion failed"))
        .stdout(contains("Dashboard updated successfully!").not());
}

#[test]
fn headless_missing_size_column_fails() {
    let (_dir, path) = capture_file("capture.csv", "timestamp,protocol\n0,TCP\n");
    render_headless(&path)
        .failure()
        .stderr(contains("size"));
}

#[test]
fn headless_missing_file_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    render_headless(&dir.path().join("nope.csv")).failure();
}

#[test]
fn init_config_writes_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config_path = dir.path().join(".packet-dashboard").join("config.json");
    assert!(!config_path.exists());

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("init-config")
        .arg("--refresh-interval-secs")
        .arg("5")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"refresh_interval_secs\": 5"));
}

#[test]
fn headless_rejects_ui_only_flags() {
    let (_dir, path) = capture_file("capture.csv", "timestamp,protocol,size\n0,TCP,10\n");
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("render")
        .arg(&path)
        .arg("--headless")
        .arg("--with-background")
        .assert()
        .failure()
        .stderr(contains("cannot be used with"));
}

#[test]
fn headless_nan_cells_are_missing_values() {
    let (_dir, path) = capture_file(
        "capture.csv",
        "timestamp,protocol,size\n0,TCP,10\n1,TCP,NaN\n2,NaN,50\n",
    );
    render_headless(&path)
        .success()
        .stdout(contains("10.0 bytes"))
        .stdout(contains("NaN").not())
        .stdout(contains("50.0 bytes").not());
}
