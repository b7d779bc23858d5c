//! Integration tests for the fastroute CLI.
//!
//! These tests use `assert_cmd` to verify:
//! - the legacy plain-text report for the `times` command
//! - the `travel` command under both clock models
//! - network loading from `--network` and `FASTROUTE_NETWORK`
//! - friendly errors and exit codes

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("fastroute-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("FASTROUTE_NETWORK");
    cmd
}

/// Temporary directory holding a network file.
struct TestNetwork {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TestNetwork {
    fn with_json(json: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("network.json");
        fs::write(&path, json).expect("write network");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Three stations in a line with a half-hourly service on the first hop.
    fn line() -> Self {
        Self::with_json(
            r#"{
                "lengths": [[0, 5, 0], [0, 0, 7], [0, 0, 0]],
                "first":   [[0, 10, 0], [0, 0, 0], [0, 0, 0]],
                "freq":    [[0, 30, 0], [0, 0, 0], [0, 0, 0]]
            }"#,
        )
    }
}

#[test]
fn times_prints_legacy_report() {
    cli()
        .args(["times", "--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Vertex Distances (time) from Source\n0: 0 minutes\n1: 4 minutes\n",
        ))
        .stdout(predicate::str::contains("8: 14 minutes"));
}

#[test]
fn travel_defaults_to_per_station_clock() {
    cli()
        .args(["travel", "--from", "3", "--to", "6", "--start", "26"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clock: per-station"))
        .stdout(predicate::str::contains(
            "Vertex Distances (time) from 3 to 6: 20 minutes",
        ));
}

#[test]
fn travel_with_shared_clock_matches_historical_value() {
    cli()
        .args([
            "travel", "--from", "3", "--to", "6", "--start", "26", "--clock", "shared",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vertex Distances (time) from 3 to 6: 18 minutes",
        ));
}

#[test]
fn travel_json_output_is_structured() {
    let output = cli()
        .args([
            "--format", "json", "travel", "--from", "3", "--to", "6", "--start", "26",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["total"], 20);
    assert_eq!(value["clock"], "per-station");
    assert_eq!(value["stations"][0], 3);
}

#[test]
fn network_flag_loads_file() {
    let network = TestNetwork::line();
    cli()
        .arg("--network")
        .arg(&network.path)
        .args(["travel", "--from", "0", "--to", "2", "--start", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ready   12, wait  28, ride   5"))
        .stdout(predicate::str::contains(
            "Vertex Distances (time) from 0 to 2: 40 minutes",
        ));
}

#[test]
fn network_env_var_is_used() {
    let network = TestNetwork::line();
    cli()
        .env("FASTROUTE_NETWORK", &network.path)
        .args(["times", "--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2: 12 minutes"))
        .stdout(predicate::str::contains("3:").not());
}

#[test]
fn unreachable_destination_is_reported() {
    let network = TestNetwork::line();
    cli()
        .arg("--network")
        .arg(&network.path)
        .args(["travel", "--from", "2", "--to", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vertex Distances (time) from 2 to 0: unreachable",
        ));
}

#[test]
fn unknown_station_error_is_friendly() {
    cli()
        .args(["times", "--source", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unknown station 12. The network has 9 stations (0-8).",
        ));
}

#[test]
fn malformed_network_fails_with_context() {
    let network = TestNetwork::with_json(r#"{"lengths": [[0, -1], [1, 0]]}"#);
    cli()
        .arg("--network")
        .arg(&network.path)
        .args(["times", "--source", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load network from"))
        .stderr(predicate::str::contains("negative length -1"));
}

#[test]
fn rich_format_renders_markdown_table() {
    cli()
        .args(["--format", "rich", "times", "--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| 8 | 14 minutes |"));
}

#[test]
fn extreme_start_time_fails_cleanly() {
    let network = TestNetwork::line();
    cli()
        .arg("--network")
        .arg(&network.path)
        .args([
            "travel",
            "--from",
            "0",
            "--to",
            "2",
            "--start",
            "-9223372036854775808",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "travel time overflowed while relaxing edges out of station 0",
        ));
}
