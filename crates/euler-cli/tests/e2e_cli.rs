//! E2E CLI tests covering `euler solve`, `euler random` and config handling.
//!
//! Each test runs the binary as a subprocess with an isolated config path.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Build a Command targeting the euler binary with config rooted in `dir`.
fn euler_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("euler"));
    cmd.current_dir(dir);
    cmd.env("EULER_CONFIG", dir.join("config.toml"));
    cmd.env("EULER_LOG", "error");
    cmd
}

fn json_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect()
}

const TRIANGLE: &str = "3\n0 1 1\n1 0 1\n1 1 0\n";

// ---------------------------------------------------------------------------
// solve
// ---------------------------------------------------------------------------

#[test]
fn solve_triangle_from_stdin() {
    let dir = TempDir::new().expect("tempdir");
    euler_cmd(dir.path())
        .arg("solve")
        .write_stdin(TRIANGLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph has 3 vertices, and 3 edges."))
        .stdout(predicate::str::contains("0 1 2 0"));
}

#[test]
fn solve_file_as_json() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("graphs.txt");
    // Triangle, a 3-vertex path, a single self-loop.
    fs::write(&path, format!("{TRIANGLE}3 0 1 0 1 0 1 0 1 0\n1 1\n")).expect("write");

    let output = euler_cmd(dir.path())
        .args(["solve", "graphs.txt", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let reports = json_lines(&output.stdout);
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0]["has_euler_circuit"], true);
    assert_eq!(reports[0]["circuit"], serde_json::json!([0, 1, 2, 0]));
    assert_eq!(reports[1]["has_euler_circuit"], false);
    assert_eq!(reports[1]["circuit"], Value::Null);
    assert_eq!(reports[2]["circuit"], serde_json::json!([0, 0]));
}

#[test]
fn solve_reports_rejected_graph_and_continues() {
    let dir = TempDir::new().expect("tempdir");
    let output = euler_cmd(dir.path())
        .args(["solve", "--json"])
        .write_stdin("2 0 1 2 0\n1 0\n")
        .output()
        .expect("run");
    assert!(output.status.success());

    let reports = json_lines(&output.stdout);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["error"]["code"], "E1004");
    assert_eq!(reports[1]["circuit"], serde_json::json!([0]));
}

#[test]
fn solve_fails_on_garbage_token() {
    let dir = TempDir::new().expect("tempdir");
    euler_cmd(dir.path())
        .arg("solve")
        .write_stdin("2 0 one 1 0")
        .assert()
        .failure()
        .stdout(predicate::str::contains("E2001"));
}

#[test]
fn solve_huge_multiplicity_answers_quickly() {
    let dir = TempDir::new().expect("tempdir");
    let output = euler_cmd(dir.path())
        .args(["solve", "--json"])
        .write_stdin("2 0 300000001 300000001 0\n")
        .timeout(Duration::from_secs(30))
        .output()
        .expect("run");
    assert!(output.status.success());

    let reports = json_lines(&output.stdout);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["edges"], 300_000_001);
    assert_eq!(reports[0]["has_euler_circuit"], false);
    assert_eq!(reports[0]["circuit"], Value::Null);
}

#[test]
fn solve_missing_file_fails() {
    let dir = TempDir::new().expect("tempdir");
    euler_cmd(dir.path())
        .args(["solve", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// ---------------------------------------------------------------------------
// random
// ---------------------------------------------------------------------------

#[test]
fn random_sweep_is_reproducible() {
    let dir = TempDir::new().expect("tempdir");
    let run = || {
        euler_cmd(dir.path())
            .args(["random", "--vertices", "5", "--max-parallel", "3", "--seed", "7", "--json"])
            .output()
            .expect("run")
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let reports = json_lines(&first.stdout);
    assert_eq!(reports.len(), 3);
    for report in &reports {
        assert_eq!(report["vertices"], 5);
        let has_circuit = report["has_euler_circuit"].as_bool().expect("bool");
        let edges = report["edges"].as_u64().expect("edges");
        match report["circuit"].as_array() {
            Some(circuit) => {
                assert!(has_circuit);
                assert_eq!(circuit.len() as u64, edges + 1);
                assert_eq!(circuit.first(), circuit.last());
            }
            None => assert!(!has_circuit),
        }
    }
}

#[test]
fn random_reads_config_file() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("config.toml"),
        "[random]\nvertices = 4\nmax_parallel = 2\nseed = 1\n\n[output]\nformat = \"json\"\n",
    )
    .expect("write");

    let output = euler_cmd(dir.path()).arg("random").output().expect("run");
    assert!(output.status.success());

    let reports = json_lines(&output.stdout);
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r["vertices"] == 4));
}

#[test]
fn random_rejects_zero_vertices() {
    let dir = TempDir::new().expect("tempdir");
    euler_cmd(dir.path())
        .args(["random", "--vertices", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("number of vertices must be positive"));
}

#[test]
fn random_rejects_oversized_graph() {
    let dir = TempDir::new().expect("tempdir");
    euler_cmd(dir.path())
        .args(["random", "--vertices", "4294967296", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("do not fit in an adjacency matrix"));
}

#[test]
fn malformed_config_fails() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("config.toml"), "[random\n").expect("write");
    euler_cmd(dir.path())
        .arg("random")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().expect("tempdir");
    euler_cmd(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("euler"));
}
