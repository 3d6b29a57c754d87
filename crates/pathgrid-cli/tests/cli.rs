//! End-to-end runs of the `pathgrid` binary.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};

const NEGATIVE_EDGES: &str = "\
,-2,7,5,
,,8,6,
,3,,-4,
-1,,,,
,,,,
";

fn pathgrid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pathgrid"))
        .args(args)
        .output()
        .unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_run_bellman_ford_grid() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", NEGATIVE_EDGES);

    let output = pathgrid(&["run", &file, "--source", "2", "--format", "json"]);
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["algorithm"], "bellman-ford");
    assert_eq!(value["source"], 2);
    assert_eq!(value["vertex_count"], 5);
    assert_eq!(value["distances"], json!([-5.0, -7.0, 0.0, -4.0, null]));
}

#[test]
fn test_run_johnson_json_input() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(
        dir.path(),
        "graph.json",
        "[[null, 1, null], [null, null, 2], [null, null, null]]",
    );

    let output = pathgrid(&["run", &file, "-a", "johnson", "--format", "json"]);
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["source"], Value::Null);
    assert_eq!(
        value["distances"],
        json!([[0.0, 1.0, 3.0], [null, 0.0, 2.0], [null, null, 0.0]])
    );
}

#[test]
fn test_run_johnson_parallel() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", NEGATIVE_EDGES);

    let sequential = pathgrid(&["run", &file, "-a", "johnson", "--format", "json"]);
    let parallel = pathgrid(&[
        "run", &file, "-a", "johnson", "--parallel", "--format", "json",
    ]);
    assert!(sequential.status.success());
    assert!(parallel.status.success());

    let sequential = stdout_json(&sequential);
    let parallel = stdout_json(&parallel);
    assert_eq!(sequential["parallel"], false);
    assert_eq!(parallel["parallel"], true);
    assert_eq!(sequential["distances"], parallel["distances"]);
}

#[test]
fn test_run_parallel_threshold_not_reached() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", NEGATIVE_EDGES);

    let output = pathgrid(&[
        "run",
        &file,
        "-a",
        "johnson",
        "--parallel",
        "--parallel-threshold",
        "6",
        "--format",
        "json",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["parallel"], false);
}

#[test]
fn test_run_negative_cycle_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "cycle.csv", ",2,\n,,5\n-10,,\n");

    let output = pathgrid(&["run", &file, "--quiet"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("negative weight cycle"));
}

#[test]
fn test_run_dijkstra_rejects_negative_edge() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", NEGATIVE_EDGES);

    let output = pathgrid(&["run", &file, "-a", "dijkstra", "--quiet"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("negative edge"));
}

#[test]
fn test_run_unknown_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", ",1\n,\n");

    let output = pathgrid(&["run", &file, "-a", "floyd"]);
    assert!(!output.status.success());
}

#[test]
fn test_run_source_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", ",1\n,\n");

    let output = pathgrid(&["run", &file, "--source", "7", "--quiet"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_run_too_many_vertices() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", ",,\n,,\n,,\n");

    let output = pathgrid(&["run", &file, "--max-vertices", "2", "--quiet"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_info_json() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", NEGATIVE_EDGES);

    let output = pathgrid(&["info", &file, "--format", "json"]);
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["vertex_count"], 5);
    assert_eq!(value["edge_count"], 8);
    assert_eq!(value["negative_edge_count"], 3);
    assert_eq!(value["has_negative_cycle"], false);
    assert_eq!(value["bellman_ford_sources"], json!([0, 1, 2, 3, 4]));
    assert_eq!(value["usable_algorithms"], json!(["bellman-ford", "johnson"]));
}

#[test]
fn test_info_unreachable_negative_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", ",,\n,,-2\n,1,\n");

    let output = pathgrid(&["info", &file, "--format", "json"]);
    assert!(output.status.success());

    let value = stdout_json(&output);
    assert_eq!(value["has_negative_cycle"], true);
    assert_eq!(value["bellman_ford_sources"], json!([0]));
    assert_eq!(value["usable_algorithms"], json!(["bellman-ford"]));

    let run = pathgrid(&["run", &file, "--source", "0", "--format", "json"]);
    assert!(run.status.success());
    assert_eq!(stdout_json(&run)["distances"], json!([0.0, null, null]));
}

#[test]
fn test_run_verbose_logs_dijkstra_start() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", ",4\n,\n");

    let output = pathgrid(&["run", &file, "-a", "dijkstra", "--verbose"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pathgrid_core::algorithms::dijkstra"));
}

#[test]
fn test_run_table_output() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", ",4\n,\n");

    let output = pathgrid(&["run", &file]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bellman-ford from vertex 0"));
    assert!(stdout.contains('4'));
}

#[test]
fn test_info_table_output() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "graph.csv", ",,\n,,-2\n,1,\n");

    let output = pathgrid(&["info", &file]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Property"));
    assert!(stdout.contains("Bellman-Ford sources"));
    assert!(!stdout.contains('{'));
}
