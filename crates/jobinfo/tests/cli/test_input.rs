use crate::helpers::{TestApp, FINISHED_JOB};
use predicates::prelude::*;

#[test]
fn table_from_captured_output() {
    let app = TestApp::new();
    let capture = app.write_capture(FINISHED_JOB);

    app.command()
        .arg("--input")
        .arg(&capture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Job Information"))
        .stdout(predicate::str::contains("4211.pbs01"))
        .stdout(predicate::str::contains("dj@login01"))
        .stdout(predicate::str::contains("2025.04.28 08:58:54"))
        .stdout(predicate::str::contains("4.00 GB"))
        .stdout(predicate::str::contains("/home/dj/projects/run"));
}

#[test]
fn json_from_stdin() {
    let app = TestApp::new();

    let assert = app
        .command()
        .args(["--input", "-", "--parseable"])
        .write_stdin(FINISHED_JOB)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["Job_Name"], "test.sh");
    assert_eq!(json["Run_Status"], "F");
    assert_eq!(json["Memory_Used_GB"], "4.00 GB");
    assert_eq!(json["Submit_Time"], "2025.04.28 08:58:54");
    assert_eq!(json["Finish_Time"], "2025.04.28 09:43:19");
    assert_eq!(
        json["Nodes"],
        "(node07:ncpus=8:mem=16777216kb)+(node08:ncpus=8:mem=16777216kb)"
    );
    assert_eq!(json["Submit_Arguments"], "-N test-l walltime=01:00:00run.sh");
    assert!(json.get("Memory_Used").is_none());
}

#[test]
fn unknown_fields_in_sparse_output() {
    let app = TestApp::new();

    let assert = app
        .command()
        .args(["-i", "-", "--parseable"])
        .write_stdin("Job Id: 7.pbs01\n    job_state = Q\n    exec_host = node03/0\n")
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["Run_Status"], "Q");
    assert_eq!(json["Nodes"], "node03/0");
    assert!(json["Job_Name"].is_null());
    assert!(json["Memory_Used_GB"].is_null());
}

#[test]
fn missing_capture_file_fails() {
    let app = TestApp::new();

    app.command()
        .args(["--input", "/nonexistent/capture.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read /nonexistent/capture.txt"));
}

#[test]
fn job_id_is_required() {
    let app = TestApp::new();

    app.command().assert().failure();
}
