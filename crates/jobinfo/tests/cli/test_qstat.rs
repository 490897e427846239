use crate::helpers::{TestApp, FINISHED_JOB};
use predicates::prelude::*;

#[test]
fn runs_qstat_with_job_id() {
    let app = TestApp::new();
    let qstat = app.fake_qstat(FINISHED_JOB, 0);

    app.command()
        .arg("--qstat")
        .arg(&qstat)
        .arg("4211.pbs01")
        .assert()
        .success()
        .stdout(predicate::str::contains("test.sh"))
        .stdout(predicate::str::contains("-N test-l walltime=01:00:00run.sh"));

    assert_eq!(app.recorded_args(), "-xf 4211.pbs01");
}

#[test]
fn qstat_failure_exits_non_zero() {
    let app = TestApp::new();
    let qstat = app.fake_qstat("", 153);

    app.command()
        .arg("--qstat")
        .arg(&qstat)
        .arg("999.pbs01")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to retrieve information for job 999.pbs01. Please check if the job ID is correct.",
        ))
        .stdout(predicate::str::is_empty());
}

#[test]
fn qstat_from_environment() {
    let app = TestApp::new();
    let qstat = app.fake_qstat(FINISHED_JOB, 0);

    app.command()
        .env("APP_QSTAT__COMMAND", &qstat)
        .args(["4211.pbs01", "--parseable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Queue\": \"workq\""));
}

#[test]
fn qstat_from_config_file() {
    let app = TestApp::new();
    let qstat = app.fake_qstat(FINISHED_JOB, 0);
    app.write_config(
        "base.yaml",
        &format!("qstat:\n  command: {}\n  args: [\"-x\", \"-f\"]\n", qstat.display()),
    );

    app.command().arg("4211.pbs01").assert().success();

    assert_eq!(app.recorded_args(), "-x -f 4211.pbs01");
}

#[test]
fn unsupported_environment_is_reported() {
    let app = TestApp::new();

    app.command()
        .env("APP_ENVIRONMENT", "staging")
        .arg("1.pbs01")
        .assert()
        .failure()
        .stderr(predicate::str::contains("staging is not a supported environment"));
}
