use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FINISHED_JOB: &str = include_str!("fixtures/finished_job.txt");

/// A `jobinfo` invocation isolated from the user's configuration.
pub struct TestApp {
    pub dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("jobinfo").unwrap();
        cmd.env("CONFIG_PATH", self.dir.path())
            .env_remove("APP_ENVIRONMENT")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write_config(&self, name: &str, contents: &str) {
        fs::write(self.dir.path().join(name), contents).unwrap();
    }

    pub fn write_capture(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("capture.txt");
        fs::write(&path, contents).unwrap();
        path
    }

    /// Executable standing in for qstat: records its arguments and prints
    /// `output`, or fails like qstat does for unknown jobs.
    pub fn fake_qstat(&self, output: &str, exit_code: i32) -> PathBuf {
        let capture = self.write_capture(output);
        let script = self.dir.path().join("qstat");
        let body = format!(
            "#!/bin/sh\necho \"$@\" > {args}\nif [ {code} -ne 0 ]; then\n  echo \"qstat: Unknown Job Id $2\" >&2\n  exit {code}\nfi\ncat {capture}\n",
            args = self.args_file().display(),
            code = exit_code,
            capture = capture.display(),
        );
        fs::write(&script, body).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    pub fn args_file(&self) -> PathBuf {
        self.dir.path().join("qstat.args")
    }

    pub fn recorded_args(&self) -> String {
        read_trimmed(&self.args_file())
    }
}

fn read_trimmed(path: &Path) -> String {
    fs::read_to_string(path).unwrap().trim().to_string()
}
