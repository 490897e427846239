use crate::error::{Error, Result};
use crate::settings::QstatSettings;
use jobinfo_common::log;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Runs the scheduler status query for a single job.
#[derive(Clone, Debug)]
pub struct QstatCommand {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl QstatCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    pub fn from_settings(settings: &QstatSettings) -> Self {
        Self::new(
            settings.command.clone(),
            settings.args.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    /// Run `<program> <args...> <job_id>` and return its stdout.
    #[tracing::instrument(level = "debug", name = "Query job status", skip(self))]
    pub async fn fetch(&self, job_id: &str) -> Result<String> {
        log!(debug, "Running {} {} {}", self.program, self.args.join(" "), job_id);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(job_id)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();
        let output = tokio::time::timeout(self.timeout, output)
            .await
            .map_err(|_| Error::Timeout {
                program: self.program.clone(),
                timeout: self.timeout,
            })?
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log!(warn, "{} exited with {}: {}", self.program, output.status, stderr);
            return Err(Error::QstatFailed {
                job_id: job_id.to_string(),
                status: output.status,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Read previously captured `qstat -xf` output. `-` reads stdin.
pub async fn read_capture(path: &Path) -> Result<String> {
    let input_error = |source| Error::Input {
        path: path.display().to_string(),
        source,
    };

    if path == Path::new("-") {
        let mut raw = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut raw)
            .await
            .map_err(input_error)?;
        return Ok(String::from_utf8_lossy(&raw).into_owned());
    }

    let raw = tokio::fs::read(path).await.map_err(input_error)?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}
