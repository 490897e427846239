use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to retrieve information for job {job_id}. Please check if the job ID is correct.")]
    QstatFailed {
        job_id: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} did not answer within {}s", .timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    #[error("Failed to read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
