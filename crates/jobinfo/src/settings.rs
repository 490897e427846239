use std::fmt;

use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Settings {
    pub qstat: QstatSettings,
    pub log: LogSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
#[serde(default)]
pub struct QstatSettings {
    /// Program to run
    pub command: String,
    /// Arguments placed before the job id
    pub args: Vec<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_secs: u64,
}

impl Default for QstatSettings {
    fn default() -> Self {
        Self {
            command: "qstat".to_string(),
            args: vec!["-xf".to_string()],
            timeout_secs: 30,
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Settings:\n  Qstat:\n{}\n  Log:\n{}",
            self.qstat, self.log
        )
    }
}

impl fmt::Display for QstatSettings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "    Command: {} {}\n    Timeout: {}s",
            self.command,
            self.args.join(" "),
            self.timeout_secs
        )
    }
}

impl fmt::Display for LogSettings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "    Level: {}", self.level)
    }
}
