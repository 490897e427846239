use crate::error::{FieldTableError, Result};
use crate::{timefmt, units};
use regex::Regex;

/// Attribute labels that open a new entry in `qstat -f` output. Labels
/// ending in `.` cover a family such as `Resource_List.ncpus`. A line only
/// opens an entry when the label is followed by `=` (see [starts_attribute]).
pub const ATTRIBUTE_LABELS: &[&str] = &[
    "Job Id:",
    "Job_Name",
    "Job_Owner",
    "resources_used.",
    "job_state",
    "queue",
    "server",
    "Account_Name",
    "Checkpoint",
    "ctime",
    "depend",
    "Error_Path",
    "exec_host",
    "exec_vnode",
    "Hold_Types",
    "Join_Path",
    "Keep_Files",
    "Mail_Points",
    "Mail_Users",
    "mtime",
    "Output_Path",
    "Priority",
    "qtime",
    "Rerunable",
    "Resource_List.",
    "stime",
    "obittime",
    "session_id",
    "jobdir",
    "Shell_Path_List",
    "substate",
    "Variable_List",
    "euser",
    "egroup",
    "hashname",
    "comment",
    "etime",
    "eligible_time",
    "run_count",
    "Exit_status",
    "Submit_arguments",
    "Submit_Host",
    "history_timestamp",
    "project",
    "umask",
    "group_list",
    "array",
    "forward_x11",
];

/// Whether `line` (already trimmed) opens the attribute `label`. `Job Id:`
/// style labels carry their own separator, every other label must be
/// followed by `=`, so a wrapped fragment like `projects/run` is not mistaken
/// for the `project` attribute.
pub fn starts_attribute(line: &str, label: &str) -> bool {
    let Some(rest) = line.strip_prefix(label) else {
        return false;
    };
    if label.ends_with(':') {
        return true;
    }
    let rest = if label.ends_with('.') {
        rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    } else {
        rest
    };
    rest.trim_start().starts_with('=')
}

/// How a field value may spill onto following lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// The value ends with its line.
    None,
    /// Absorb following lines until one opens a `stop_prefixes` attribute,
    /// or the accumulated value ends with `stop_suffix`.
    Until {
        stop_prefixes: &'static [&'static str],
        stop_suffix: Option<&'static str>,
    },
}

/// Transform applied to a fully assembled raw value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Postprocess {
    Identity,
    Time,
}

impl Postprocess {
    pub fn apply(self, raw: String) -> String {
        match self {
            Postprocess::Identity => raw,
            Postprocess::Time => timefmt::normalize_time(&raw),
        }
    }
}

/// One recognized field.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    /// Key in the [ParseResult](super::ParseResult)
    pub name: &'static str,

    /// Capture group 1 holds the value
    pub matcher: Regex,

    /// Multi-line behaviour
    pub continuation: Continuation,

    /// Applied once the value is assembled
    pub postprocess: Postprocess,

    /// Internal fields are captured for derived fields only
    pub exposed: bool,
}

impl FieldSpec {
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        let matcher = Regex::new(pattern).map_err(|source| FieldTableError::InvalidPattern {
            field: name.to_string(),
            source,
        })?;
        Ok(Self {
            name,
            matcher,
            continuation: Continuation::None,
            postprocess: Postprocess::Identity,
            exposed: true,
        })
    }

    /// Matcher for `<label> = <value>` anchored at the start of the line.
    pub fn attribute(name: &'static str, label: &str) -> Result<Self> {
        Self::new(name, &format!(r"^\s*{}\s*=\s*(.*)$", regex::escape(label)))
    }

    pub fn continued(mut self, stop_prefixes: &'static [&'static str]) -> Self {
        self.continuation = Continuation::Until {
            stop_prefixes,
            stop_suffix: None,
        };
        self
    }

    pub fn continued_until_suffix(
        mut self,
        stop_prefixes: &'static [&'static str],
        suffix: &'static str,
    ) -> Self {
        self.continuation = Continuation::Until {
            stop_prefixes,
            stop_suffix: Some(suffix),
        };
        self
    }

    pub fn time(mut self) -> Self {
        self.postprocess = Postprocess::Time;
        self
    }

    pub fn internal(mut self) -> Self {
        self.exposed = false;
        self
    }

    /// Extract the trimmed candidate value from a single line.
    pub fn capture(&self, line: &str) -> Option<String> {
        self.matcher
            .captures(line)
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()).trim().to_string())
    }
}

/// Output field computed from an internal field after the scan.
#[derive(Clone, Debug)]
pub struct DerivedField {
    pub name: &'static str,
    pub source: &'static str,
    /// `None` means the raw value could not be interpreted and is passed through.
    pub derive: fn(&str) -> Option<String>,
}

/// Alternate matcher tried once over the whole text when a field stayed unset.
#[derive(Clone, Debug)]
pub struct Fallback {
    pub field: &'static str,
    pub matcher: Regex,
}

impl Fallback {
    pub fn attribute(field: &'static str, label: &str) -> Result<Self> {
        // stay on one line even when the value is empty
        let pattern = format!(r"(?mR)^[ \t]*{}[ \t]*=[ \t]*(.*)$", regex::escape(label));
        let matcher = Regex::new(&pattern).map_err(|source| FieldTableError::InvalidPattern {
            field: field.to_string(),
            source,
        })?;
        Ok(Self { field, matcher })
    }
}

/// The field table for PBS `qstat -xf` output.
pub fn pbs_fields() -> Result<Vec<FieldSpec>> {
    Ok(vec![
        FieldSpec::new("Job_Id", r"^\s*Job Id:\s*(.*)$")?,
        FieldSpec::attribute("Job_Name", "Job_Name")?,
        FieldSpec::attribute("Job_Owner", "Job_Owner")?,
        FieldSpec::attribute("Queue", "queue")?,
        FieldSpec::attribute("Run_Status", "job_state")?,
        FieldSpec::attribute("Nodes", "exec_vnode")?.continued(ATTRIBUTE_LABELS),
        FieldSpec::attribute("Submit_Time", "ctime")?.time(),
        FieldSpec::attribute("Queue_Time", "qtime")?.time(),
        FieldSpec::attribute("Start_Time", "stime")?.time(),
        FieldSpec::attribute("Finish_Time", "obittime")?.time(),
        FieldSpec::attribute("Exit_Status", "Exit_status")?,
        FieldSpec::attribute("Cpus_Requested", "Resource_List.ncpus")?,
        FieldSpec::attribute("Walltime_Requested", "Resource_List.walltime")?,
        FieldSpec::attribute("Walltime_Used", "resources_used.walltime")?,
        FieldSpec::attribute("Memory_Used", "resources_used.mem")?.internal(),
        // environment list entry, not a line of its own
        FieldSpec::new("Work_Directory", r"PBS_O_WORKDIR\s*=\s*([^,]*)")?,
        FieldSpec::attribute("Submit_Directory", "jobdir")?,
        FieldSpec::attribute("Output_Path", "Output_Path")?.continued(ATTRIBUTE_LABELS),
        FieldSpec::attribute("Error_Path", "Error_Path")?.continued(ATTRIBUTE_LABELS),
        FieldSpec::attribute("Submit_Arguments", "Submit_arguments")?
            .continued_until_suffix(ATTRIBUTE_LABELS, ".sh"),
    ])
}

pub fn pbs_derived() -> Vec<DerivedField> {
    vec![DerivedField {
        name: "Memory_Used_GB",
        source: "Memory_Used",
        derive: units::memory_gb,
    }]
}

pub fn pbs_fallbacks() -> Result<Vec<Fallback>> {
    Ok(vec![Fallback::attribute("Nodes", "exec_host")?])
}
