use clap::Parser;
use std::path::PathBuf;

/// Show a summary of a PBS job from `qstat -xf`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The job id
    #[arg(required_unless_present = "input")]
    pub job: Option<String>,

    /// Parse captured qstat -xf output instead of running qstat ("-" reads stdin)
    #[arg(short = 'i', long = "input", conflicts_with = "qstat")]
    pub input: Option<PathBuf>,

    /// qstat executable, overrides the configured command
    #[arg(long = "qstat")]
    pub qstat: Option<String>,

    /// Print JSON instead of a table
    #[arg(long = "parseable")]
    pub parseable: bool,
}
