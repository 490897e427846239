mod arg;
use anyhow::{Context, Result};
use arg::Args;
use clap::Parser;
use jobinfo::{display, qstat, QstatCommand, Settings};
use jobinfo_common::{
    configuration::get_configuration,
    log,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings: Settings =
        get_configuration("jobinfo").context("Failed to read configuration.")?;
    if let Some(program) = args.qstat {
        settings.qstat.command = program;
    }

    let subscriber = get_subscriber("jobinfo".into(), settings.log.level.clone(), std::io::stderr);
    init_subscriber(subscriber);
    log!(debug, "{}", settings);

    let raw = match (&args.input, &args.job) {
        (Some(path), _) => qstat::read_capture(path).await?,
        (None, Some(job_id)) => {
            QstatCommand::from_settings(&settings.qstat)
                .fetch(job_id)
                .await?
        }
        (None, None) => anyhow::bail!("A job id is required"),
    };

    let result = jobinfo_common::parse(&raw);
    log!(
        debug,
        "Parsed {} of {} fields",
        result.iter().filter(|(_, v)| !v.is_unknown()).count(),
        result.len()
    );

    if args.parseable {
        println!("{}", display::render_json(&result)?);
    } else {
        print!("{}", display::render_table(&result));
    }

    Ok(())
}
