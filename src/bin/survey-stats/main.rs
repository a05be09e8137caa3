mod config;
mod report;

use crate::config::{Config, RecordsFile};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use survey_statistics::{
    MemoryStore, Metric, ParticipantStore, dashboard_metrics, metric_summary,
    phone_time_correlations, sample_participants, scatter, sex_comparison,
};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML file of `[[participant]]` entries; the bundled sample is used when omitted
    #[arg(long)]
    data: Option<PathBuf>,

    /// TOML analysis configuration
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List entries, oldest first
    List,

    /// Describe one metric
    Summary {
        #[arg(long)]
        metric: Metric,
    },

    /// Correlate screen time with the outcome scores
    Correlations,

    /// Fit a trend line through two metrics
    Trend {
        #[arg(long, default_value = "phone-time")]
        x: Metric,
        #[arg(long, default_value = "recovery")]
        y: Metric,
    },

    /// Compare metric means between sexes
    Compare,

    /// Print the headline figures
    Dashboard,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::debug!("{args:#?}");

    let config = match &args.config {
        Some(path) => Config::from_file(path).context("failed to load config")?,
        None => Config::default(),
    };
    log::debug!("{config:#?}");

    let records = match &args.data {
        Some(path) => RecordsFile::from_file(path).context("failed to load records")?,
        None => sample_participants(),
    };
    let store = MemoryStore::with_records(records);
    log::info!("loaded {} participant entries", store.count());

    let records = store.list();
    let out = match args.command {
        Command::List => report::listing(&records),
        Command::Summary { metric } => {
            report::summary(metric, &metric_summary(&records, metric, config.zero_policy))
        }
        Command::Correlations => report::correlations(&phone_time_correlations(
            &records,
            config.zero_policy,
            config.significance,
        )),
        Command::Trend { x, y } => report::trend(&scatter(&records, x, y)),
        Command::Compare => report::comparison(&sex_comparison(&records)),
        Command::Dashboard => report::dashboard(&dashboard_metrics(&records)),
    };
    print!("{out}");

    Ok(())
}
