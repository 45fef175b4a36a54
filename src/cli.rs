//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

use crate::adapters::csv_adapter::CsvUniverseAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::algorithm::{SentimentUniverseAlgorithm, UniverseAlgorithm};
use crate::domain::config_validation::{parse_cash, validate_all};
use crate::domain::error::SentimentError;
use crate::domain::replay::{self, ReplayReport};
use crate::domain::selection::UniverseFilter;
use crate::domain::settings::{AlgorithmSettings, DEFAULT_SOURCE, Resolution};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::UniverseDataPort;

#[derive(Parser, Debug)]
#[command(
    name = "sentiment-universe",
    about = "Daily universe selection from social-sentiment rankings"
)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the algorithm and replay every day of the configured range
    Run {
        #[arg(short, long)]
        config: PathBuf,
        /// Directory holding <universe>.csv, overrides [data] path
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Print the selection for a single date
    Select {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        date: NaiveDate,
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Run { config, data } => run_replay(&config, data.as_deref()),
        Command::Select { config, date, data } => run_select(&config, date, data.as_deref()),
        Command::Validate { config } => run_validate(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            (&e).into()
        }
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, SentimentError> {
    info!("Loading config from {}", path.display());
    let config = FileConfigAdapter::from_file(path)?;
    validate_all(&config)?;
    Ok(config)
}

pub fn build_settings(config: &dyn ConfigPort) -> Result<AlgorithmSettings, SentimentError> {
    let start_date = config
        .get_date("algorithm", "start_date")?
        .ok_or_else(|| SentimentError::ConfigMissing {
            section: "algorithm".into(),
            key: "start_date".into(),
        })?;
    let end_date = config
        .get_date("algorithm", "end_date")?
        .ok_or_else(|| SentimentError::ConfigMissing {
            section: "algorithm".into(),
            key: "end_date".into(),
        })?;

    let resolution = match config.get_string("algorithm", "resolution") {
        Some(raw) => raw
            .parse::<Resolution>()
            .map_err(|reason| SentimentError::ConfigInvalid {
                section: "algorithm".into(),
                key: "resolution".into(),
                reason,
            })?,
        None => Resolution::Daily,
    };

    let source = config
        .get_string("algorithm", "universe")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    let defaults = AlgorithmSettings::default();
    let filter = UniverseFilter::new(
        non_negative(config, "selection", "min_mentions", defaults.filter.min_mentions)?,
        non_negative(config, "selection", "max_rank", defaults.filter.max_rank)?,
    );

    Ok(AlgorithmSettings {
        start_date,
        end_date,
        cash: parse_cash(config)?,
        resolution,
        source,
        filter,
        history_days: config.get_int("startup", "history_days", defaults.history_days),
        min_history_records: non_negative(
            config,
            "startup",
            "min_records",
            defaults.min_history_records,
        )?,
    })
}

fn non_negative<T>(config: &dyn ConfigPort, section: &str, key: &str, default: T) -> Result<T, SentimentError>
where
    T: TryFrom<i64>,
{
    if config.get_string(section, key).is_none() {
        return Ok(default);
    }
    T::try_from(config.get_int(section, key, -1)).map_err(|_| SentimentError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: "value out of range".to_string(),
    })
}

/// `--data` wins, then `[data] path`, then the working directory.
pub fn resolve_data_path(data_override: Option<&Path>, config: &dyn ConfigPort) -> PathBuf {
    if let Some(p) = data_override {
        return p.to_path_buf();
    }
    config
        .get_string("data", "path")
        .filter(|s| !s.trim().is_empty())
        .map(|s| PathBuf::from(s.trim()))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn run_replay_pipeline(
    data_port: &dyn UniverseDataPort,
    settings: AlgorithmSettings,
) -> Result<ReplayReport, SentimentError> {
    let mut algorithm = SentimentUniverseAlgorithm::new(settings);
    let report = replay::run(&mut algorithm, data_port)?;

    for day in &report.selections {
        println!("{}: {}", day.date, day.symbols.join(","));
    }

    info!(
        "Replayed {} day(s), {} security change(s), {} symbol(s) active at end",
        report.selections.len(),
        report.changes.len(),
        report.final_selection().len()
    );
    Ok(report)
}

fn run_replay(config_path: &Path, data_override: Option<&Path>) -> Result<(), SentimentError> {
    let config = load_config(config_path)?;
    let settings = build_settings(&config)?;
    let data_port = CsvUniverseAdapter::new(resolve_data_path(data_override, &config));

    run_replay_pipeline(&data_port, settings).map(|_| ())
}

pub fn select_for_date(
    data_port: &dyn UniverseDataPort,
    settings: &AlgorithmSettings,
    date: NaiveDate,
) -> Result<Vec<String>, SentimentError> {
    let algorithm = SentimentUniverseAlgorithm::new(settings.clone());
    let batches = data_port.fetch_batches(&settings.source, date, date)?;

    let Some(batch) = batches.first() else {
        return Err(SentimentError::Data {
            reason: format!("no {} data for {}", settings.source, date),
        });
    };
    Ok(algorithm.universe_selection(batch))
}

fn run_select(
    config_path: &Path,
    date: NaiveDate,
    data_override: Option<&Path>,
) -> Result<(), SentimentError> {
    let config = load_config(config_path)?;
    let settings = build_settings(&config)?;
    let data_port = CsvUniverseAdapter::new(resolve_data_path(data_override, &config));

    let selected = select_for_date(&data_port, &settings, date)?;
    for symbol in &selected {
        println!("{}", symbol);
    }
    info!("{} symbol(s) selected for {}", selected.len(), date);
    Ok(())
}

fn run_validate(config_path: &Path) -> Result<(), SentimentError> {
    let config = load_config(config_path)?;
    let s = build_settings(&config)?;

    info!("Config validated successfully");
    eprintln!("\nAlgorithm:");
    eprintln!("  period:     {} to {}", s.start_date, s.end_date);
    eprintln!("  cash:       {:.2}", s.cash);
    eprintln!("  resolution: {}", s.resolution);
    eprintln!("  universe:   {}", s.source);
    eprintln!("\nSelection:");
    eprintln!("  mentions > {}", s.filter.min_mentions);
    eprintln!("  rank     < {}", s.filter.max_rank);
    eprintln!("\nStartup check:");
    eprintln!(
        "  {} day(s) of history, at least {} records",
        s.history_days, s.min_history_records
    );
    Ok(())
}
