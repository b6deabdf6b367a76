//! CLI entry point for the F1 lap pipeline.
//!
//! Provides subcommands for generating a random lap dataset, summarizing an
//! existing one, and running both stages back to back.

use anyhow::Result;
use clap::{Parser, Subcommand};
use f1_lap_pipeline::analyzers::analyzer::analyze;
use f1_lap_pipeline::analyzers::types::NOT_AVAILABLE;
use f1_lap_pipeline::generator::{GeneratorConfig, ROSTER, generate_lap_times};
use f1_lap_pipeline::output::export_laps;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const LAPS_FILE: &str = "f1_generate_lap_times.csv";
const SUMMARY_FILE: &str = "top-3-drivers-result.csv";

#[derive(Parser)]
#[command(name = "f1_lap_pipeline")]
#[command(about = "Generate F1 lap times and rank the top 3 drivers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone)]
struct GenerateArgs {
    /// Seed for reproducible lap times
    #[arg(long)]
    seed: Option<u64>,

    /// Fewest laps per driver
    #[arg(long, default_value_t = 3)]
    min_laps: u32,

    /// Up to this many extra laps per driver
    #[arg(long, default_value_t = 5)]
    extra_laps: u32,
}

impl GenerateArgs {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            min_laps: self.min_laps,
            extra_laps: self.extra_laps,
            seed: self.seed,
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random lap dataset for the driver roster
    Generate {
        /// CSV file to write laps to
        #[arg(short, long, default_value = LAPS_FILE)]
        output: PathBuf,

        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Validate a lap dataset and write the top 3 drivers by average lap time
    Summarize {
        /// Lap CSV to read
        #[arg(short, long, default_value = LAPS_FILE)]
        input: PathBuf,

        /// CSV file to write the summary to
        #[arg(short, long, default_value = SUMMARY_FILE)]
        output: PathBuf,

        /// Optional: also write a JSON report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Generate a dataset and summarize it
    Run {
        /// Directory for both CSV files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Optional: also write a JSON report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        #[command(flatten)]
        args: GenerateArgs,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/f1_lap_pipeline.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("f1_lap_pipeline.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { output, args } => {
            generate(&output, &args.config())?;
        }
        Commands::Summarize {
            input,
            output,
            report,
        } => {
            analyze(&input, &output, report.as_deref())?;
        }
        Commands::Run { dir, report, args } => {
            std::fs::create_dir_all(&dir)?;
            let laps_path = dir.join(LAPS_FILE);
            let summary_path = dir.join(SUMMARY_FILE);

            generate(&laps_path, &args.config())?;
            let summary = analyze(&laps_path, &summary_path, report.as_deref())?;

            for (rank, row) in summary.top.iter().enumerate() {
                let fastest = row
                    .fastest_time
                    .map_or_else(|| NOT_AVAILABLE.to_string(), |t| t.to_string());
                info!(
                    rank = rank + 1,
                    driver = %row.driver,
                    average = %row.average_time,
                    fastest = %fastest,
                    "Top driver"
                );
            }
        }
    }

    Ok(())
}

/// Generates laps for the built-in roster and writes them to `path`.
#[tracing::instrument(skip_all, fields(path = %path.display(), seed = ?config.seed))]
fn generate(path: &Path, config: &GeneratorConfig) -> Result<()> {
    let laps = generate_lap_times(ROSTER, config)?;
    export_laps(path, &laps)
}
