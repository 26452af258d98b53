//! CLI entry point for the bike-share rental dashboard.
//!
//! Provides subcommands for serving the browser dashboard and for rendering
//! a one-shot static report for a date range.

use anyhow::Result;
use bikeshare_dash::dataset::{self, filter_date_range};
use bikeshare_dash::output::write_report;
use bikeshare_dash::server;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_DAY_SOURCE: &str =
    "https://raw.githubusercontent.com/MitaAdhani/day-datasheet/main/day.csv";
const DEFAULT_HOUR_SOURCE: &str =
    "https://raw.githubusercontent.com/MitaAdhani/day-datasheet/main/hour.csv";

#[derive(Parser)]
#[command(name = "bikeshare_dash")]
#[command(about = "Analytics dashboard over the bike-sharing rental dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the browser dashboard
    Serve {
        /// Daily CSV source (file path or URL)
        #[arg(long, default_value = DEFAULT_DAY_SOURCE)]
        day_source: String,

        /// Hourly CSV source (file path or URL)
        #[arg(long, default_value = DEFAULT_HOUR_SOURCE)]
        hour_source: String,

        /// Address to listen on
        #[arg(short, long, default_value = "0.0.0.0:8501")]
        listen: String,
    },
    /// Render a static report (SVG charts + RFM CSV) for a date range
    Render {
        /// Daily CSV source (file path or URL)
        #[arg(long, default_value = DEFAULT_DAY_SOURCE)]
        day_source: String,

        /// Hourly CSV source (file path or URL)
        #[arg(long, default_value = DEFAULT_HOUR_SOURCE)]
        hour_source: String,

        /// Start date (inclusive), default = earliest date in the data
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End date (inclusive), default = latest date in the data
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Directory to write the report into
        #[arg(short, long, default_value = "report")]
        output_dir: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_dash.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_dash.log"));

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
        Commands::Serve {
            day_source,
            hour_source,
            listen,
        } => {
            let data = dataset::load(&day_source, &hour_source).await?;
            server::serve(&listen, data).await?;
        }
        Commands::Render {
            day_source,
            hour_source,
            start,
            end,
            output_dir,
        } => {
            let data = dataset::load(&day_source, &hour_source).await?;

            let start = start.or_else(|| data.min_date()).unwrap_or_default();
            let end = end.or_else(|| data.max_date()).unwrap_or_default();
            info!(%start, %end, "Rendering report");

            let filtered = filter_date_range(data.records(), start, end);
            let rfm = write_report(Path::new(&output_dir), &filtered)?;

            info!(
                avg_recency = rfm.avg_recency,
                avg_frequency = rfm.avg_frequency,
                avg_monetary_registered = rfm.avg_monetary_registered,
                avg_monetary_casual = rfm.avg_monetary_casual,
                "RFM averages"
            );
        }
    }

    Ok(())
}
