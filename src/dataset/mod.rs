//! The in-memory bike-share dataset.
//!
//! Builds the joined hour-by-day table once at startup; everything downstream
//! (filtering, aggregation, charting) reads from it without mutating it.

pub mod filter;
pub mod merge;
pub mod types;
pub mod weather;

pub use filter::filter_date_range;
pub use merge::join_hourly_daily;
pub use types::{BikeDataset, DailyRecord, HourlyRecord, JoinedRecord};
pub use weather::WeatherCondition;

use anyhow::{Context, Result};
use tracing::info;

use crate::fetch::load_source;
use crate::parser::{parse_daily_csv, parse_hourly_csv};

/// Fetches both CSV sources, parses them, and joins them on the date key.
///
/// A single unreachable or malformed source fails the whole load; there is
/// no retry and no partial dataset.
pub async fn load(day_source: &str, hour_source: &str) -> Result<BikeDataset> {
    let day_bytes = load_source(day_source)
        .await
        .with_context(|| format!("failed to load daily source {day_source}"))?;
    let hour_bytes = load_source(hour_source)
        .await
        .with_context(|| format!("failed to load hourly source {hour_source}"))?;

    let daily = parse_daily_csv(&day_bytes)?;
    let hourly = parse_hourly_csv(&hour_bytes)?;

    let records = join_hourly_daily(&hourly, &daily);
    info!(
        daily_rows = daily.len(),
        hourly_rows = hourly.len(),
        joined_rows = records.len(),
        "Dataset loaded"
    );

    Ok(BikeDataset::new(records))
}
