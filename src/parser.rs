//! CSV parsers for the daily and hourly datasets.

use anyhow::{Context, Result};

use crate::dataset::{DailyRecord, HourlyRecord};

/// Deserializes the daily CSV. Extra columns are ignored; a missing column
/// or an unparseable value fails the whole load.
pub fn parse_daily_csv(bytes: &[u8]) -> Result<Vec<DailyRecord>> {
    let mut rdr = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: DailyRecord = result.context("malformed daily CSV row")?;
        rows.push(record);
    }

    Ok(rows)
}

/// Deserializes the hourly CSV, same policy as [`parse_daily_csv`].
pub fn parse_hourly_csv(bytes: &[u8]) -> Result<Vec<HourlyRecord>> {
    let mut rdr = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: HourlyRecord = result.context("malformed hourly CSV row")?;
        rows.push(record);
    }

    Ok(rows)
}
