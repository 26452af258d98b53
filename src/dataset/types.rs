//! Record types for the daily, hourly, and joined tables.

use chrono::NaiveDate;
use serde::Deserialize;

use super::weather::WeatherCondition;

/// One row of the daily CSV. Columns not listed here are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyRecord {
    pub dteday: NaiveDate,
    pub weathersit: u8,
    pub temp: f64,
    pub windspeed: f64,
    pub casual: u64,
    pub registered: u64,
    pub cnt: u64,
    pub workingday: u8,
}

/// One row of the hourly CSV, same shape as [`DailyRecord`] plus the hour.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyRecord {
    pub dteday: NaiveDate,
    pub hr: u8,
    pub weathersit: u8,
    pub temp: f64,
    pub windspeed: f64,
    pub casual: u64,
    pub registered: u64,
    pub cnt: u64,
    pub workingday: u8,
}

/// Inner join of an hourly row with its daily row.
///
/// Overlapping columns keep both contexts, hourly and daily. The weather
/// label is derived from the daily weather code; codes outside 1..=4 carry
/// as `None` and aggregate under "Unknown".
#[derive(Debug, Clone)]
pub struct JoinedRecord {
    pub dteday: NaiveDate,
    pub hr: u8,
    pub weathersit_hour: u8,
    pub weathersit_day: u8,
    pub temp_hour: f64,
    pub temp_day: f64,
    pub windspeed_hour: f64,
    pub windspeed_day: f64,
    pub casual_hour: u64,
    pub casual_day: u64,
    pub registered_hour: u64,
    pub registered_day: u64,
    pub cnt_hour: u64,
    pub cnt_day: u64,
    pub workingday_hour: u8,
    pub workingday_day: u8,
    pub weather: Option<WeatherCondition>,
}

impl JoinedRecord {
    /// Label used when grouping by weather condition.
    pub fn weather_label(&self) -> &'static str {
        WeatherCondition::label_of(self.weather)
    }
}

/// The immutable joined table owned by one dashboard run.
#[derive(Debug)]
pub struct BikeDataset {
    records: Vec<JoinedRecord>,
}

impl BikeDataset {
    pub fn new(records: Vec<JoinedRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[JoinedRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest date present in the joined table.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.dteday).min()
    }

    /// Latest date present in the joined table.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.dteday).max()
    }
}
