//! Summary structs produced by the aggregation pipeline.

use chrono::NaiveDate;
use serde::Serialize;

/// One bar of the weather-condition chart.
#[derive(Debug, Serialize)]
pub struct WeatherGroup {
    pub label: &'static str,
    pub rows: usize,
    pub mean_cnt: f64,
}

/// Weather-condition rental counts plus the whole-range totals shown as
/// summary metrics.
#[derive(Debug, Serialize)]
pub struct WeatherSummary {
    pub groups: Vec<WeatherGroup>,
    pub total_cnt: u64,
    pub total_registered: u64,
    pub total_casual: u64,
}

/// One (weather label, customer-volume band) bar of the working-day chart.
#[derive(Debug, Serialize)]
pub struct WorkingDayGroup {
    pub label: &'static str,
    pub band_index: usize,
    pub rows: usize,
    pub mean_cnt: f64,
}

/// Working-day breakdown with the customer-volume series bucketed into
/// equal-width bands.
#[derive(Debug, Serialize)]
pub struct WorkingDaySummary {
    /// Band display labels, index-aligned with `WorkingDayGroup::band_index`.
    pub bands: Vec<String>,
    pub groups: Vec<WorkingDayGroup>,
}

/// Pairwise Pearson correlation over two named columns.
#[derive(Debug, Serialize)]
pub struct CorrelationMatrix {
    pub columns: [&'static str; 2],
    pub values: [[f64; 2]; 2],
}

/// Per-date recency/frequency/monetary aggregation row.
#[derive(Debug, Clone, Serialize)]
pub struct RfmRow {
    pub dteday: NaiveDate,
    pub recency_days: i64,
    pub frequency: u64,
    pub monetary_registered: u64,
    pub monetary_casual: u64,
}

/// RFM rows for the filtered range plus their display-rounded averages.
#[derive(Debug, Serialize)]
pub struct RfmSummary {
    pub rows: Vec<RfmRow>,
    pub avg_recency: f64,
    pub avg_frequency: f64,
    pub avg_monetary_registered: f64,
    pub avg_monetary_casual: f64,
}
