//! Rental counts grouped by weather condition.

use std::collections::HashMap;

use crate::dataset::{JoinedRecord, WeatherCondition};

use super::types::{WeatherGroup, WeatherSummary};

/// Groups the filtered rows by weather label and computes the mean daily
/// rental count per group, plus totals over the whole slice.
///
/// The four known categories are always emitted in code order so the chart
/// shape is deterministic; a category with no rows gets count 0 and mean 0.0.
/// "Unknown" is appended only when out-of-range codes are present.
pub fn summarize_weather(rows: &[JoinedRecord]) -> WeatherSummary {
    let mut sums: HashMap<&'static str, (u64, usize)> = HashMap::new();
    let mut total_cnt = 0u64;
    let mut total_registered = 0u64;
    let mut total_casual = 0u64;

    for row in rows {
        let entry = sums.entry(row.weather_label()).or_insert((0, 0));
        entry.0 += row.cnt_day;
        entry.1 += 1;

        total_cnt += row.cnt_day;
        total_registered += row.registered_day;
        total_casual += row.casual_day;
    }

    let mut groups = Vec::with_capacity(5);
    for condition in WeatherCondition::ALL {
        let (sum, count) = sums.get(condition.label()).copied().unwrap_or((0, 0));
        groups.push(WeatherGroup {
            label: condition.label(),
            rows: count,
            mean_cnt: if count == 0 {
                0.0
            } else {
                sum as f64 / count as f64
            },
        });
    }

    if let Some(&(sum, count)) = sums.get(WeatherCondition::UNKNOWN_LABEL) {
        groups.push(WeatherGroup {
            label: WeatherCondition::UNKNOWN_LABEL,
            rows: count,
            mean_cnt: sum as f64 / count as f64,
        });
    }

    WeatherSummary {
        groups,
        total_cnt,
        total_registered,
        total_casual,
    }
}
