//! Working-day rental breakdown by weather and customer volume.

use std::collections::HashMap;

use crate::dataset::{JoinedRecord, WeatherCondition};

use super::types::{WorkingDayGroup, WorkingDaySummary};

/// Number of equal-width customer-volume bands used for the series dimension.
pub const CUSTOMER_BANDS: usize = 4;

/// Restricts to working-day rows, derives `total_customers = registered_day +
/// casual_day` per row, and groups by (weather label, customer-volume band)
/// with the mean daily rental count per group.
///
/// The customer-volume dimension is bucketed into [`CUSTOMER_BANDS`]
/// equal-width bands over the observed range; one bar per distinct raw value
/// would make the chart unreadable for volume-like data. The input slice is
/// never mutated; the derived column exists only inside this function.
pub fn summarize_working_day(rows: &[JoinedRecord]) -> WorkingDaySummary {
    let working: Vec<&JoinedRecord> = rows.iter().filter(|r| r.workingday_day == 1).collect();

    if working.is_empty() {
        return WorkingDaySummary {
            bands: Vec::new(),
            groups: Vec::new(),
        };
    }

    let volumes: Vec<u64> = working
        .iter()
        .map(|r| r.registered_day + r.casual_day)
        .collect();
    let min = *volumes.iter().min().unwrap_or(&0);
    let max = *volumes.iter().max().unwrap_or(&0);

    // Band width over the closed [min, max] range, at least 1.
    let span = max - min + 1;
    let width = span.div_ceil(CUSTOMER_BANDS as u64).max(1);

    let band_of = |volume: u64| -> usize {
        (((volume - min) / width) as usize).min(CUSTOMER_BANDS - 1)
    };

    let bands: Vec<String> = (0..CUSTOMER_BANDS)
        .map(|i| {
            let lo = min + i as u64 * width;
            let hi = (lo + width - 1).min(max);
            format!("{lo}-{hi} customers")
        })
        .collect();

    let mut sums: HashMap<(&'static str, usize), (u64, usize)> = HashMap::new();
    for (row, volume) in working.iter().zip(&volumes) {
        let entry = sums
            .entry((row.weather_label(), band_of(*volume)))
            .or_insert((0, 0));
        entry.0 += row.cnt_day;
        entry.1 += 1;
    }

    let mut labels: Vec<&'static str> = WeatherCondition::ALL
        .iter()
        .map(|c| c.label())
        .collect();
    labels.push(WeatherCondition::UNKNOWN_LABEL);

    let mut groups = Vec::new();
    for label in labels {
        for band_index in 0..CUSTOMER_BANDS {
            if let Some(&(sum, count)) = sums.get(&(label, band_index)) {
                groups.push(WorkingDayGroup {
                    label,
                    band_index,
                    rows: count,
                    mean_cnt: sum as f64 / count as f64,
                });
            }
        }
    }

    WorkingDaySummary { bands, groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_rows::row_full;

    #[test]
    fn test_non_working_days_are_excluded() {
        let rows = vec![
            row_full("2011-01-01", 1, 100, 0.2, 500, 100, 0),
            row_full("2011-01-03", 1, 200, 0.2, 500, 100, 1),
        ];

        let summary = summarize_working_day(&rows);

        assert_eq!(summary.groups.len(), 1);
        assert_eq!(summary.groups[0].rows, 1);
        assert_eq!(summary.groups[0].mean_cnt, 200.0);
    }

    #[test]
    fn test_empty_input_yields_empty_summary() {
        let summary = summarize_working_day(&[]);
        assert!(summary.bands.is_empty());
        assert!(summary.groups.is_empty());
    }

    #[test]
    fn test_all_rows_in_same_band_when_volume_is_constant() {
        let rows = vec![
            row_full("2011-01-03", 1, 100, 0.2, 500, 100, 1),
            row_full("2011-01-04", 1, 300, 0.2, 500, 100, 1),
        ];

        let summary = summarize_working_day(&rows);

        assert_eq!(summary.bands.len(), CUSTOMER_BANDS);
        assert_eq!(summary.groups.len(), 1);
        assert_eq!(summary.groups[0].band_index, 0);
        assert_eq!(summary.groups[0].mean_cnt, 200.0);
    }

    #[test]
    fn test_volume_extremes_land_in_first_and_last_band() {
        let rows = vec![
            row_full("2011-01-03", 1, 100, 0.2, 100, 0, 1),
            row_full("2011-01-04", 1, 300, 0.2, 5000, 0, 1),
        ];

        let summary = summarize_working_day(&rows);

        let indices: Vec<usize> = summary.groups.iter().map(|g| g.band_index).collect();
        assert!(indices.contains(&0));
        assert!(indices.contains(&(CUSTOMER_BANDS - 1)));
    }

    #[test]
    fn test_groups_split_by_weather_label() {
        let rows = vec![
            row_full("2011-01-03", 1, 100, 0.2, 500, 100, 1),
            row_full("2011-01-04", 2, 300, 0.2, 500, 100, 1),
        ];

        let summary = summarize_working_day(&rows);

        assert_eq!(summary.groups.len(), 2);
        assert_eq!(summary.groups[0].label, "Clear");
        assert_eq!(summary.groups[1].label, "Mist");
    }
}
