//! Per-date RFM (recency / frequency / monetary) aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::dataset::JoinedRecord;

use super::types::{RfmRow, RfmSummary};
use super::utility::round_to;

/// Groups the filtered rows by date and computes, per date:
/// recency (days between the latest date in the slice and this date),
/// frequency (number of hourly rows), and monetary (sums of the daily-context
/// registered and casual counts over those rows).
///
/// Averages are rounded for display: recency to one decimal, the rest to two.
/// An empty slice yields no rows and NaN averages.
pub fn summarize_rfm(rows: &[JoinedRecord]) -> RfmSummary {
    let mut per_date: BTreeMap<NaiveDate, (u64, u64, u64)> = BTreeMap::new();
    for row in rows {
        let entry = per_date.entry(row.dteday).or_insert((0, 0, 0));
        entry.0 += 1;
        entry.1 += row.registered_day;
        entry.2 += row.casual_day;
    }

    let Some(max_date) = per_date.keys().next_back().copied() else {
        return RfmSummary {
            rows: Vec::new(),
            avg_recency: f64::NAN,
            avg_frequency: f64::NAN,
            avg_monetary_registered: f64::NAN,
            avg_monetary_casual: f64::NAN,
        };
    };

    let rfm_rows: Vec<RfmRow> = per_date
        .into_iter()
        .map(|(date, (frequency, registered, casual))| RfmRow {
            dteday: date,
            recency_days: (max_date - date).num_days(),
            frequency,
            monetary_registered: registered,
            monetary_casual: casual,
        })
        .collect();

    let n = rfm_rows.len() as f64;
    let avg = |f: fn(&RfmRow) -> f64| rfm_rows.iter().map(f).sum::<f64>() / n;

    RfmSummary {
        avg_recency: round_to(avg(|r| r.recency_days as f64), 1),
        avg_frequency: round_to(avg(|r| r.frequency as f64), 2),
        avg_monetary_registered: round_to(avg(|r| r.monetary_registered as f64), 2),
        avg_monetary_casual: round_to(avg(|r| r.monetary_casual as f64), 2),
        rows: rfm_rows,
    }
}

impl RfmSummary {
    /// Up to five dates with the lowest recency, most recent first.
    pub fn top_by_recency(&self) -> Vec<&RfmRow> {
        self.top_by(|r| r.recency_days as f64, true)
    }

    /// Up to five dates with the highest frequency.
    pub fn top_by_frequency(&self) -> Vec<&RfmRow> {
        self.top_by(|r| r.frequency as f64, false)
    }

    /// Up to five dates with the highest registered monetary value.
    pub fn top_by_monetary_registered(&self) -> Vec<&RfmRow> {
        self.top_by(|r| r.monetary_registered as f64, false)
    }

    /// Up to five dates with the highest casual monetary value.
    pub fn top_by_monetary_casual(&self) -> Vec<&RfmRow> {
        self.top_by(|r| r.monetary_casual as f64, false)
    }

    fn top_by(&self, key: impl Fn(&RfmRow) -> f64, ascending: bool) -> Vec<&RfmRow> {
        let mut refs: Vec<&RfmRow> = self.rows.iter().collect();
        refs.sort_by(|a, b| {
            let ord = key(a).total_cmp(&key(b));
            let ord = if ascending { ord } else { ord.reverse() };
            // Ties break on date so rankings are deterministic.
            ord.then_with(|| a.dteday.cmp(&b.dteday))
        });
        refs.truncate(5);
        refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_rows::row_full;

    fn day(date: &str, hours: u8, registered: u64, casual: u64) -> Vec<JoinedRecord> {
        (0..hours)
            .map(|_| row_full(date, 1, 100, 0.2, registered, casual, 1))
            .collect()
    }

    #[test]
    fn test_recency_of_max_date_is_zero() {
        let mut rows = day("2011-01-01", 2, 500, 100);
        rows.extend(day("2011-01-03", 1, 500, 100));

        let summary = summarize_rfm(&rows);

        let last = summary.rows.last().unwrap();
        assert_eq!(last.dteday, "2011-01-03".parse().unwrap());
        assert_eq!(last.recency_days, 0);
        assert_eq!(summary.rows[0].recency_days, 2);
    }

    #[test]
    fn test_frequency_counts_hourly_rows() {
        let mut rows = day("2011-01-01", 3, 500, 100);
        rows.extend(day("2011-01-02", 1, 500, 100));

        let summary = summarize_rfm(&rows);

        assert_eq!(summary.rows[0].frequency, 3);
        assert_eq!(summary.rows[1].frequency, 1);
    }

    #[test]
    fn test_monetary_sums_daily_context_counts() {
        let rows = day("2011-01-01", 2, 600, 50);

        let summary = summarize_rfm(&rows);

        // Two hourly rows carry the daily values twice; the fan-out from the
        // join is intentional.
        assert_eq!(summary.rows[0].monetary_registered, 1200);
        assert_eq!(summary.rows[0].monetary_casual, 100);
    }

    #[test]
    fn test_averages_are_rounded_for_display() {
        let mut rows = day("2011-01-01", 1, 500, 100);
        rows.extend(day("2011-01-02", 2, 500, 100));

        let summary = summarize_rfm(&rows);

        // Recencies 1 and 0 -> 0.5; frequencies 1 and 2 -> 1.5.
        assert_eq!(summary.avg_recency, 0.5);
        assert_eq!(summary.avg_frequency, 1.5);
        assert_eq!(summary.avg_monetary_registered, 750.0);
    }

    #[test]
    fn test_empty_input_yields_nan_averages() {
        let summary = summarize_rfm(&[]);

        assert!(summary.rows.is_empty());
        assert!(summary.avg_recency.is_nan());
        assert!(summary.avg_frequency.is_nan());
        assert!(summary.top_by_recency().is_empty());
    }

    #[test]
    fn test_top_by_recency_is_most_recent_first() {
        let mut rows = Vec::new();
        for date in [
            "2011-01-01",
            "2011-01-02",
            "2011-01-03",
            "2011-01-04",
            "2011-01-05",
            "2011-01-06",
        ] {
            rows.extend(day(date, 1, 500, 100));
        }

        let summary = summarize_rfm(&rows);
        let top = summary.top_by_recency();

        assert_eq!(top.len(), 5);
        assert_eq!(top[0].dteday, "2011-01-06".parse().unwrap());
        assert_eq!(top[0].recency_days, 0);
        assert_eq!(top[4].dteday, "2011-01-02".parse().unwrap());
    }

    #[test]
    fn test_top_by_monetary_is_descending() {
        let mut rows = day("2011-01-01", 1, 100, 10);
        rows.extend(day("2011-01-02", 1, 900, 10));
        rows.extend(day("2011-01-03", 1, 400, 10));

        let summary = summarize_rfm(&rows);
        let top = summary.top_by_monetary_registered();

        assert_eq!(top[0].dteday, "2011-01-02".parse().unwrap());
        assert_eq!(top[1].dteday, "2011-01-03".parse().unwrap());
        assert_eq!(top[2].dteday, "2011-01-01".parse().unwrap());
    }

    #[test]
    fn test_ties_break_on_date() {
        let mut rows = day("2011-01-02", 1, 500, 100);
        rows.extend(day("2011-01-01", 1, 500, 100));

        let summary = summarize_rfm(&rows);
        let top = summary.top_by_frequency();

        assert_eq!(top[0].dteday, "2011-01-01".parse().unwrap());
    }
}
