//! Inclusive date-range filtering over the joined table.

use chrono::NaiveDate;

use super::types::JoinedRecord;

/// Returns the rows whose date falls in the closed interval [start, end],
/// preserving input order.
///
/// The comparison internally uses the half-open interval [start, end + 1 day)
/// so the end date stays inclusive even though dates carry no time of day.
/// `start > end` yields an empty result, not an error.
pub fn filter_date_range(
    records: &[JoinedRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<JoinedRecord> {
    let Some(end_exclusive) = end.succ_opt() else {
        // end is NaiveDate::MAX; fall back to a closed upper bound.
        return records
            .iter()
            .filter(|r| r.dteday >= start && r.dteday <= end)
            .cloned()
            .collect();
    };

    records
        .iter()
        .filter(|r| r.dteday >= start && r.dteday < end_exclusive)
        .cloned()
        .collect()
}
