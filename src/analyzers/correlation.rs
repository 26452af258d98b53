//! Windspeed / rental-count correlation.

use crate::dataset::JoinedRecord;

use super::types::CorrelationMatrix;
use super::utility::pearson;

/// Pearson correlation matrix over daily windspeed and daily rental count.
///
/// Entries are NaN when the correlation is undefined (fewer than two rows or
/// zero variance in a column), including the diagonal.
pub fn windspeed_count_correlation(rows: &[JoinedRecord]) -> CorrelationMatrix {
    let windspeed: Vec<f64> = rows.iter().map(|r| r.windspeed_day).collect();
    let cnt: Vec<f64> = rows.iter().map(|r| r.cnt_day as f64).collect();

    let series = [&windspeed, &cnt];
    let mut values = [[f64::NAN; 2]; 2];
    for (i, xs) in series.iter().enumerate() {
        for (j, ys) in series.iter().enumerate() {
            values[i][j] = pearson(xs, ys);
        }
    }

    CorrelationMatrix {
        columns: ["windspeed_day", "cnt_day"],
        values,
    }
}
