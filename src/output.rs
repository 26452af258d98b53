//! Static report output: chart SVGs and the RFM table as CSV.

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::types::RfmSummary;
use crate::charts::{correlation_heatmap, rfm_panel_chart, weather_bar_chart, working_day_chart};
use crate::dataset::JoinedRecord;
use crate::analyzers::{
    summarize_rfm, summarize_weather, summarize_working_day, windspeed_count_correlation,
};

/// Writes the per-date RFM rows as a CSV file, headers included.
pub fn write_rfm_csv(path: &Path, summary: &RfmSummary) -> Result<()> {
    debug!(path = %path.display(), rows = summary.rows.len(), "Writing RFM CSV");

    let mut writer = csv::Writer::from_path(path)?;
    for row in &summary.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Runs all four aggregations over the filtered rows and writes the charts
/// and the RFM table into `dir`, creating it if needed.
pub fn write_report(dir: &Path, filtered: &[JoinedRecord]) -> Result<RfmSummary> {
    fs::create_dir_all(dir)?;

    let weather = summarize_weather(filtered);
    let working_day = summarize_working_day(filtered);
    let correlation = windspeed_count_correlation(filtered);
    let rfm = summarize_rfm(filtered);

    fs::write(dir.join("weather.svg"), weather_bar_chart(&weather)?)?;
    fs::write(dir.join("working_day.svg"), working_day_chart(&working_day)?)?;
    fs::write(dir.join("correlation.svg"), correlation_heatmap(&correlation)?)?;
    fs::write(dir.join("rfm.svg"), rfm_panel_chart(&rfm)?)?;
    write_rfm_csv(&dir.join("rfm.csv"), &rfm)?;

    let summary = serde_json::json!({
        "rows": filtered.len(),
        "totals": {
            "cnt": weather.total_cnt,
            "registered": weather.total_registered,
            "casual": weather.total_casual,
        },
        "correlation": correlation,
        "rfm_averages": {
            "recency_days": rfm.avg_recency,
            "frequency": rfm.avg_frequency,
            "monetary_registered": rfm.avg_monetary_registered,
            "monetary_casual": rfm.avg_monetary_casual,
        },
    });
    fs::write(
        dir.join("summary.json"),
        serde_json::to_string_pretty(&summary)?,
    )?;

    info!(
        dir = %dir.display(),
        rows = filtered.len(),
        total_rentals = weather.total_cnt,
        "Report written"
    );

    Ok(rfm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_rows::row_with;
    use tempfile::tempdir;

    #[test]
    fn test_write_rfm_csv_has_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rfm.csv");
        let summary = summarize_rfm(&[
            row_with("2011-01-01", 1, 100),
            row_with("2011-01-02", 1, 200),
        ]);

        write_rfm_csv(&path, &summary).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("recency_days"));
        assert!(lines[1].contains("2011-01-01"));
    }

    #[test]
    fn test_write_report_creates_all_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("report");
        let rows = vec![
            row_with("2011-01-01", 1, 100),
            row_with("2011-01-02", 2, 200),
        ];

        write_report(&out, &rows).unwrap();

        for name in [
            "weather.svg",
            "working_day.svg",
            "correlation.svg",
            "rfm.svg",
            "rfm.csv",
            "summary.json",
        ] {
            assert!(out.join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn test_write_report_on_empty_rows() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("report");

        let rfm = write_report(&out, &[]).unwrap();

        assert!(rfm.rows.is_empty());
        assert!(out.join("correlation.svg").exists());
    }
}
