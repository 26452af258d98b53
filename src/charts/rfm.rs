//! Four-panel top-5 figure for the RFM summary.

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::analyzers::types::{RfmRow, RfmSummary};

use super::series_color;

const WIDTH: u32 = 1400;
const HEIGHT: u32 = 420;

/// One figure with four bar panels: top-5 dates by recency (most recent
/// first), frequency, registered monetary, and casual monetary.
pub fn rfm_panel_chart(summary: &RfmSummary) -> Result<String> {
    let panels: [(&str, Vec<&RfmRow>, fn(&RfmRow) -> f64); 4] = [
        ("By Recency (days)", summary.top_by_recency(), |r| {
            r.recency_days as f64
        }),
        ("By Frequency", summary.top_by_frequency(), |r| {
            r.frequency as f64
        }),
        (
            "By Monetary (Registered)",
            summary.top_by_monetary_registered(),
            |r| r.monetary_registered as f64,
        ),
        (
            "By Monetary (Casual)",
            summary.top_by_monetary_casual(),
            |r| r.monetary_casual as f64,
        ),
    ];

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let titled = root.titled("Best Dates by RFM Parameters", ("sans-serif", 24))?;
        let areas = titled.split_evenly((1, 4));

        for (area, (title, rows, value_of)) in areas.iter().zip(panels) {
            let entries: Vec<(String, f64)> = rows
                .iter()
                .copied()
                .map(|r| (r.dteday.format("%m-%d").to_string(), value_of(r)))
                .collect();
            draw_rank_panel(area, title, &entries)?;
        }

        root.present()?;
    }

    Ok(svg)
}

fn draw_rank_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    title: &str,
    entries: &[(String, f64)],
) -> Result<()> {
    if entries.is_empty() {
        area.draw(&Text::new("no data", (30, 30), ("sans-serif", 16)))?;
        return Ok(());
    }

    let max = entries
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0f64, f64::max)
        .max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(8)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(-0.5f64..entries.len() as f64 - 0.5, 0f64..max * 1.1)?;

    let labels: Vec<String> = entries.iter().map(|(l, _)| l.clone()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(entries.len())
        .x_label_formatter(&move |x| {
            let i = x.round();
            if (x - i).abs() > 0.01 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .draw()?;

    for (i, (_, value)) in entries.iter().enumerate() {
        let x = i as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - 0.35, 0.0), (x + 0.35, *value)],
            series_color(i).filled(),
        )))?;
    }

    Ok(())
}
