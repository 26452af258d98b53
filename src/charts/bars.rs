//! Bar charts for the weather and working-day summaries.

use anyhow::Result;
use plotters::prelude::*;

use crate::analyzers::types::{WeatherSummary, WorkingDaySummary};

use super::series_color;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 500;

/// One bar per weather category with the mean daily rental count.
pub fn weather_bar_chart(summary: &WeatherSummary) -> Result<String> {
    let labels: Vec<&str> = summary.groups.iter().map(|g| g.label).collect();
    let max = summary
        .groups
        .iter()
        .map(|g| g.mean_cnt)
        .fold(0.0f64, f64::max)
        .max(1.0);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Rental Counts by Weather Condition", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(45)
            .y_label_area_size(65)
            .build_cartesian_2d(-0.5f64..labels.len() as f64 - 0.5, 0f64..max * 1.1)?;

        let label_axis = labels.clone();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len())
            .x_label_formatter(&move |x| {
                let i = x.round();
                if (x - i).abs() > 0.01 || i < 0.0 {
                    return String::new();
                }
                label_axis
                    .get(i as usize)
                    .map(|s| s.to_string())
                    .unwrap_or_default()
            })
            .x_desc("Weather Condition")
            .y_desc("Mean Daily Rentals")
            .axis_desc_style(("sans-serif", 15))
            .draw()?;

        for (i, group) in summary.groups.iter().enumerate() {
            let x = i as f64;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x - 0.35, 0.0), (x + 0.35, group.mean_cnt)],
                series_color(i).filled(),
            )))?;
        }

        root.present()?;
    }

    Ok(svg)
}

/// Grouped bars: one cluster per weather category, one bar per
/// customer-volume band, working days only.
pub fn working_day_chart(summary: &WorkingDaySummary) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        if summary.groups.is_empty() {
            root.draw(&Text::new(
                "No working-day rentals in the selected range",
                (40, 40),
                ("sans-serif", 18),
            ))?;
            root.present()?;
        } else {
            draw_working_day(&root, summary)?;
        }
    }

    Ok(svg)
}

fn draw_working_day(
    root: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    summary: &WorkingDaySummary,
) -> Result<()> {
    // Weather labels in first-seen order; groups are already sorted by label.
    let mut labels: Vec<&str> = Vec::new();
    for group in &summary.groups {
        if !labels.contains(&group.label) {
            labels.push(group.label);
        }
    }

    let max = summary
        .groups
        .iter()
        .map(|g| g.mean_cnt)
        .fold(0.0f64, f64::max)
        .max(1.0);
    let bands = summary.bands.len().max(1);
    let bar_width = 0.8 / bands as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Working-Day Rentals by Weather and Customer Volume",
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(-0.5f64..labels.len() as f64 - 0.5, 0f64..max * 1.1)?;

    let label_axis: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&move |x| {
            let i = x.round();
            if (x - i).abs() > 0.01 || i < 0.0 {
                return String::new();
            }
            label_axis.get(i as usize).cloned().unwrap_or_default()
        })
        .x_desc("Weather Condition")
        .y_desc("Mean Daily Rentals")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    for (band_index, band_label) in summary.bands.iter().enumerate() {
        let color = series_color(band_index);
        let bars: Vec<Rectangle<(f64, f64)>> = summary
            .groups
            .iter()
            .filter(|g| g.band_index == band_index)
            .filter_map(|g| {
                let li = labels.iter().position(|l| *l == g.label)? as f64;
                let x0 = li - 0.4 + band_index as f64 * bar_width;
                Some(Rectangle::new(
                    [(x0, 0.0), (x0 + bar_width, g.mean_cnt)],
                    color.filled(),
                ))
            })
            .collect();

        if bars.is_empty() {
            continue;
        }

        chart
            .draw_series(bars)?
            .label(band_label.clone())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
