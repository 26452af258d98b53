//! Chart rendering with Plotters into standalone SVG strings.
//!
//! Every chart function takes an analyzer summary and returns SVG text ready
//! to inline into the dashboard page or write to disk.

pub mod bars;
pub mod heatmap;
pub mod rfm;

pub use bars::{weather_bar_chart, working_day_chart};
pub use heatmap::correlation_heatmap;
pub use rfm::rfm_panel_chart;

use plotters::style::RGBColor;

/// Qualitative palette shared across charts.
pub(crate) const SERIES_COLORS: [RGBColor; 8] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

pub(crate) fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}
