//! Annotated correlation heatmap.

use anyhow::Result;
use plotters::prelude::*;

use crate::analyzers::types::CorrelationMatrix;

const WIDTH: u32 = 560;
const HEIGHT: u32 = 480;
const CELL: i32 = 170;
const LEFT: i32 = 140;
const TOP: i32 = 80;

/// Renders the 2x2 correlation matrix as colored, annotated cells.
///
/// Positive values shade red, negative shade blue, NaN shades grey and is
/// annotated as such. Drawn in pixel coordinates; a 2x2 grid does not need a
/// chart coordinate system.
pub fn correlation_heatmap(matrix: &CorrelationMatrix) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        root.draw(&Text::new(
            "Correlation: Windspeed vs Rental Count",
            (40, 20),
            ("sans-serif", 22),
        ))?;

        for (i, row) in matrix.values.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                let x0 = LEFT + j as i32 * CELL;
                let y0 = TOP + i as i32 * CELL;

                root.draw(&Rectangle::new(
                    [(x0, y0), (x0 + CELL, y0 + CELL)],
                    cell_color(value).filled(),
                ))?;
                root.draw(&Rectangle::new(
                    [(x0, y0), (x0 + CELL, y0 + CELL)],
                    BLACK.stroke_width(1),
                ))?;

                let text = if value.is_nan() {
                    "NaN".to_string()
                } else {
                    format!("{value:.2}")
                };
                root.draw(&Text::new(
                    text,
                    (x0 + CELL / 2 - 18, y0 + CELL / 2 - 8),
                    ("sans-serif", 20),
                ))?;
            }
        }

        // Column headers above, row headers to the left.
        for (j, column) in matrix.columns.iter().enumerate() {
            root.draw(&Text::new(
                *column,
                (LEFT + j as i32 * CELL + 30, TOP - 25),
                ("sans-serif", 16),
            ))?;
            root.draw(&Text::new(
                *column,
                (15, TOP + j as i32 * CELL + CELL / 2 - 8),
                ("sans-serif", 16),
            ))?;
        }

        root.present()?;
    }

    Ok(svg)
}

/// White at zero, saturating red toward +1 and blue toward -1; grey for NaN.
fn cell_color(value: f64) -> RGBColor {
    if value.is_nan() {
        return RGBColor(200, 200, 200);
    }
    let v = value.clamp(-1.0, 1.0);
    let fade = (255.0 * (1.0 - v.abs())) as u8;
    if v >= 0.0 {
        RGBColor(255, fade, fade)
    } else {
        RGBColor(fade, fade, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heatmap_renders_values() {
        let matrix = CorrelationMatrix {
            columns: ["windspeed_day", "cnt_day"],
            values: [[1.0, -0.37], [-0.37, 1.0]],
        };

        let svg = correlation_heatmap(&matrix).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("-0.37"));
        assert!(svg.contains("windspeed_day"));
    }

    #[test]
    fn test_heatmap_renders_nan_cells() {
        let matrix = CorrelationMatrix {
            columns: ["windspeed_day", "cnt_day"],
            values: [[f64::NAN; 2]; 2],
        };

        let svg = correlation_heatmap(&matrix).unwrap();

        assert!(svg.contains("NaN"));
    }

    #[test]
    fn test_cell_color_extremes() {
        assert_eq!(cell_color(1.0), RGBColor(255, 0, 0));
        assert_eq!(cell_color(-1.0), RGBColor(0, 0, 255));
        assert_eq!(cell_color(0.0), RGBColor(255, 255, 255));
        assert_eq!(cell_color(f64::NAN), RGBColor(200, 200, 200));
    }
}
