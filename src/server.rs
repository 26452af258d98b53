//! The dashboard HTTP server.
//!
//! The joined dataset is built once at startup and shared immutably; every
//! request recomputes the date-range filter and all four aggregations from
//! it, so the page is a pure function of the current selection.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::analyzers::{
    summarize_rfm, summarize_weather, summarize_working_day, windspeed_count_correlation,
};
use crate::charts::{correlation_heatmap, rfm_panel_chart, weather_bar_chart, working_day_chart};
use crate::dataset::{BikeDataset, filter_date_range};

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<BikeDataset>,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(state)
}

/// Binds the listener and serves the dashboard until shutdown.
pub async fn serve(listen: &str, dataset: BikeDataset) -> Result<()> {
    let state = AppState {
        dataset: Arc::new(dataset),
    };
    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!(addr = %listener.local_addr()?, "Dashboard listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn dashboard(
    State(state): State<AppState>,
    Query(range): Query<RangeQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    match render_dashboard_page(&state.dataset, range.start, range.end) {
        Ok(page) => Ok(Html(page)),
        Err(e) => {
            error!(error = %e, "Failed to render dashboard");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to render dashboard".to_string(),
            ))
        }
    }
}

/// Builds the full dashboard page for the requested range.
///
/// Missing bounds default to the full span of the dataset. An empty filtered
/// range still renders; the sections degrade to zero metrics, empty charts,
/// and NaN correlation.
pub fn render_dashboard_page(
    dataset: &BikeDataset,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<String> {
    let start = start.or_else(|| dataset.min_date()).unwrap_or_default();
    let end = end.or_else(|| dataset.max_date()).unwrap_or_default();

    let filtered = filter_date_range(dataset.records(), start, end);

    let weather = summarize_weather(&filtered);
    let working_day = summarize_working_day(&filtered);
    let correlation = windspeed_count_correlation(&filtered);
    let rfm = summarize_rfm(&filtered);

    let weather_svg = weather_bar_chart(&weather)?;
    let working_day_svg = working_day_chart(&working_day)?;
    let heatmap_svg = correlation_heatmap(&correlation)?;
    let rfm_svg = rfm_panel_chart(&rfm)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Bike Sharing Rentals</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; max-width: 1500px; }}
form {{ margin-bottom: 2rem; }}
.metrics {{ display: flex; gap: 3rem; margin-bottom: 1rem; }}
.metrics strong {{ display: block; font-size: 1.6rem; }}
section {{ margin-bottom: 3rem; }}
</style>
</head>
<body>
<h1>Bike Sharing Rentals &#128690;</h1>
<form method="get">
<label>Start <input type="date" name="start" value="{start}"></label>
<label>End <input type="date" name="end" value="{end}"></label>
<button type="submit">Apply</button>
</form>
<section>
<h2>Rental Counts by Weather Condition</h2>
<div class="metrics">
<div><span>Total Rentals</span><strong>{total_cnt}</strong></div>
<div><span>Total Registered Users</span><strong>{total_registered}</strong></div>
<div><span>Total Casual Users</span><strong>{total_casual}</strong></div>
</div>
{weather_svg}
</section>
<section>
<h2>Working-Day Weather Breakdown</h2>
{working_day_svg}
</section>
<section>
<h2>Windspeed / Rental Count Correlation</h2>
{heatmap_svg}
</section>
<section>
<h2>RFM Summary</h2>
<p>Average Recency (days): {avg_recency}</p>
<p>Average Frequency: {avg_frequency}</p>
<p>Average Monetary (Registered): {avg_monetary_registered}</p>
<p>Average Monetary (Casual): {avg_monetary_casual}</p>
{rfm_svg}
</section>
</body>
</html>
"#,
        start = start,
        end = end,
        total_cnt = weather.total_cnt,
        total_registered = weather.total_registered,
        total_casual = weather.total_casual,
        weather_svg = weather_svg,
        working_day_svg = working_day_svg,
        heatmap_svg = heatmap_svg,
        avg_recency = rfm.avg_recency,
        avg_frequency = rfm.avg_frequency,
        avg_monetary_registered = rfm.avg_monetary_registered,
        avg_monetary_casual = rfm.avg_monetary_casual,
        rfm_svg = rfm_svg,
    ))
}
