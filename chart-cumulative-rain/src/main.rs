//! Cumulative Rainfall Chart
//!
//! Overlays the cumulative rainfall of every water year on a shared
//! day-of-year axis. The current year is emphasised; hovering a line or a
//! legend entry highlights that year and shows its percentile tooltip, and an
//! optional forecast can be appended to the current year.
//!
//! Data flow:
//! 1. On mount, `rain.json` (plain or gzip) is fetched from next to the WASM
//!    bundle with a cache-busting query.
//! 2. The bytes are validated into a `Dataset` and wrapped in a
//!    `ChartInteraction`, which owns all hover and forecast state.
//! 3. Components render from that state and route mouse events back into it.

use dioxus::prelude::*;
use rain_chart_ui::components::{
    ChartHeader, ErrorDisplay, ForecastToggle, Legend, LoadingSpinner, RainChart,
};
use rain_chart_ui::js_bridge;
use rain_chart_ui::state::AppState;
use rain_core::{ChartConfig, ChartInteraction, Dataset};

/// Runtime-fetched dataset (served alongside WASM).
const RAIN_DATA_URL: &str = "./rain.json";

/// Widest plot the page lays out, in pixels.
const MAX_CHART_WIDTH: f64 = 1100.0;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("cumulative-rain-root"))
        .launch(App);
}

/// Fit the default geometry to the window once, at load time.
fn initial_config() -> ChartConfig {
    let mut config = ChartConfig::default();
    if let Some(viewport) = js_bridge::viewport_width() {
        config.width = (viewport - 32.0).clamp(480.0, MAX_CHART_WIDTH);
        config.height = (config.width * 2.0 / 3.0).round();
    }
    config
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset on mount
    use_effect(move || {
        spawn(async move {
            let url = js_bridge::cache_busted(RAIN_DATA_URL);
            let bytes = match js_bridge::fetch_bytes(&url).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::error!("Failed to fetch rainfall data: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to fetch rainfall data: {}", e)));
                    state.loading.set(false);
                    return;
                }
            };

            match Dataset::from_bytes(&bytes) {
                Ok(dataset) => {
                    log::info!(
                        "Loaded {} series, current year {}",
                        dataset.series().len(),
                        dataset.current().id
                    );
                    state
                        .chart
                        .set(Some(ChartInteraction::new(dataset, initial_config())));
                }
                Err(e) => {
                    log::error!("Rejected rainfall dataset: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Invalid rainfall data: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    let header = state.chart.read().as_ref().map(|chart| {
        (
            chart.dataset().title().to_string(),
            chart.effective().stats().summary(),
        )
    });

    rsx! {
        div {
            style: "padding: 16px; max-width: 1140px; margin: 0 auto;",
            if let Some((title, stats)) = header {
                ChartHeader { title: title, stats: stats }
            }
            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ForecastToggle {}
                RainChart {}
                Legend {}
            }
        }
    }
}
