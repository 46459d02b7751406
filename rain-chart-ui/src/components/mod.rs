//! Reusable Dioxus RSX components for the rainfall chart app.

mod chart_header;
mod error_display;
mod forecast_toggle;
mod legend;
mod loading_spinner;
mod rain_chart;

pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use forecast_toggle::ForecastToggle;
pub use legend::Legend;
pub use loading_spinner::LoadingSpinner;
pub use rain_chart::RainChart;
