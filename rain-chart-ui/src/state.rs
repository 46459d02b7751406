//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use rain_core::ChartInteraction;

/// Shared application state for the rainfall chart.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Chart interaction state (None until the dataset is loaded)
    pub chart: Signal<Option<ChartInteraction>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            chart: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
