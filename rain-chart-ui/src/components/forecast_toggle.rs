//! Checkbox that adds or removes the current year's forecast.

use crate::state::AppState;
use dioxus::prelude::*;

/// Forecast toggle. Renders nothing when the current year has no forecast.
#[component]
pub fn ForecastToggle() -> Element {
    let mut state = use_context::<AppState>();
    let (available, checked) = state
        .chart
        .read()
        .as_ref()
        .map(|c| (c.dataset().current().has_forecast(), c.include_forecast()))
        .unwrap_or((false, false));

    if !available {
        return rsx! {};
    }

    let on_change = move |_evt: Event<FormData>| {
        if let Some(chart) = state.chart.write().as_mut() {
            let include = !chart.include_forecast();
            chart.set_forecast(include);
        }
    };

    rsx! {
        label {
            style: "display: inline-flex; align-items: center; gap: 6px; margin: 8px 0; font-size: 13px; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: on_change,
            }
            "Include forecast"
        }
    }
}
