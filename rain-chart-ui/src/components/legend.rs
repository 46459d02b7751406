//! Series legend. Hovering an entry highlights the matching chart line.

use crate::state::AppState;
use dioxus::prelude::*;
use rain_core::SeriesId;

struct LegendEntry {
    id: SeriesId,
    label: String,
    color: String,
    stroke_width: f64,
    font_weight: &'static str,
}

/// Legend listing the most recent year first.
#[component]
pub fn Legend() -> Element {
    let mut state = use_context::<AppState>();

    let entries: Vec<LegendEntry> = match state.chart.read().as_ref() {
        Some(chart) => chart
            .effective()
            .series()
            .iter()
            .rev()
            .map(|s| LegendEntry {
                id: s.id.clone(),
                label: s.id.to_string(),
                color: s.color.clone(),
                stroke_width: chart.highlight().legend_style(s).stroke_width,
                font_weight: if s.is_current { "bold" } else { "normal" },
            })
            .collect(),
        None => return rsx! {},
    };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(80px, 1fr)); gap: 2px 12px; margin-top: 8px; font-size: 11px;",
            for entry in entries {
                div {
                    key: "{entry.label}",
                    style: "display: flex; align-items: center; gap: 4px; cursor: pointer;",
                    onmouseenter: {
                        let id = entry.id.clone();
                        move |_| {
                            if let Some(chart) = state.chart.write().as_mut() {
                                chart.on_legend_hover(Some(&id));
                            }
                        }
                    },
                    onmouseleave: move |_| {
                        if let Some(chart) = state.chart.write().as_mut() {
                            chart.on_legend_hover(None);
                        }
                    },
                    svg {
                        width: "20",
                        height: "10",
                        line {
                            x1: "0",
                            x2: "20",
                            y1: "5",
                            y2: "5",
                            stroke: "{entry.color}",
                            "stroke-width": "{entry.stroke_width}",
                        }
                    }
                    span {
                        style: "font-weight: {entry.font_weight};",
                        "{entry.label}"
                    }
                }
            }
        }
    }
}
