//! SVG plot of every cumulative series plus the hover overlay.
//!
//! Drawing is a pure function of the `ChartInteraction` held in [`AppState`];
//! the overlay converts mouse positions to data space and feeds them back
//! through the interaction's handlers.

use crate::state::AppState;
use dioxus::prelude::*;
use rain_core::highlight::Emphasis;

/// Alternating backgrounds between y-axis ticks.
const BAND_FILLS: [&str; 2] = ["#f4f4f4", "#ffffff"];
const GUIDE_STROKE: &str = "#777";
/// Tooltip offset from the pointer, in pixels.
const TOOLTIP_OFFSET: (f64, f64) = (10.0, -10.0);

struct LineView {
    key: String,
    path: String,
    color: String,
    width: f64,
    opacity: f64,
    filter: String,
    emphasis: Emphasis,
}

fn draw_order(emphasis: Emphasis) -> u8 {
    match emphasis {
        Emphasis::Normal => 0,
        Emphasis::Current => 1,
        Emphasis::Hovered => 2,
    }
}

#[component]
pub fn RainChart() -> Element {
    let mut state = use_context::<AppState>();
    // Last pointer position inside the plot area.
    let mut pointer = use_signal(|| None::<(f64, f64)>);

    let guard = state.chart.read();
    let Some(chart) = guard.as_ref() else {
        return rsx! {};
    };

    let config = *chart.config();
    let scales = *chart.scales();
    let plot_w = config.plot_width();
    let plot_h = config.plot_height();
    let margin_left = config.margin.left;
    let margin_top = config.margin.top;
    let highlight = chart.highlight();

    let mut lines: Vec<LineView> = chart
        .effective()
        .series()
        .iter()
        .map(|s| {
            let style = highlight.chart_style(s);
            LineView {
                key: s.id.to_string(),
                path: scales.step_path(s.samples()),
                color: s.color.clone(),
                width: style.stroke_width,
                opacity: style.opacity,
                filter: style
                    .shadow
                    .map(|f| format!("filter: {};", f))
                    .unwrap_or_default(),
                emphasis: highlight.emphasis(s),
            }
        })
        .collect();
    // Emphasised lines are painted last so they sit on top.
    lines.sort_by_key(|l| draw_order(l.emphasis));

    let y_ticks = scales.y.ticks(10);
    let bands: Vec<(f64, f64, &str)> = y_ticks
        .iter()
        .enumerate()
        .map(|(i, &tick)| {
            let bottom = scales.y.project(tick);
            let top = y_ticks
                .get(i + 1)
                .map(|&next| scales.y.project(next))
                .unwrap_or(0.0);
            (top, (bottom - top).max(0.0), BAND_FILLS[i % 2])
        })
        .collect();
    let y_labels: Vec<(f64, String)> = y_ticks
        .iter()
        .map(|&tick| (scales.y.project(tick), format!("{}", tick)))
        .collect();
    let x_labels: Vec<(f64, &str)> = chart
        .month_ticks()
        .iter()
        .map(|t| (scales.x.project(f64::from(t.day)), t.label))
        .collect();

    let guides = highlight.guides();
    let vertical = guides.vertical.map(|day| scales.x.project(f64::from(day)));
    let horizontal = guides.horizontal.map(|value| scales.y.project(value));

    // Legend tooltips have no pointer inside the plot; pin them top-left.
    let tooltip = chart.tooltip().cloned();
    let anchor = if guides.vertical.is_some() {
        pointer().unwrap_or((0.0, 0.0))
    } else {
        (plot_w * 0.05, 20.0)
    };
    let tip_left = margin_left + anchor.0 + TOOLTIP_OFFSET.0;
    let tip_top = margin_top + anchor.1 + TOOLTIP_OFFSET.1;

    let width = config.width;
    let height = config.height;
    let x_title_x = plot_w / 2.0;
    let x_title_y = plot_h + config.margin.bottom * 0.65;
    let y_title_x = -plot_h / 2.0;
    let y_title_y = 16.0 - margin_left;

    rsx! {
        div {
            style: "position: relative; width: {width}px; height: {height}px; font-family: sans-serif;",
            svg {
                style: "position: absolute; left: 0; top: 0;",
                width: "{width}",
                height: "{height}",
                g {
                    transform: "translate({margin_left},{margin_top})",
                    for (top, band_height, fill) in bands {
                        rect {
                            x: "0",
                            y: "{top}",
                            width: "{plot_w}",
                            height: "{band_height}",
                            fill: "{fill}",
                        }
                    }
                    for (y, label) in y_labels {
                        g {
                            transform: "translate(0,{y})",
                            line { x1: "-6", x2: "0", stroke: "#000" }
                            text {
                                x: "-9",
                                dy: "0.32em",
                                "text-anchor": "end",
                                "font-size": "11",
                                "{label}"
                            }
                        }
                    }
                    for (x, label) in x_labels {
                        g {
                            transform: "translate({x},{plot_h})",
                            line { y2: "6", stroke: "#000" }
                            text {
                                x: "4",
                                y: "18",
                                "text-anchor": "start",
                                "font-size": "11",
                                "{label}"
                            }
                        }
                    }
                    line { x1: "0", x2: "0", y1: "0", y2: "{plot_h}", stroke: "#000" }
                    line { x1: "0", x2: "{plot_w}", y1: "{plot_h}", y2: "{plot_h}", stroke: "#000" }
                    text {
                        transform: "rotate(-90)",
                        x: "{y_title_x}",
                        y: "{y_title_y}",
                        "text-anchor": "middle",
                        "font-size": "12",
                        "Cumulative rainfall (inches)"
                    }
                    text {
                        x: "{x_title_x}",
                        y: "{x_title_y}",
                        "text-anchor": "middle",
                        "font-size": "12",
                        "Day of water year"
                    }
                    for line in lines {
                        path {
                            key: "{line.key}",
                            d: "{line.path}",
                            fill: "none",
                            stroke: "{line.color}",
                            "stroke-width": "{line.width}",
                            opacity: "{line.opacity}",
                            style: "{line.filter}",
                        }
                    }
                    if let Some(x) = vertical {
                        line {
                            x1: "{x}",
                            x2: "{x}",
                            y1: "0",
                            y2: "{plot_h}",
                            stroke: GUIDE_STROKE,
                            "stroke-dasharray": "4,4",
                            "pointer-events": "none",
                        }
                    }
                    if let Some(y) = horizontal {
                        line {
                            x1: "0",
                            x2: "{plot_w}",
                            y1: "{y}",
                            y2: "{y}",
                            stroke: GUIDE_STROKE,
                            "stroke-dasharray": "4,4",
                            "pointer-events": "none",
                        }
                    }
                }
            }
            div {
                style: "position: absolute; left: {margin_left}px; top: {margin_top}px; width: {plot_w}px; height: {plot_h}px; cursor: crosshair;",
                onmousemove: move |evt: MouseEvent| {
                    let point = evt.element_coordinates();
                    pointer.set(Some((point.x, point.y)));
                    if let Some(chart) = state.chart.write().as_mut() {
                        let scales = *chart.scales();
                        chart.on_pointer_move(scales.x.invert(point.x), scales.y.invert(point.y));
                    }
                },
                onmouseleave: move |_| {
                    pointer.set(None);
                    if let Some(chart) = state.chart.write().as_mut() {
                        chart.on_pointer_leave();
                    }
                },
            }
            if let Some(tip) = tooltip {
                div {
                    style: "position: absolute; left: {tip_left}px; top: {tip_top}px; pointer-events: none; background: rgba(255,255,255,0.95); border: 1px solid #bbb; border-radius: 4px; padding: 6px 8px; font-size: 12px; white-space: nowrap; box-shadow: 0 1px 4px rgba(0,0,0,0.2);",
                    strong { "{tip.title}" }
                    for line in tip.lines.iter() {
                        div { "{line}" }
                    }
                }
            }
        }
    }
}
