//! Dioxus components and browser bridge for cumulative rainfall charts.
//!
//! This crate provides:
//! - `js_bridge`: fetching the dataset through the browser's `fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components that draw a `ChartInteraction` as SVG

pub mod components;
pub mod js_bridge;
pub mod state;
