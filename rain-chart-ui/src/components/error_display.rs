//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Bold lead-in before the message
    #[props(default = "Could not load rainfall data:".to_string())]
    pub heading: String,
}

/// Displays a load failure in place of the chart.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{props.heading} " }
            "{props.message}"
        }
    }
}
