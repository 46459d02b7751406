//! Chart header: multi-line title and the headline percentile stats.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title; embedded newlines start a new line
    pub title: String,
    /// Stats line shown under the title (e.g., "Current Date Percentile: 43% ...")
    #[props(default = String::new())]
    pub stats: String,
}

/// Centered title block for the rainfall chart.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let lines: Vec<String> = props.title.split('\n').map(str::to_string).collect();

    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            for line in lines {
                h3 {
                    style: "margin: 0; font-size: 18px; font-weight: bold;",
                    "{line}"
                }
            }
            if !props.stats.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #666;",
                    "{props.stats}"
                }
            }
        }
    }
}
