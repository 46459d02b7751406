//! Loading indicator shown while the dataset is fetched.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading rainfall data...".to_string())]
    pub message: String,
    /// Height reserved so the page does not jump once the chart appears
    #[props(default = 400)]
    pub min_height: u32,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; min-height: {props.min_height}px; color: #666;",
            "{props.message}"
        }
    }
}
