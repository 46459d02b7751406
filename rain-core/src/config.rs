//! Chart geometry and interaction settings.

use serde::{Deserialize, Serialize};

/// Last valid day index on the x-axis. A water year is treated as 365 days
/// regardless of what the data contains.
pub const MAX_DAY: u32 = 365;

/// Maximum vertical distance, in display units, between the pointer and a
/// line for that line to count as hovered.
pub const HOVER_DISTANCE_THRESHOLD: f64 = 30.0;

/// Space reserved around the plot area for title, axes and legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 20.0,
            bottom: 60.0,
            left: 60.0,
        }
    }
}

/// Chart configuration shared by the web app and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Total chart width in pixels, margins included.
    pub width: f64,
    /// Total chart height in pixels, margins included.
    pub height: f64,
    pub margin: Margin,
    pub hover_threshold: f64,
    pub max_day: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 640.0,
            margin: Margin::default(),
            hover_threshold: HOVER_DISTANCE_THRESHOLD,
            max_day: MAX_DAY,
        }
    }
}

impl ChartConfig {
    /// Width of the plot area inside the margins.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(1.0)
    }

    /// Height of the plot area inside the margins.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(1.0)
    }
}
