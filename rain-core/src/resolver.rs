//! Nearest-series hit testing.
//!
//! The pointer arrives in data space (fractional day, cumulative inches).
//! The day is rounded to the nearest sample index, then every series that has
//! a sample on that day is compared in display units along the value axis.
//! Comparing in pixels rather than inches keeps the hover radius constant no
//! matter how tall the y-axis is.

use crate::config::ChartConfig;
use crate::effective::EffectiveSeries;
use crate::scale::LinearScale;

/// The series the pointer is considered to be over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Position of the series in dataset order.
    pub series: usize,
    pub day: u32,
    /// Vertical distance between pointer and line, in display units.
    pub distance: f64,
}

/// Round a fractional day half-up and keep it only when within `[0, max_day]`.
pub fn day_under_pointer(data_x: f64, max_day: u32) -> Option<u32> {
    let day = (data_x + 0.5).floor();
    if (0.0..=f64::from(max_day)).contains(&day) {
        Some(day as u32)
    } else {
        None
    }
}

/// Finds the series closest to the pointer along the value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestSeriesResolver {
    y: LinearScale,
    threshold: f64,
    max_day: u32,
}

impl NearestSeriesResolver {
    pub fn new(y: LinearScale, config: &ChartConfig) -> Self {
        Self {
            y,
            threshold: config.hover_threshold,
            max_day: config.max_day,
        }
    }

    /// Resolve a data-space pointer against `series`.
    ///
    /// Series without a sample on the rounded day are skipped. On equal
    /// distances the series earlier in `series` wins. Returns `None` when the
    /// day is out of range or the nearest line is `threshold` or more away.
    pub fn resolve(&self, data_x: f64, data_y: f64, series: &[EffectiveSeries]) -> Option<Resolution> {
        let day = day_under_pointer(data_x, self.max_day)?;
        let pointer_px = self.y.project(data_y);

        let mut best: Option<Resolution> = None;
        for (index, s) in series.iter().enumerate() {
            let Some(value) = s.value_at(day) else {
                continue;
            };
            let distance = (pointer_px - self.y.project(value)).abs();
            match best {
                Some(current) if current.distance <= distance => {}
                _ => {
                    best = Some(Resolution {
                        series: index,
                        day,
                        distance,
                    })
                }
            }
        }

        best.filter(|r| r.distance < self.threshold)
    }
}
