//! Core logic for interactive cumulative rainfall charts.
//!
//! One curve per water year, indexed by day of year, with an optional forecast
//! extension on the current year. This crate owns everything except drawing:
//!
//! - `series` / `effective`: the loaded dataset and the per-toggle effective
//!   sequences with their headline stats
//! - `percentile`: value and date percentiles used in tooltips
//! - `resolver`: which line the pointer is over
//! - `highlight`: emphasis levels and crosshair guides
//! - `tooltip`: tooltip text
//! - `interaction`: the state machine tying them to pointer, legend and
//!   forecast-toggle events
//!
//! # Usage
//!
//! ```rust
//! use rain_core::{ChartConfig, ChartInteraction, Dataset};
//!
//! let json = r##"{
//!     "title": "Rainfall",
//!     "years": [
//!         { "year": 2023, "isCurrentYear": false, "color": "#00f",
//!           "data": [{ "day": 0, "cumulative": 0.5, "date": "2022-10-01" },
//!                    { "day": 1, "cumulative": 1.5, "date": "2022-10-02" }] },
//!         { "year": 2024, "isCurrentYear": true, "color": "#f00",
//!           "data": [{ "day": 0, "cumulative": 0.2, "date": "2023-10-01" }] }
//!     ]
//! }"##;
//!
//! let dataset = Dataset::from_json(json).unwrap();
//! let mut chart = ChartInteraction::new(dataset, ChartConfig::default());
//!
//! chart.on_pointer_move(0.2, 0.25);
//! assert_eq!(chart.tooltip().unwrap().title, "2024 (current)");
//!
//! chart.on_pointer_leave();
//! assert!(chart.tooltip().is_none());
//! ```

pub mod calendar;
pub mod config;
pub mod effective;
pub mod error;
pub mod highlight;
pub mod interaction;
pub mod percentile;
pub mod resolver;
pub mod scale;
pub mod series;
pub mod tooltip;

#[cfg(test)]
mod fixtures;

pub use config::ChartConfig;
pub use effective::{AggregateStats, EffectiveDataset, EffectiveSeries};
pub use error::{DatasetError, Result};
pub use interaction::ChartInteraction;
pub use series::{Dataset, Sample, Series, SeriesId};
pub use tooltip::Tooltip;
