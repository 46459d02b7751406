//! Rainfall series and the dataset loaded once per page view.
//!
//! The JSON document has the shape produced by the rainfall export script:
//!
//! ```text
//! {
//!   "title": "Castro Valley, CA: Cumulative Rainfall\nby Water Year",
//!   "years": [
//!     { "year": 2023, "isCurrentYear": false, "color": "#6a00ff",
//!       "data": [{ "day": 0, "cumulative": 0.0, "date": "2022-10-01" }, ...] },
//!     { "year": 2024, "isCurrentYear": true, "color": "#ff0000",
//!       "data": [...], "forecast": [...] }
//!   ]
//! }
//! ```
//!
//! Unknown fields (such as the exporter's precomputed `stats`) are ignored;
//! aggregate statistics are recomputed from the effective sequences.

use crate::error::{DatasetError, Result};
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::io::Read;

/// Leading bytes of a gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Identity of a series: its year label.
///
/// The exporter writes years as JSON numbers, hand-written files sometimes
/// use strings; both deserialize to the same label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "YearLabel")]
pub struct SeriesId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum YearLabel {
    Number(i64),
    Text(String),
}

impl From<YearLabel> for SeriesId {
    fn from(label: YearLabel) -> Self {
        match label {
            YearLabel::Number(year) => SeriesId(year.to_string()),
            YearLabel::Text(text) => SeriesId(text),
        }
    }
}

impl From<&str> for SeriesId {
    fn from(label: &str) -> Self {
        SeriesId(label.to_string())
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single (day, cumulative value, date) point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample {
    /// Day within the water year (0 = first day).
    pub day: u32,
    /// Cumulative rainfall in inches up to and including this day.
    pub cumulative: f64,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
}

/// One year's cumulative rainfall curve.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Series {
    #[serde(rename = "year")]
    pub id: SeriesId,
    #[serde(rename = "isCurrentYear", default)]
    pub is_current: bool,
    /// Display color, assigned by the exporter and passed through untouched.
    #[serde(default)]
    pub color: String,
    #[serde(rename = "data")]
    pub samples: Vec<Sample>,
    /// Projected samples continuing after the last observed day.
    #[serde(default)]
    pub forecast: Option<Vec<Sample>>,
}

impl Series {
    /// Index of the last observed (non-forecast) day.
    pub fn last_observed_day(&self) -> u32 {
        self.samples.last().map(|s| s.day).unwrap_or(0)
    }

    /// Whether the series carries a non-empty forecast extension.
    pub fn has_forecast(&self) -> bool {
        self.forecast.as_ref().is_some_and(|f| !f.is_empty())
    }

    fn validate(&self) -> Result<()> {
        let year = || self.id.to_string();
        if self.samples.is_empty() {
            return Err(DatasetError::EmptySeries { year: year() });
        }
        let floor = validate_sequence(&self.id, &self.samples, 0, 0.0)?;

        if let Some(forecast) = &self.forecast {
            if !forecast.is_empty() && !self.is_current {
                return Err(DatasetError::ForecastOnCompletedSeries { year: year() });
            }
            validate_sequence(&self.id, forecast, self.samples.len() as u32, floor)?;
        }
        Ok(())
    }
}

/// Checks day contiguity and monotonic cumulative values, returning the last value.
fn validate_sequence(id: &SeriesId, samples: &[Sample], first_day: u32, floor: f64) -> Result<f64> {
    let mut previous = floor;
    for (offset, sample) in samples.iter().enumerate() {
        let expected = first_day + offset as u32;
        if sample.day != expected {
            return Err(DatasetError::NonContiguousDay {
                year: id.to_string(),
                expected,
                found: sample.day,
            });
        }
        if !sample.cumulative.is_finite() || sample.cumulative < 0.0 {
            return Err(DatasetError::InvalidValue {
                year: id.to_string(),
                day: sample.day,
                value: sample.cumulative,
            });
        }
        if sample.cumulative < previous {
            return Err(DatasetError::Decreasing {
                year: id.to_string(),
                day: sample.day,
            });
        }
        previous = sample.cumulative;
    }
    Ok(previous)
}

#[derive(Deserialize)]
struct RawDataset {
    title: String,
    #[serde(rename = "years")]
    series: Vec<Series>,
}

/// All series for one chart render.
///
/// A `Dataset` can only be built through [`Dataset::new`] or the parsing
/// helpers, so every instance satisfies the load-time invariants: contiguous
/// days, non-decreasing values, unique labels, exactly one current series and
/// forecasts only on that series. It is never mutated after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    title: String,
    series: Vec<Series>,
    current: usize,
}

impl Dataset {
    /// Validate the series and build a dataset.
    pub fn new(title: impl Into<String>, series: Vec<Series>) -> Result<Self> {
        if series.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::new();
        for s in &series {
            if !seen.insert(&s.id) {
                return Err(DatasetError::DuplicateSeries(s.id.to_string()));
            }
            s.validate()?;
        }

        let current: Vec<usize> = series
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_current)
            .map(|(i, _)| i)
            .collect();
        if current.len() != 1 {
            return Err(DatasetError::CurrentSeriesCount(current.len()));
        }

        Ok(Self {
            title: title.into(),
            series,
            current: current[0],
        })
    }

    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let dataset = Self::new(raw.title, raw.series)?;
        log::info!(
            "Loaded rainfall dataset with {} series (current: {})",
            dataset.series.len(),
            dataset.current().id
        );
        Ok(dataset)
    }

    /// Parse raw bytes, transparently decompressing gzip.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.starts_with(&GZIP_MAGIC) {
            let mut json = String::new();
            GzDecoder::new(bytes).read_to_string(&mut json)?;
            Self::from_json(&json)
        } else {
            Self::from_json(std::str::from_utf8(bytes)?)
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title split on embedded newlines, one entry per rendered line.
    pub fn title_lines(&self) -> impl Iterator<Item = &str> {
        self.title.split('\n')
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The single series flagged as the current (incomplete) year.
    pub fn current(&self) -> &Series {
        &self.series[self.current]
    }

    pub fn get(&self, id: &SeriesId) -> Option<&Series> {
        self.series.iter().find(|s| &s.id == id)
    }
}
