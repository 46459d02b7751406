//! Effective sample sequences for a forecast-toggle state.
//!
//! Everything downstream of loading (resolver, highlight, tooltips, stats)
//! works on an [`EffectiveDataset`], never on the raw [`Dataset`]. Flipping the
//! forecast toggle derives a fresh `EffectiveDataset` from the same immutable
//! dataset, so none of those components branch on the toggle themselves.

use crate::series::{Dataset, Sample, Series, SeriesId};

/// A series' samples with or without its forecast appended.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveSeries {
    pub id: SeriesId,
    pub is_current: bool,
    pub color: String,
    samples: Vec<Sample>,
    observed_len: usize,
}

impl EffectiveSeries {
    fn derive(series: &Series, include_forecast: bool) -> Self {
        let mut samples = series.samples.clone();
        if include_forecast {
            if let Some(forecast) = &series.forecast {
                samples.extend(forecast.iter().cloned());
            }
        }
        Self {
            id: series.id.clone(),
            is_current: series.is_current,
            color: series.color.clone(),
            samples,
            observed_len: series.samples.len(),
        }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of effective samples (observed plus any included forecast).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_at(&self, day: u32) -> Option<&Sample> {
        self.samples.get(day as usize)
    }

    pub fn value_at(&self, day: u32) -> Option<f64> {
        self.sample_at(day).map(|s| s.cumulative)
    }

    /// Last effective day index.
    pub fn last_day(&self) -> u32 {
        self.samples.len().saturating_sub(1) as u32
    }

    /// Last observed (non-forecast) day index.
    pub fn last_observed_day(&self) -> u32 {
        self.observed_len.saturating_sub(1) as u32
    }

    /// Cumulative value at the last effective day.
    pub fn total(&self) -> f64 {
        self.samples.last().map(|s| s.cumulative).unwrap_or(0.0)
    }

    /// Cumulative value at the last observed day.
    pub fn observed_total(&self) -> f64 {
        self.observed_len
            .checked_sub(1)
            .and_then(|i| self.samples.get(i))
            .map(|s| s.cumulative)
            .unwrap_or(0.0)
    }

    /// Number of observed days so far.
    pub fn observed_days(&self) -> u32 {
        self.observed_len as u32
    }

    /// True when forecast samples are part of the effective sequence.
    pub fn includes_forecast(&self) -> bool {
        self.samples.len() > self.observed_len
    }

    /// True when `day` falls in the appended forecast extension.
    pub fn is_forecast_day(&self, day: u32) -> bool {
        self.includes_forecast() && day > self.last_observed_day() && day <= self.last_day()
    }
}

/// Headline statistics shown under the chart title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateStats {
    /// Last effective day of the current series.
    pub day_number: u32,
    /// Fraction of series reaching `day_number` that sit strictly below the
    /// current series on that day.
    pub current_date_percentile: f64,
    /// Fraction of completed years whose total is strictly below the current
    /// series' last effective value. `None` without any completed year.
    pub end_of_year_percentile: Option<f64>,
}

impl AggregateStats {
    fn compute(series: &[EffectiveSeries], current: &EffectiveSeries) -> Self {
        let day_number = current.last_day();
        let current_value = current.total();

        let at_day: Vec<f64> = series.iter().filter_map(|s| s.value_at(day_number)).collect();
        let below = at_day.iter().filter(|&&v| current_value > v).count();
        let current_date_percentile = below as f64 / at_day.len().max(1) as f64;

        let totals = completed_totals(series);
        let end_of_year_percentile = if totals.is_empty() {
            None
        } else {
            let below = totals.iter().filter(|&&t| current_value > t).count();
            Some(below as f64 / totals.len() as f64)
        };

        Self {
            day_number,
            current_date_percentile,
            end_of_year_percentile,
        }
    }

    /// One-line summary, e.g. `Current Date Percentile: 43%   End of Year Percentile: 61%`.
    pub fn summary(&self) -> String {
        let end_of_year = self
            .end_of_year_percentile
            .map(|p| format!("{:.0}%", p * 100.0))
            .unwrap_or_else(|| "n/a".to_string());
        format!(
            "Current Date Percentile: {:.0}%   End of Year Percentile: {}",
            self.current_date_percentile * 100.0,
            end_of_year
        )
    }
}

fn completed_totals(series: &[EffectiveSeries]) -> Vec<f64> {
    series
        .iter()
        .filter(|s| !s.is_current)
        .map(|s| s.total())
        .collect()
}

/// All series reduced to their effective sequences, plus derived stats.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveDataset {
    series: Vec<EffectiveSeries>,
    current: usize,
    include_forecast: bool,
    stats: AggregateStats,
}

impl EffectiveDataset {
    /// Derive effective sequences and stats for one toggle state.
    pub fn derive(dataset: &Dataset, include_forecast: bool) -> Self {
        let series: Vec<EffectiveSeries> = dataset
            .series()
            .iter()
            .map(|s| EffectiveSeries::derive(s, include_forecast))
            .collect();
        let current = series.iter().position(|s| s.is_current).unwrap_or(0);
        let stats = AggregateStats::compute(&series, &series[current]);
        log::debug!(
            "Derived effective dataset (forecast: {}): day {}, {}",
            include_forecast,
            stats.day_number,
            stats.summary()
        );
        Self {
            series,
            current,
            include_forecast,
            stats,
        }
    }

    pub fn series(&self) -> &[EffectiveSeries] {
        &self.series
    }

    pub fn current(&self) -> &EffectiveSeries {
        &self.series[self.current]
    }

    pub fn include_forecast(&self) -> bool {
        self.include_forecast
    }

    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    /// Position and series for a label.
    pub fn find(&self, id: &SeriesId) -> Option<(usize, &EffectiveSeries)> {
        self.series.iter().enumerate().find(|(_, s)| &s.id == id)
    }

    /// Year-end totals of every completed (non-current) series.
    pub fn completed_totals(&self) -> Vec<f64> {
        completed_totals(&self.series)
    }

    /// Largest cumulative value across all effective samples.
    pub fn max_cumulative(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.samples.iter().map(|x| x.cumulative))
            .fold(0.0, f64::max)
    }
}
