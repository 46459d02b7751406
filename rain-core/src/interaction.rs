//! Hover state machine driving the chart.
//!
//! [`ChartInteraction`] is built once per loaded dataset. The renderer feeds
//! it pointer, legend and toggle events and draws whatever state results;
//! every handler replaces the hover state as a whole, so a half-updated
//! highlight is never observable.

use crate::calendar::{fallback_month_ticks, month_ticks, parse_sample_date, MonthTick};
use crate::config::ChartConfig;
use crate::effective::EffectiveDataset;
use crate::highlight::HighlightCoordinator;
use crate::resolver::{day_under_pointer, NearestSeriesResolver, Resolution};
use crate::scale::ChartScales;
use crate::series::{Dataset, SeriesId};
use crate::tooltip::{self, Tooltip};

/// Series to emphasise, and the day for a chart tooltip (`None` for legend).
type HoverTarget = Option<(usize, Option<u32>)>;

/// Chart interaction state for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInteraction {
    dataset: Dataset,
    config: ChartConfig,
    effective: EffectiveDataset,
    scales: ChartScales,
    month_ticks: Vec<MonthTick>,
    highlight: HighlightCoordinator,
    tooltip: Option<Tooltip>,
    resolution: Option<Resolution>,
}

impl ChartInteraction {
    /// Start with the forecast hidden and nothing hovered.
    pub fn new(dataset: Dataset, config: ChartConfig) -> Self {
        let effective = EffectiveDataset::derive(&dataset, false);
        let scales = ChartScales::new(&config, effective.max_cumulative());
        let month_ticks = dataset
            .series()
            .iter()
            .find_map(|s| s.samples.first())
            .and_then(|s| parse_sample_date(&s.date))
            .map(|start| month_ticks(start, config.max_day))
            .unwrap_or_else(fallback_month_ticks);

        Self {
            dataset,
            config,
            effective,
            scales,
            month_ticks,
            highlight: HighlightCoordinator::new(),
            tooltip: None,
            resolution: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn effective(&self) -> &EffectiveDataset {
        &self.effective
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    pub fn month_ticks(&self) -> &[MonthTick] {
        &self.month_ticks
    }

    pub fn highlight(&self) -> &HighlightCoordinator {
        &self.highlight
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Series resolved by the last pointer move, if it is still hovered.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub fn include_forecast(&self) -> bool {
        self.effective.include_forecast()
    }

    fn resolver(&self) -> NearestSeriesResolver {
        NearestSeriesResolver::new(self.scales.y, &self.config)
    }

    /// Pointer moved over the plot area, in data coordinates.
    pub fn on_pointer_move(&mut self, data_x: f64, data_y: f64) {
        let day = day_under_pointer(data_x, self.config.max_day);
        self.highlight.track_pointer(day, data_y);

        let resolution = self.resolver().resolve(data_x, data_y, self.effective.series());
        self.resolution = resolution;
        let target = resolution.map(|hit| {
            if let Some(value) = self.effective.series()[hit.series].value_at(hit.day) {
                self.highlight.snap_horizontal(value);
            }
            (hit.series, Some(hit.day))
        });
        self.apply(target);
    }

    /// Pointer left the plot area: clear highlight, guides and tooltip.
    pub fn on_pointer_leave(&mut self) {
        self.highlight.hide_guides();
        self.apply(None);
    }

    /// Pointer entered (`Some`) or left (`None`) a legend entry.
    pub fn on_legend_hover(&mut self, id: Option<&SeriesId>) {
        let target = id
            .and_then(|id| self.effective.find(id))
            .map(|(index, _)| (index, None));
        self.apply(target);
    }

    /// Show or hide the forecast, re-deriving everything from the original dataset.
    pub fn set_forecast(&mut self, include: bool) {
        if include == self.effective.include_forecast() {
            return;
        }
        self.effective = EffectiveDataset::derive(&self.dataset, include);
        self.scales = ChartScales::new(&self.config, self.effective.max_cumulative());
        self.highlight.hide_guides();
        self.apply(None);
        log::debug!(
            "Forecast {}: stats day {}",
            if include { "shown" } else { "hidden" },
            self.effective.stats().day_number
        );
    }

    fn apply(&mut self, target: HoverTarget) {
        if !matches!(target, Some((_, Some(_)))) {
            self.resolution = None;
        }
        match target {
            Some((index, day)) => {
                let series = &self.effective.series()[index];
                self.highlight.set_hovered(Some(series.id.clone()));
                self.tooltip = Some(tooltip::build(series, day, &self.effective));
            }
            None => {
                self.highlight.clear();
                self.tooltip = None;
            }
        }
    }
}
