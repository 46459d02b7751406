//! Tooltip text for chart and legend hovers.

use crate::calendar::format_sample_date;
use crate::effective::{EffectiveDataset, EffectiveSeries};
use crate::percentile::{date_percentile, value_percentile};
use std::fmt;

/// Appended to chart tooltips on forecast days.
pub const FORECAST_DISCLAIMER: &str = "Forecast values are projections, not observed rainfall.";

/// A bold title line followed by plain lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub title: String,
    pub lines: Vec<String>,
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for line in &self.lines {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// Build the tooltip for `series`.
///
/// With `day = None` this is the short legend form; with a day it is the
/// detailed chart form. `dataset` supplies the reference populations.
pub fn build(series: &EffectiveSeries, day: Option<u32>, dataset: &EffectiveDataset) -> Tooltip {
    let title = if series.is_current {
        format!("{} (current)", series.id)
    } else {
        series.id.to_string()
    };
    let totals = dataset.completed_totals();

    let lines = match day {
        Some(day) => match series.sample_at(day) {
            Some(sample) => {
                let forecast = series.is_forecast_day(day);
                let value = sample.cumulative;
                let total = series.total();

                let mut lines = Vec::with_capacity(5);
                lines.push(format!(
                    "{} (day {}{})",
                    format_sample_date(&sample.date),
                    day,
                    if forecast { ", forecast" } else { "" }
                ));
                lines.push(format!(
                    "Cumulative: {:.2}\"{}",
                    value,
                    percentile_suffix(date_percentile(day, value, dataset.series()), " for this date")
                ));
                lines.push(format!("{:.1}% of year total", fraction_of_total(value, total)));
                lines.push(format!(
                    "{}: {:.2}\"{}",
                    if series.includes_forecast() {
                        "Projected year total"
                    } else {
                        "Year total"
                    },
                    total,
                    percentile_suffix(value_percentile(total, &totals), "")
                ));
                if forecast {
                    lines.push(FORECAST_DISCLAIMER.to_string());
                }
                lines
            }
            None => {
                log::warn!("Tooltip requested for {} at day {} beyond its data", series.id, day);
                legend_lines(series, &totals)
            }
        },
        None => legend_lines(series, &totals),
    };

    Tooltip { title, lines }
}

/// Total to date and, for the current series, elapsed observed days.
/// A shown forecast adds a separate projected total.
fn legend_lines(series: &EffectiveSeries, totals: &[f64]) -> Vec<String> {
    let to_date = series.observed_total();
    let mut lines = vec![format!(
        "Total: {:.2}\"{}",
        to_date,
        percentile_suffix(value_percentile(to_date, totals), "")
    )];
    if series.includes_forecast() {
        let projected = series.total();
        lines.push(format!(
            "Projected total: {:.2}\"{}",
            projected,
            percentile_suffix(value_percentile(projected, totals), "")
        ));
    }
    if series.is_current {
        lines.push(format!("({} days)", series.observed_days()));
    }
    lines
}

fn percentile_suffix(percentile: Option<u32>, context: &str) -> String {
    percentile
        .map(|p| format!(" ({}%ile{})", p, context))
        .unwrap_or_default()
}

fn fraction_of_total(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{series, three_year_dataset};
    use crate::series::{Dataset, SeriesId};

    #[test]
    fn test_chart_hover_for_current_series() {
        let effective = EffectiveDataset::derive(&three_year_dataset(false), false);
        let tooltip = build(effective.current(), Some(50), &effective);

        assert_eq!(tooltip.title, "Year3 (current)");
        assert_eq!(
            tooltip.lines,
            vec![
                "Nov 20, 2022 (day 50)".to_string(),
                "Cumulative: 2.50\" (67%ile for this date)".to_string(),
                "50.0% of year total".to_string(),
                "Year total: 5.00\" (0%ile)".to_string(),
            ]
        );
    }

    #[test]
    fn test_chart_hover_on_forecast_day() {
        let effective = EffectiveDataset::derive(&three_year_dataset(true), true);
        let tooltip = build(effective.current(), Some(110), &effective);

        assert_eq!(tooltip.lines[0], "Jan 19, 2023 (day 110, forecast)");
        assert!(tooltip.lines[3].starts_with("Projected year total: 7.00\""));
        assert_eq!(tooltip.lines.last().unwrap(), FORECAST_DISCLAIMER);

        // An observed day of the same series carries no disclaimer.
        let observed_day = build(effective.current(), Some(90), &effective);
        assert_eq!(observed_day.lines[0], "Dec 30, 2022 (day 90)");
        assert!(!observed_day.lines.iter().any(|l| l == FORECAST_DISCLAIMER));
    }

    #[test]
    fn test_legend_hover() {
        let effective = EffectiveDataset::derive(&three_year_dataset(false), false);
        let (_, year1) = effective.find(&SeriesId::from("Year1")).unwrap();

        let tooltip = build(year1, None, &effective);
        assert_eq!(tooltip.to_string(), "Year1\nTotal: 10.00\" (50%ile)");

        let current = build(effective.current(), None, &effective);
        assert_eq!(
            current.to_string(),
            "Year3 (current)\nTotal: 5.00\" (0%ile)\n(101 days)"
        );
    }

    #[test]
    fn test_legend_hover_with_forecast_shown() {
        let effective = EffectiveDataset::derive(&three_year_dataset(true), true);
        assert_eq!(effective.current().len(), 121);

        let tooltip = build(effective.current(), None, &effective);
        assert_eq!(
            tooltip.lines,
            vec![
                "Total: 5.00\" (0%ile)".to_string(),
                "Projected total: 7.00\" (0%ile)".to_string(),
                "(101 days)".to_string(),
            ]
        );

        // Completed years are unaffected by the toggle.
        let (_, year2) = effective.find(&SeriesId::from("Year2")).unwrap();
        assert_eq!(build(year2, None, &effective).to_string(), "Year2\nTotal: 20.00\" (100%ile)");
    }

    #[test]
    fn test_percentiles_omitted_without_completed_years() {
        let dataset = Dataset::new("t", vec![series("2024", true, &[0.0, 0.0, 0.0])]).unwrap();
        let effective = EffectiveDataset::derive(&dataset, false);

        let tooltip = build(effective.current(), Some(1), &effective);
        assert_eq!(tooltip.lines[1], "Cumulative: 0.00\" (100%ile for this date)");
        assert_eq!(tooltip.lines[2], "0.0% of year total");
        assert_eq!(tooltip.lines[3], "Year total: 0.00\"");
    }

    #[test]
    fn test_day_beyond_series_falls_back_to_legend_form() {
        let effective = EffectiveDataset::derive(&three_year_dataset(false), false);
        let tooltip = build(effective.current(), Some(300), &effective);
        assert_eq!(tooltip, build(effective.current(), None, &effective));
    }
}
