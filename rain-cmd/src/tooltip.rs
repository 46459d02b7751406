//! `tooltip` subcommand output.

use rain_core::{tooltip, ChartInteraction, SeriesId};

/// Tooltip text for `year`: the legend form, or the chart form at `day`.
pub fn render_tooltip(chart: &ChartInteraction, year: &str, day: Option<u32>) -> anyhow::Result<String> {
    let effective = chart.effective();
    let Some((_, series)) = effective.find(&SeriesId::from(year)) else {
        let known: Vec<String> = effective.series().iter().map(|s| s.id.to_string()).collect();
        anyhow::bail!("No year {} in dataset (have: {})", year, known.join(", "));
    };
    Ok(tooltip::build(series, day, effective).to_string())
}
