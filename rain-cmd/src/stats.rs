//! `stats` subcommand output.

use rain_core::percentile::value_percentile;
use rain_core::ChartInteraction;

/// Title, headline percentiles, then one row per year (most recent first).
pub fn render_stats(chart: &ChartInteraction) -> String {
    let effective = chart.effective();
    let totals = effective.completed_totals();

    let mut out = String::new();
    for line in chart.dataset().title_lines() {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&effective.stats().summary());
    out.push_str(&format!(" (day {})\n\n", effective.stats().day_number));

    out.push_str(&format!("{:<16} {:>10} {:>10}\n", "Year", "Total", "Percentile"));
    for series in effective.series().iter().rev() {
        let label = if series.is_current {
            format!("{} (current)", series.id)
        } else {
            series.id.to_string()
        };
        let percentile = value_percentile(series.total(), &totals)
            .map(|p| format!("{}%", p))
            .unwrap_or_else(|| "n/a".to_string());
        out.push_str(&format!(
            "{:<16} {:>9.2}\" {:>10}\n",
            label,
            series.total(),
            percentile
        ));
    }
    out.trim_end().to_string()
}
