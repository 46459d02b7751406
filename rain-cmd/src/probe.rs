//! `probe` subcommand output: what a pointer at a data-space position hovers.

use rain_core::ChartInteraction;

/// Move the pointer to (`day`, `value`) and describe the resulting hover.
pub fn render_probe(chart: &mut ChartInteraction, day: f64, value: f64) -> String {
    chart.on_pointer_move(day, value);

    let Some(rounded) = chart.highlight().guides().vertical else {
        return format!(
            "Day {} is outside the chart (0-{})",
            day,
            chart.config().max_day
        );
    };

    match (chart.resolution(), chart.tooltip()) {
        (Some(hit), Some(tip)) => format!(
            "Pointer at day {}, {:.2}\"\nNearest: {} ({:.1}px away)\n\n{}",
            rounded,
            value,
            chart.effective().series()[hit.series].id,
            hit.distance,
            tip
        ),
        _ => format!(
            "Pointer at day {}, {:.2}\"\nNo year within {}px",
            rounded,
            value,
            chart.config().hover_threshold
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::chart;

    #[test]
    fn test_probe_hits_current_year() {
        let mut chart = chart(false);
        let out = render_probe(&mut chart, 1.2, 2.3);

        assert!(out.starts_with("Pointer at day 1, 2.30\"\nNearest: 2024 ("));
        assert!(out.contains("\n\n2024 (current)\n"));
        assert_eq!(chart.highlight().hovered().map(|id| id.to_string()), Some("2024".to_string()));
        assert_eq!(chart.resolution().map(|hit| hit.series), Some(2));
    }

    #[test]
    fn test_probe_in_empty_space() {
        let mut chart = chart(false);
        let out = render_probe(&mut chart, 1.0, 7.0);
        assert_eq!(out, "Pointer at day 1, 7.00\"\nNo year within 30px");
        assert_eq!(chart.tooltip(), None);
    }

    #[test]
    fn test_probe_outside_domain() {
        let mut chart = chart(false);
        assert_eq!(render_probe(&mut chart, 400.0, 1.0), "Day 400 is outside the chart (0-365)");
    }
}
