//! Percentile statistics used by tooltips.
//!
//! Both functions return whole percents, rounded to the nearest integer, and
//! `None` when the reference population is empty. Populations are small (one
//! entry per year), so nothing is cached.

use crate::effective::EffectiveSeries;

/// Percentage of `population` at or below `value`.
///
/// Rank is `count(< value) + count(== value)`, so the maximum of the
/// population scores 100 and the minimum of `n` values scores `100 / n`.
/// The population is normally the year-end totals of completed years,
/// with the current year left out.
pub fn value_percentile(value: f64, population: &[f64]) -> Option<u32> {
    if population.is_empty() {
        return None;
    }
    let below = population.iter().filter(|&&t| t < value).count();
    let equal = population.iter().filter(|&&t| t == value).count();
    Some(as_percent(below + equal, population.len()))
}

/// Percentage of series reaching `day` whose value there is at or below `value`.
///
/// Series that end before `day` are left out of the numerator and the
/// denominator alike. The current series takes part like any other.
pub fn date_percentile(day: u32, value: f64, series: &[EffectiveSeries]) -> Option<u32> {
    let values: Vec<f64> = series.iter().filter_map(|s| s.value_at(day)).collect();
    if values.is_empty() {
        return None;
    }
    let at_or_below = values.iter().filter(|&&v| v <= value).count();
    Some(as_percent(at_or_below, values.len()))
}

fn as_percent(count: usize, total: usize) -> u32 {
    (count as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effective::EffectiveDataset;
    use crate::fixtures::{series, three_year_dataset};
    use crate::series::Dataset;

    #[test]
    fn test_value_percentile_examples() {
        assert_eq!(value_percentile(10.0, &[10.0, 20.0]), Some(50));
        assert_eq!(value_percentile(20.0, &[10.0, 20.0]), Some(100));
        assert_eq!(value_percentile(15.0, &[10.0, 20.0]), Some(50));
        assert_eq!(value_percentile(25.0, &[10.0, 20.0]), Some(100));
        assert_eq!(value_percentile(5.0, &[10.0, 20.0]), Some(0));
    }

    #[test]
    fn test_value_percentile_counts_ties_in_rank() {
        assert_eq!(value_percentile(3.0, &[3.0, 3.0, 3.0, 9.0]), Some(75));
        // 1 of 44 years rounds to 2%.
        let population: Vec<f64> = (1..=44).map(f64::from).collect();
        assert_eq!(value_percentile(1.0, &population), Some(2));
        assert_eq!(value_percentile(44.0, &population), Some(100));
    }

    #[test]
    fn test_value_percentile_empty_population() {
        assert_eq!(value_percentile(1.0, &[]), None);
    }

    #[test]
    fn test_value_percentile_in_range_and_monotonic() {
        let population = [4.2, 18.0, 9.5, 9.5, 30.1, 12.7, 22.0];
        let mut previous = 0;
        for step in 0..=400 {
            let value = 4.2 + step as f64 * 0.1;
            let p = value_percentile(value, &population).unwrap();
            assert!(p > 0 && p <= 100, "percentile {} out of range for {}", p, value);
            assert!(p >= previous, "percentile decreased at {}", value);
            previous = p;
        }
    }

    #[test]
    fn test_date_percentile_denominator_counts_series_reaching_day() {
        let dataset = Dataset::new(
            "t",
            vec![
                series("a", false, &[0.0, 1.0, 2.0, 3.0]),
                series("b", false, &[0.0, 2.0, 4.0, 6.0]),
                series("short", false, &[0.0, 0.5]),
                series("now", true, &[0.0, 3.0, 5.0]),
            ],
        )
        .unwrap();
        let effective = EffectiveDataset::derive(&dataset, false);

        // Day 2 values: 2.0, 4.0, 5.0. "short" is excluded entirely.
        assert_eq!(date_percentile(2, 4.0, effective.series()), Some(67));
        assert_eq!(date_percentile(2, 1.0, effective.series()), Some(0));
        assert_eq!(date_percentile(2, 5.0, effective.series()), Some(100));
        // Day 3 reached only by "a" and "b".
        assert_eq!(date_percentile(3, 3.0, effective.series()), Some(50));
        // Nobody reaches day 10.
        assert_eq!(date_percentile(10, 3.0, effective.series()), None);
    }

    #[test]
    fn test_date_percentile_end_to_end_example() {
        let effective = EffectiveDataset::derive(&three_year_dataset(false), false);
        let year3 = effective.current();
        let value = year3.value_at(50).unwrap();
        // Day 50: Year1 ~1.37, Year2 ~2.75, Year3 2.5.
        assert_eq!(value, 2.5);
        assert_eq!(date_percentile(50, value, effective.series()), Some(67));
        // Past day 100 only the two completed years remain.
        assert_eq!(date_percentile(200, 0.0, effective.series()), Some(0));
        assert_eq!(date_percentile(200, 100.0, effective.series()), Some(100));
    }
}
