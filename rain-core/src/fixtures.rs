//! Dataset builders shared by the unit tests.

use crate::series::{Dataset, Sample, Series, SeriesId};
use chrono::{Days, NaiveDate};

/// Samples starting at `first_day`, dated from 2022-10-01 as day 0.
pub fn samples(first_day: u32, values: &[f64]) -> Vec<Sample> {
    let origin = NaiveDate::from_ymd_opt(2022, 10, 1).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(offset, &cumulative)| {
            let day = first_day + offset as u32;
            Sample {
                day,
                cumulative,
                date: (origin + Days::new(u64::from(day)))
                    .format("%Y-%m-%d")
                    .to_string(),
            }
        })
        .collect()
}

pub fn series(id: &str, is_current: bool, values: &[f64]) -> Series {
    Series {
        id: SeriesId::from(id),
        is_current,
        color: "#888888".to_string(),
        samples: samples(0, values),
        forecast: None,
    }
}

/// Straight ramp from 0 to `total` over days `0..=last_day`.
fn ramp(total: f64, last_day: u32) -> Vec<f64> {
    (0..=last_day)
        .map(|d| total * f64::from(d) / f64::from(last_day))
        .collect()
}

/// Year1 (total 10, days 0..=364), Year2 (total 20, days 0..=364) and the
/// current Year3 (total 5, days 0..=100). With `with_forecast`, Year3 carries a
/// forecast for days 101..=120 rising to 7.
pub fn three_year_dataset(with_forecast: bool) -> Dataset {
    let mut year3 = series("Year3", true, &ramp(5.0, 100));
    if with_forecast {
        let forecast: Vec<f64> = (1..=20).map(|k| 5.0 + 2.0 * f64::from(k) / 20.0).collect();
        year3.forecast = Some(samples(101, &forecast));
    }
    Dataset::new(
        "Rainfall",
        vec![
            series("Year1", false, &ramp(10.0, 364)),
            series("Year2", false, &ramp(20.0, 364)),
            year3,
        ],
    )
    .unwrap()
}
