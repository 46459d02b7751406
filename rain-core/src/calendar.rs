//! Calendar helpers for day-of-water-year axes and tooltip dates.

use chrono::{Datelike, NaiveDate};

/// Date format used for sample dates in the dataset: "YYYY-MM-DD"
pub const SAMPLE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Short month names indexed by `month0()`.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Axis ticks for a non-leap year starting on August 1, used when no sample date parses.
const AUGUST_START_TICKS: [(u32, &str); 12] = [
    (0, "Aug"),
    (31, "Sep"),
    (61, "Oct"),
    (92, "Nov"),
    (122, "Dec"),
    (153, "Jan"),
    (184, "Feb"),
    (212, "Mar"),
    (243, "Apr"),
    (273, "May"),
    (304, "Jun"),
    (334, "Jul"),
];

/// A labelled x-axis tick at the first day of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTick {
    pub day: u32,
    pub label: &'static str,
}

/// Parse a sample date in "YYYY-MM-DD" format
pub fn parse_sample_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), SAMPLE_DATE_FORMAT).ok()
}

/// Format a sample date as e.g. "Nov 5, 2023", falling back to the raw text.
pub fn format_sample_date(raw: &str) -> String {
    match parse_sample_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Month-start ticks for a year whose day 0 falls on `start`.
///
/// The first tick is always day 0, labelled with the start month; the
/// following ticks sit on the first of each month before `max_day`.
pub fn month_ticks(start: NaiveDate, max_day: u32) -> Vec<MonthTick> {
    let mut ticks = vec![MonthTick {
        day: 0,
        label: MONTH_LABELS[start.month0() as usize],
    }];

    let mut month_start = first_of_next_month(start);
    while let Some(date) = month_start {
        let day = (date - start).num_days();
        if day < 0 || day >= i64::from(max_day) {
            break;
        }
        ticks.push(MonthTick {
            day: day as u32,
            label: MONTH_LABELS[date.month0() as usize],
        });
        month_start = first_of_next_month(date);
    }
    ticks
}

/// Fixed ticks for an August-start year.
pub fn fallback_month_ticks() -> Vec<MonthTick> {
    AUGUST_START_TICKS
        .iter()
        .map(|&(day, label)| MonthTick { day, label })
        .collect()
}

fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = match date.month() {
        12 => (date.year() + 1, 1),
        m => (date.year(), m + 1),
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sample_date() {
        assert_eq!(format_sample_date("2023-11-05"), "Nov 5, 2023");
        assert_eq!(format_sample_date("2024-02-29"), "Feb 29, 2024");
        assert_eq!(format_sample_date("day 12"), "day 12");
    }

    #[test]
    fn test_october_start_ticks() {
        let oct1 = NaiveDate::from_ymd_opt(2022, 10, 1).unwrap();
        let ticks = month_ticks(oct1, 365);
        let days: Vec<u32> = ticks.iter().map(|t| t.day).collect();
        assert_eq!(days, vec![0, 31, 61, 92, 123, 151, 182, 212, 243, 273, 304, 335]);
        assert_eq!(ticks[0].label, "Oct");
        assert_eq!(ticks[3].label, "Jan");
        assert_eq!(ticks[11].label, "Sep");
    }

    #[test]
    fn test_august_start_ticks_match_fallback() {
        let aug1 = NaiveDate::from_ymd_opt(2022, 8, 1).unwrap();
        assert_eq!(month_ticks(aug1, 365), fallback_month_ticks());
    }

    #[test]
    fn test_mid_month_start() {
        let start = NaiveDate::from_ymd_opt(2022, 10, 15).unwrap();
        let ticks = month_ticks(start, 365);
        assert_eq!(ticks[0], MonthTick { day: 0, label: "Oct" });
        assert_eq!(ticks[1], MonthTick { day: 17, label: "Nov" });
    }
}
