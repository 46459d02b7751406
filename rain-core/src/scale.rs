//! Linear scales between data space and plot-area pixels.

use crate::config::ChartConfig;
use crate::series::Sample;
use std::fmt::Write;

/// Maps a continuous domain onto a pixel range (which may be inverted).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Build a scale; an empty domain is widened by one unit.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if (domain.1 - domain.0).abs() < f64::EPSILON {
            (domain.0, domain.0 + 1.0)
        } else {
            domain
        };
        Self { domain, range }
    }

    #[inline]
    pub fn project(&self, value: f64) -> f64 {
        let t = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let t = (px - self.range.0) / (self.range.1 - self.range.0);
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Evenly spaced "nice" tick values (steps of 1, 2 or 5 × 10^n) covering the domain.
    pub fn ticks(&self, approx_count: usize) -> Vec<f64> {
        let (lo, hi) = self.domain;
        let span = hi - lo;
        if span <= 0.0 || approx_count == 0 {
            return vec![lo];
        }
        let raw = span / approx_count as f64;
        let base = 10f64.powf(raw.log10().floor());
        let step = [1.0, 2.0, 5.0, 10.0]
            .iter()
            .map(|m| m * base)
            .find(|&s| span / s <= approx_count as f64)
            .unwrap_or(10.0 * base);

        let mut ticks = Vec::new();
        let mut value = (lo / step).ceil() * step;
        while value <= hi + step * 1e-9 {
            ticks.push(value);
            value += step;
        }
        ticks
    }
}

/// The x (day) and y (cumulative inches) scales for the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ChartScales {
    /// Days `[0, max_day]` across the plot width; values `[0, max_value]` bottom-up.
    pub fn new(config: &ChartConfig, max_value: f64) -> Self {
        Self {
            x: LinearScale::new((0.0, f64::from(config.max_day)), (0.0, config.plot_width())),
            y: LinearScale::new((0.0, max_value), (config.plot_height(), 0.0)),
        }
    }

    /// SVG path data for a step-after line: each value holds until the next day.
    pub fn step_path(&self, samples: &[Sample]) -> String {
        let mut path = String::with_capacity(samples.len() * 16);
        let mut points = samples
            .iter()
            .map(|s| (self.x.project(f64::from(s.day)), self.y.project(s.cumulative)));
        if let Some((x, y)) = points.next() {
            let _ = write!(path, "M{:.2},{:.2}", x, y);
        }
        for (x, y) in points {
            let _ = write!(path, "H{:.2}V{:.2}", x, y);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_and_invert() {
        let y = LinearScale::new((0.0, 20.0), (400.0, 0.0));
        assert_eq!(y.project(0.0), 400.0);
        assert_eq!(y.project(20.0), 0.0);
        assert_eq!(y.project(5.0), 300.0);
        assert_eq!(y.invert(300.0), 5.0);
    }

    #[test]
    fn test_empty_domain_is_widened() {
        let y = LinearScale::new((0.0, 0.0), (100.0, 0.0));
        assert_eq!(y.domain(), (0.0, 1.0));
        assert!(y.project(0.5).is_finite());
    }

    #[test]
    fn test_nice_ticks() {
        let y = LinearScale::new((0.0, 37.2), (500.0, 0.0));
        assert_eq!(y.ticks(10), vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0]);
    }

    #[test]
    fn test_step_path() {
        let config = ChartConfig {
            width: 365.0 + 80.0,
            height: 100.0 + 120.0,
            ..ChartConfig::default()
        };
        let scales = ChartScales::new(&config, 10.0);
        let samples = vec![
            Sample { day: 0, cumulative: 0.0, date: "2022-10-01".into() },
            Sample { day: 1, cumulative: 5.0, date: "2022-10-02".into() },
            Sample { day: 2, cumulative: 10.0, date: "2022-10-03".into() },
        ];
        assert_eq!(
            scales.step_path(&samples),
            "M0.00,100.00H1.00V50.00H2.00V0.00"
        );
        assert_eq!(scales.step_path(&[]), "");
    }

    #[test]
    fn test_chart_scales_from_config() {
        let config = ChartConfig::default();
        let scales = ChartScales::new(&config, 20.0);
        assert_eq!(scales.x.project(0.0), 0.0);
        assert_eq!(scales.x.project(365.0), config.plot_width());
        assert_eq!(scales.y.project(0.0), config.plot_height());
        assert_eq!(scales.y.project(20.0), 0.0);
    }
}
