//! Emphasis state for chart lines, legend lines and crosshair guides.
//!
//! Chart and legend both ask [`classify`] for a series' [`Emphasis`]; only the
//! line style attached to each level differs between the two.

use crate::effective::EffectiveSeries;
use crate::series::SeriesId;

/// How strongly a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Hovered,
    Current,
    Normal,
}

/// Stroke settings for one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub stroke_width: f64,
    pub opacity: f64,
    /// CSS `filter` value, if any.
    pub shadow: Option<&'static str>,
}

impl Emphasis {
    /// Style of the series' line in the plot area.
    pub fn chart_line(self) -> LineStyle {
        match self {
            Emphasis::Hovered => LineStyle {
                stroke_width: 5.0,
                opacity: 1.0,
                shadow: Some("drop-shadow(0px 0px 4px rgba(0,0,0,0.6))"),
            },
            Emphasis::Current => LineStyle {
                stroke_width: 3.75,
                opacity: 1.0,
                shadow: Some("drop-shadow(0px 0px 2px rgba(0,0,0,0.3))"),
            },
            Emphasis::Normal => LineStyle {
                stroke_width: 1.5,
                opacity: 0.6,
                shadow: None,
            },
        }
    }

    /// Style of the series' swatch in the legend.
    pub fn legend_line(self) -> LineStyle {
        let stroke_width = match self {
            Emphasis::Hovered => 4.0,
            Emphasis::Current => 2.0,
            Emphasis::Normal => 1.5,
        };
        LineStyle {
            stroke_width,
            opacity: 1.0,
            shadow: None,
        }
    }
}

/// Hovered beats current, current beats everything else.
pub fn classify(id: &SeriesId, is_current: bool, hovered: Option<&SeriesId>) -> Emphasis {
    if hovered == Some(id) {
        Emphasis::Hovered
    } else if is_current {
        Emphasis::Current
    } else {
        Emphasis::Normal
    }
}

/// Crosshair positions in data space; `None` hides a guide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Guides {
    /// Day the vertical guide sits on.
    pub vertical: Option<u32>,
    /// Value the horizontal guide sits on.
    pub horizontal: Option<f64>,
}

/// Owns the hovered series and the crosshair guides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HighlightCoordinator {
    hovered: Option<SeriesId>,
    guides: Guides,
}

impl HighlightCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&SeriesId> {
        self.hovered.as_ref()
    }

    pub fn guides(&self) -> Guides {
        self.guides
    }

    pub fn set_hovered(&mut self, id: Option<SeriesId>) {
        self.hovered = id;
    }

    /// Drop the hovered series so every line returns to its baseline.
    pub fn clear(&mut self) {
        self.hovered = None;
    }

    pub fn emphasis(&self, series: &EffectiveSeries) -> Emphasis {
        classify(&series.id, series.is_current, self.hovered.as_ref())
    }

    pub fn chart_style(&self, series: &EffectiveSeries) -> LineStyle {
        self.emphasis(series).chart_line()
    }

    pub fn legend_style(&self, series: &EffectiveSeries) -> LineStyle {
        self.emphasis(series).legend_line()
    }

    /// Place both guides on the pointer, or hide them when `day` is out of range.
    pub fn track_pointer(&mut self, day: Option<u32>, data_y: f64) {
        self.guides = match day {
            Some(day) => Guides {
                vertical: Some(day),
                horizontal: Some(data_y),
            },
            None => Guides::default(),
        };
    }

    /// Move the horizontal guide onto a resolved series' value.
    pub fn snap_horizontal(&mut self, value: f64) {
        if self.guides.vertical.is_some() {
            self.guides.horizontal = Some(value);
        }
    }

    pub fn hide_guides(&mut self) {
        self.guides = Guides::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effective::EffectiveDataset;
    use crate::fixtures::three_year_dataset;

    #[test]
    fn test_classify() {
        let year1 = SeriesId::from("Year1");
        let year3 = SeriesId::from("Year3");
        assert_eq!(classify(&year1, false, None), Emphasis::Normal);
        assert_eq!(classify(&year3, true, None), Emphasis::Current);
        assert_eq!(classify(&year1, false, Some(&year1)), Emphasis::Hovered);
        assert_eq!(classify(&year3, true, Some(&year3)), Emphasis::Hovered);
        assert_eq!(classify(&year3, true, Some(&year1)), Emphasis::Current);
    }

    #[test]
    fn test_chart_and_legend_agree_on_emphasis() {
        let effective = EffectiveDataset::derive(&three_year_dataset(false), false);
        let mut coordinator = HighlightCoordinator::new();
        coordinator.set_hovered(Some(SeriesId::from("Year2")));

        let widths: Vec<(f64, f64)> = effective
            .series()
            .iter()
            .map(|s| {
                (
                    coordinator.chart_style(s).stroke_width,
                    coordinator.legend_style(s).stroke_width,
                )
            })
            .collect();
        assert_eq!(widths, vec![(1.5, 1.5), (5.0, 4.0), (3.75, 2.0)]);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut coordinator = HighlightCoordinator::new();
        coordinator.set_hovered(Some(SeriesId::from("Year1")));
        coordinator.track_pointer(Some(12), 3.0);

        coordinator.clear();
        let once = coordinator.clone();
        coordinator.clear();
        assert_eq!(coordinator, once);
        assert_eq!(coordinator.hovered(), None);
    }

    #[test]
    fn test_guides_follow_pointer_and_snap() {
        let mut coordinator = HighlightCoordinator::new();
        coordinator.track_pointer(Some(40), 2.2);
        assert_eq!(
            coordinator.guides(),
            Guides {
                vertical: Some(40),
                horizontal: Some(2.2)
            }
        );

        coordinator.snap_horizontal(2.0);
        assert_eq!(coordinator.guides().horizontal, Some(2.0));

        coordinator.track_pointer(None, 2.2);
        assert_eq!(coordinator.guides(), Guides::default());
        coordinator.snap_horizontal(2.0);
        assert_eq!(coordinator.guides(), Guides::default());
    }
}
