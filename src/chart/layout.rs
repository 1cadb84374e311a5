//! Axis limits, ticks and quadrant annotations derived from the data.

use crate::constants::chart::{AXIS_PADDING, TICK_STEP};
use crate::error::AppError;
use crate::ratings::{LeagueAverages, RatingEntry};

/// Axis limits in the order they are applied: `start` maps to the left or
/// bottom edge, `end` to the right or top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub start: f64,
    pub end: f64,
}

impl AxisLimits {
    /// True when larger values are drawn closer to the origin.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// True when `value` lies between the limits, inclusive, in either
    /// orientation.
    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = if self.is_inverted() {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        };
        (lo..=hi).contains(&value)
    }
}

/// Corner of the plotting area an annotation is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Static text box classifying one quadrant relative to the averages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantLabel {
    pub corner: Corner,
    pub lines: [&'static str; 2],
}

/// The defensive axis is inverted, so the top of the chart holds the
/// better defenses and the right side the better offenses.
pub const QUADRANT_LABELS: [QuadrantLabel; 4] = [
    QuadrantLabel {
        corner: Corner::TopLeft,
        lines: ["Poor Offense", "Good Defense"],
    },
    QuadrantLabel {
        corner: Corner::TopRight,
        lines: ["Good Offense", "Good Defense"],
    },
    QuadrantLabel {
        corner: Corner::BottomLeft,
        lines: ["Poor Offense", "Poor Defense"],
    },
    QuadrantLabel {
        corner: Corner::BottomRight,
        lines: ["Good Offense", "Poor Defense"],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x_limits: AxisLimits,
    pub y_limits: AxisLimits,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub averages: LeagueAverages,
}

impl ChartLayout {
    /// Computes the layout for a set of entries. Fails when there is nothing
    /// to plot.
    pub fn compute(entries: &[RatingEntry], averages: LeagueAverages) -> Result<Self, AppError> {
        if entries.is_empty() {
            return Err(AppError::render_error("No teams to plot"));
        }

        let (min_off, max_off) = bounds(entries.iter().map(|e| e.offensive_rating));
        let (min_def, max_def) = bounds(entries.iter().map(|e| e.defensive_rating));

        Ok(ChartLayout {
            x_limits: AxisLimits {
                start: min_off.floor() - AXIS_PADDING,
                end: max_off.ceil() + AXIS_PADDING,
            },
            y_limits: AxisLimits {
                start: max_def.ceil() + AXIS_PADDING,
                end: min_def.floor() - AXIS_PADDING,
            },
            x_ticks: ticks(min_off, max_off),
            y_ticks: ticks(min_def, max_def),
            averages,
        })
    }

    /// Position of the vertical average line, `None` when the average lies
    /// outside the x limits and the line would not be visible.
    pub fn offense_reference(&self) -> Option<f64> {
        Some(self.averages.offense).filter(|v| self.x_limits.contains(*v))
    }

    /// Position of the horizontal average line, `None` when it lies outside
    /// the y limits.
    pub fn defense_reference(&self) -> Option<f64> {
        Some(self.averages.defense).filter(|v| self.y_limits.contains(*v))
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Ticks every [`TICK_STEP`] from `floor(min)` up to, not including,
/// `ceil(max) + 1`.
pub fn ticks(min: f64, max: f64) -> Vec<f64> {
    let start = min.floor();
    let stop = max.ceil() + 1.0;
    let count = ((stop - start) / TICK_STEP).ceil().max(0.0) as usize;
    (0..count).map(|i| start + i as f64 * TICK_STEP).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn averages() -> LeagueAverages {
        LeagueAverages {
            offense: 113.0,
            defense: 113.0,
        }
    }

    #[test]
    fn test_y_limits_are_inverted() {
        let entries = vec![
            TestDataBuilder::entry("A", None, 110.5, 108.0, 1, 1),
            TestDataBuilder::entry("B", None, 117.2, 118.0, 1, 1),
        ];
        let layout = ChartLayout::compute(&entries, averages()).unwrap();

        assert_eq!(layout.y_limits, AxisLimits { start: 119.0, end: 107.0 });
        assert!(layout.y_limits.is_inverted());
        assert_eq!(layout.x_limits, AxisLimits { start: 109.0, end: 119.0 });
        assert!(!layout.x_limits.is_inverted());
    }

    #[test]
    fn test_ticks_every_two_units() {
        assert_eq!(ticks(108.0, 118.0), vec![108.0, 110.0, 112.0, 114.0, 116.0, 118.0]);
        assert_eq!(ticks(110.5, 117.2), vec![110.0, 112.0, 114.0, 116.0, 118.0]);
        assert_eq!(ticks(105.3, 106.1), vec![105.0, 107.0]);
    }

    #[test]
    fn test_layout_ticks_follow_data_range() {
        let entries = vec![
            TestDataBuilder::entry("A", None, 108.9, 106.6, 1, 1),
            TestDataBuilder::entry("B", None, 122.2, 119.9, 1, 1),
        ];
        let layout = ChartLayout::compute(&entries, averages()).unwrap();

        assert_eq!(layout.x_ticks.first(), Some(&108.0));
        assert_eq!(layout.x_ticks.last(), Some(&122.0));
        assert_eq!(layout.y_ticks.first(), Some(&106.0));
        assert_eq!(layout.y_ticks.last(), Some(&120.0));
    }

    #[test]
    fn test_single_entry_layout() {
        let entries = vec![TestDataBuilder::entry("A", None, 112.0, 112.0, 1, 1)];
        let layout = ChartLayout::compute(&entries, averages()).unwrap();

        assert_eq!(layout.x_limits, AxisLimits { start: 111.0, end: 113.0 });
        assert_eq!(layout.x_ticks, vec![112.0]);
    }

    #[test]
    fn test_empty_entries_fail() {
        let result = ChartLayout::compute(&[], averages());
        assert!(matches!(result, Err(AppError::Render(_))));
    }

    #[test]
    fn test_axis_limits_contains_both_orientations() {
        let x = AxisLimits { start: 107.0, end: 119.0 };
        let y = AxisLimits { start: 119.0, end: 107.0 };

        for limits in [x, y] {
            assert!(limits.contains(107.0));
            assert!(limits.contains(113.0));
            assert!(limits.contains(119.0));
            assert!(!limits.contains(106.9));
            assert!(!limits.contains(22.9));
        }
    }

    #[test]
    fn test_reference_lines_inside_limits() {
        let entries = vec![
            TestDataBuilder::entry("A", None, 110.5, 108.0, 1, 1),
            TestDataBuilder::entry("B", None, 117.2, 118.0, 1, 1),
        ];
        let layout = ChartLayout::compute(&entries, averages()).unwrap();

        assert_eq!(layout.offense_reference(), Some(113.0));
        assert_eq!(layout.defense_reference(), Some(113.0));
    }

    #[test]
    fn test_reference_lines_outside_limits_are_hidden() {
        // A handful of teams averaged over the full league of 30
        let entries = vec![
            TestDataBuilder::entry("A", None, 110.5, 108.0, 1, 1),
            TestDataBuilder::entry("B", None, 117.2, 118.0, 1, 1),
        ];
        let averages = LeagueAverages {
            offense: 227.7 / 30.0,
            defense: 226.0 / 30.0,
        };
        let layout = ChartLayout::compute(&entries, averages).unwrap();

        assert_eq!(layout.offense_reference(), None);
        assert_eq!(layout.defense_reference(), None);
    }

    #[test]
    fn test_quadrant_labels_cover_all_corners() {
        let corners: Vec<Corner> = QUADRANT_LABELS.iter().map(|q| q.corner).collect();
        assert!(corners.contains(&Corner::TopLeft));
        assert!(corners.contains(&Corner::TopRight));
        assert!(corners.contains(&Corner::BottomLeft));
        assert!(corners.contains(&Corner::BottomRight));

        let top_right = QUADRANT_LABELS
            .iter()
            .find(|q| q.corner == Corner::TopRight)
            .unwrap();
        assert_eq!(top_right.lines, ["Good Offense", "Good Defense"]);
    }
}
