//! Chart model and rendering.
//!
//! [`ChartModel`] holds everything that is drawn, already resolved to plain
//! values: limits, ticks, averages, per-point markers. Renderers only turn
//! it into pixels, which keeps the layout rules testable without a backend.

pub mod colormap;
pub mod layout;
pub mod render;

use crate::error::AppError;
use crate::logos::LogoOutcome;
use crate::ratings::RatedLeague;
use image::RgbaImage;

pub use colormap::{Rgb, WinPctScale, rd_yl_bu_r};
pub use layout::{AxisLimits, ChartLayout, Corner, QUADRANT_LABELS, QuadrantLabel};
pub use render::PngRenderer;

/// Which flavor of the chart to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartVariant {
    /// Colored markers with short-name labels and a win percentage colorbar
    #[default]
    Labeled,
    /// Team logos centered on the points
    Logos,
}

#[derive(Debug, Clone)]
pub enum PointMarker {
    /// `None` for a win percentage that has no color (no games played)
    Colored(Option<Rgb>),
    /// `None` when the logo could not be resolved
    Logo(Option<RgbaImage>),
}

#[derive(Debug, Clone)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
    pub marker: PointMarker,
}

#[derive(Debug, Clone)]
pub struct ChartModel {
    pub layout: ChartLayout,
    /// Points in draw order
    pub points: Vec<ChartPoint>,
    /// Present only for the labeled variant with at least one finite win
    /// percentage.
    pub colorbar: Option<WinPctScale>,
}

impl ChartModel {
    /// Builds the labeled variant: one colored marker and label per entry.
    pub fn labeled(league: &RatedLeague) -> Result<Self, AppError> {
        let layout = ChartLayout::compute(&league.entries, league.averages)?;
        let scale = WinPctScale::from_entries(&league.entries);

        let points = league
            .entries
            .iter()
            .map(|entry| ChartPoint {
                x: entry.offensive_rating,
                y: entry.defensive_rating,
                label: Some(entry.team_short_name.clone()),
                marker: PointMarker::Colored(scale.and_then(|s| s.color(entry.win_pct))),
            })
            .collect();

        Ok(ChartModel {
            layout,
            points,
            colorbar: scale,
        })
    }

    /// Builds the logo variant. `logos` pairs with the entries by position;
    /// an entry without an outcome is drawn like an unavailable logo.
    pub fn with_logos(league: &RatedLeague, logos: Vec<LogoOutcome>) -> Result<Self, AppError> {
        let layout = ChartLayout::compute(&league.entries, league.averages)?;
        let mut logos = logos.into_iter();

        let points = league
            .entries
            .iter()
            .map(|entry| ChartPoint {
                x: entry.offensive_rating,
                y: entry.defensive_rating,
                label: None,
                marker: PointMarker::Logo(logos.next().and_then(LogoOutcome::into_image)),
            })
            .collect();

        Ok(ChartModel {
            layout,
            points,
            colorbar: None,
        })
    }
}

/// Turns a finished model into output.
pub trait ChartRenderer {
    fn render(&self, model: &ChartModel) -> Result<(), AppError>;
}
