//! Reversed red-yellow-blue diverging colormap used to color points by win
//! percentage: low values are blue, high values red.

use crate::ratings::RatingEntry;

pub type Rgb = (u8, u8, u8);

// ColorBrewer RdYlBu, reversed so the scale runs from blue to red.
const RD_YL_BU_R: [Rgb; 11] = [
    (0x31, 0x36, 0x95),
    (0x45, 0x75, 0xb4),
    (0x74, 0xad, 0xd1),
    (0xab, 0xd9, 0xe9),
    (0xe0, 0xf3, 0xf8),
    (0xff, 0xff, 0xbf),
    (0xfe, 0xe0, 0x90),
    (0xfd, 0xae, 0x61),
    (0xf4, 0x6d, 0x43),
    (0xd7, 0x30, 0x27),
    (0xa5, 0x00, 0x26),
];

/// Color at position `t` in `[0, 1]`; values outside are clamped.
pub fn rd_yl_bu_r(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let segments = (RD_YL_BU_R.len() - 1) as f64;
    let position = t * segments;
    let index = (position.floor() as usize).min(RD_YL_BU_R.len() - 2);
    let frac = position - index as f64;

    let (r0, g0, b0) = RD_YL_BU_R[index];
    let (r1, g1, b1) = RD_YL_BU_R[index + 1];
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;

    (lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Linear normalization of win percentages onto the colormap, spanning the
/// smallest and largest finite value in the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinPctScale {
    pub min: f64,
    pub max: f64,
}

impl WinPctScale {
    /// Returns `None` when no entry has a finite win percentage.
    pub fn from_entries(entries: &[RatingEntry]) -> Option<Self> {
        let finite = entries.iter().map(|e| e.win_pct).filter(|v| v.is_finite());
        let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        (min <= max).then_some(WinPctScale { min, max })
    }

    /// Position of `value` on the scale. A degenerate scale maps everything
    /// to the low end.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            (value - self.min) / span
        } else {
            0.0
        }
    }

    /// Marker color for a win percentage. NaN has no color and draws no
    /// marker.
    pub fn color(&self, value: f64) -> Option<Rgb> {
        if value.is_nan() {
            return None;
        }
        Some(rd_yl_bu_r(self.normalize(value)))
    }
}
