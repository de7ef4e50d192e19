//! Physical distance units
//!
//! OOXML parts disagree about units: tab stops and table widths are twips
//! (1/20 point), table border sizes are eighth-points, drawing offsets are
//! EMUs. [`Distance`] stores EMUs and converts on the way out.

/// EMUs per inch
pub const EMUS_PER_INCH: i64 = 914_400;

/// EMUs per point
pub const EMUS_PER_POINT: i64 = 12_700;

/// EMUs per twip (1/20 point)
pub const EMUS_PER_TWIP: i64 = 635;

/// A physical distance, stored in EMUs (English Metric Units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Distance(i64);

impl Distance {
    /// Zero distance (hairline when used as a border size)
    pub const ZERO: Distance = Distance(0);

    /// Create a distance from inches
    pub fn inches(v: f64) -> Self {
        Distance((v * EMUS_PER_INCH as f64).round() as i64)
    }

    /// Create a distance from points
    pub fn points(v: f64) -> Self {
        Distance((v * EMUS_PER_POINT as f64).round() as i64)
    }

    /// Create a distance from raw EMUs
    pub fn emus(v: i64) -> Self {
        Distance(v)
    }

    /// Raw EMU value
    pub fn to_emus(self) -> i64 {
        self.0
    }

    /// Twips (1/20 point), the unit of tab stops and fixed table widths
    pub fn to_twips(self) -> i64 {
        self.0 / EMUS_PER_TWIP
    }

    /// Eighth-points, the unit of table border sizes
    pub fn to_eighth_points(self) -> i64 {
        self.0 * 8 / EMUS_PER_POINT
    }
}
