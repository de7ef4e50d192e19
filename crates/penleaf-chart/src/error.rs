//! Chart error types

use thiserror::Error;

/// Errors found while validating a chart or drawing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// Chart has no data series
    #[error("Chart '{0}' has no data series")]
    NoSeries(String),

    /// A series has no value reference
    #[error("Chart '{chart}' series {index} has no values")]
    SeriesWithoutValues { chart: String, index: usize },

    /// Axes must come as one category axis plus one value axis
    #[error("Chart '{0}' needs exactly one category axis and one value axis (or none)")]
    AxisPairing(String),

    /// Axis cross-links are missing or not symmetric
    #[error("Chart '{0}' axis cross-links are not symmetric")]
    CrossesMismatch(String),

    /// Anchor does not enclose any area
    #[error("Chart anchor is degenerate: from ({from_col},{from_row}) to ({to_col},{to_row})")]
    DegenerateAnchor {
        from_col: u32,
        from_row: u32,
        to_col: u32,
        to_row: u32,
    },
}
