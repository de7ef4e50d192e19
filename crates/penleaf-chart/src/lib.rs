//! # penleaf-chart
//!
//! Chart and drawing model for penleaf. Charts live inside a [`Drawing`],
//! anchored to the sheet grid with [`TwoCellAnchor`]s; the XLSX writer turns
//! the model into DrawingML and chart parts.

mod anchor;
mod axis;
mod chart;
mod drawing;
mod error;
mod series;

pub use anchor::TwoCellAnchor;
pub use axis::{Axis, AxisId, AxisKind, AxisPosition};
pub use chart::{Chart, ChartKind};
pub use drawing::{AnchoredChart, ChartId, Drawing};
pub use error::ChartError;
pub use series::{DataReference, DataSeries};
