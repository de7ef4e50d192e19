//! # penleaf-core
//!
//! Core types for the penleaf office-document library:
//! - [`Workbook`] and [`Worksheet`] - the spreadsheet model
//! - [`CellAddress`] and [`CellValue`] - cell addressing and values
//! - [`Distance`] and [`Color`] - units shared by both file writers
//! - [`license`] - process-wide license key handling
//!
//! ## Example
//!
//! ```rust
//! use penleaf_core::Workbook;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value("A1", "Item").unwrap();
//! sheet.set_cell_value("B2", 1.23).unwrap();
//! sheet.set_cell_formula("D2", "C2*B2").unwrap();
//! ```

pub mod cell;
pub mod color;
pub mod error;
pub mod license;
pub mod measurement;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellValue};
pub use color::Color;
pub use error::{Error, Result};
pub use license::LicenseKey;
pub use measurement::Distance;
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
