//! # penleaf
//!
//! A Rust library for generating Office Open XML files: word-processing
//! documents (DOCX) and spreadsheets (XLSX) with charts.
//!
//! ## Features
//!
//! - Documents: headers and footers, tab stops, page-number fields, tables
//!   with borders, column spans, and vertical merges
//! - Spreadsheets: cell values and formulas, drawings with bar and line
//!   charts anchored to the sheet grid
//! - Structural validation before saving
//!
//! Saving requires a license key, set once per process with
//! [`license::set_license_key`].
//!
//! ## Example
//!
//! ```rust
//! use penleaf::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_cell_value("A1", "Item").unwrap();
//! sheet.set_cell_value("B1", 1.23).unwrap();
//! sheet.set_cell_formula("C1", "B1*2").unwrap();
//!
//! workbook.validate().unwrap();
//! // workbook.save("items.xlsx").unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use penleaf_core::{
    license, CellAddress, CellValue, Color, Distance, Error, LicenseKey, Result, Workbook,
    Worksheet, MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

// Re-export chart types
pub use penleaf_chart::{
    AnchoredChart, Axis, AxisId, AxisKind, AxisPosition, Chart, ChartError, ChartId, ChartKind,
    DataReference, DataSeries, Drawing, TwoCellAnchor,
};

// Re-export document types
pub use penleaf_doc::{
    BodyItem, BorderStyle, CellProperties, DocError, Document, Field, Footer, FooterId,
    HdrFtrType, Header, HeaderId, Highlight, Paragraph, ParagraphProperties, Run, RunContent,
    RunProperties, SectionProperties, TabAlignment, TabStop, Table, TableBorders, TableCell,
    TableProperties, TableRow, TableWidth, VerticalMerge,
};

// Re-export writers
pub use penleaf_docx::{DocxError, DocxWriter};
pub use penleaf_xlsx::{XlsxError, XlsxWriter};

use std::path::Path;

/// Extension trait for Workbook file output
pub trait WorkbookExt {
    /// Save the workbook to a file
    ///
    /// Requires a license key ([`license::set_license_key`]). The format is
    /// picked by extension; only `.xlsx` is supported.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl WorkbookExt for Workbook {
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        license::ensure_licensed()?;

        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("xlsx") => {
                XlsxWriter::write_file(self, path).map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}

/// Extension trait for Document file output
pub trait DocumentExt {
    /// Save the document to a file
    ///
    /// Requires a license key ([`license::set_license_key`]). The format is
    /// picked by extension; only `.docx` is supported.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl DocumentExt for Document {
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        license::ensure_licensed()?;

        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("docx") => {
                DocxWriter::write_file(self, path).map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
