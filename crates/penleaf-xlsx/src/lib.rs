//! # penleaf-xlsx
//!
//! XLSX (SpreadsheetML) writer for penleaf workbooks, including drawing
//! and chart parts for sheets that carry a drawing.

mod error;
mod writer;

pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;
