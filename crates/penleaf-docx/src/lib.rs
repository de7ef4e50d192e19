//! # penleaf-docx
//!
//! DOCX (WordprocessingML) writer for penleaf documents.

mod error;
mod writer;

pub use error::{DocxError, DocxResult};
pub use writer::DocxWriter;
