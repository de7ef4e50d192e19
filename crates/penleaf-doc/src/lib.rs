//! # penleaf-doc
//!
//! Word-processing document model for penleaf: headers, footers,
//! paragraphs, runs, fields, and tables (with column spans and vertical
//! merges). The DOCX writer in `penleaf-docx` serializes this model.
//!
//! ## Example
//!
//! ```rust
//! use penleaf_doc::{Document, HdrFtrType};
//!
//! let mut doc = Document::new();
//! let hdr = doc.add_header();
//! doc.header_mut(hdr).unwrap().add_paragraph().add_run().add_text("Title");
//! doc.body_section_mut().set_header(hdr, HdrFtrType::Default);
//! doc.validate().unwrap();
//! ```

mod document;
mod error;
mod paragraph;
mod table;

pub use document::{
    BodyItem, Document, Footer, FooterId, HdrFtrType, Header, HeaderId, SectionProperties,
};
pub use error::{DocError, DocResult};
pub use paragraph::{
    Field, Highlight, Paragraph, ParagraphProperties, Run, RunContent, RunProperties,
    TabAlignment, TabStop,
};
pub use table::{
    BorderStyle, CellProperties, Table, TableBorders, TableCell, TableProperties, TableRow,
    TableWidth, VerticalMerge,
};
