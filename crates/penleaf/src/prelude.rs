//! Prelude module - common imports for penleaf users
//!
//! ```rust
//! use penleaf::prelude::*;
//! ```

pub use crate::{
    // Shared types
    CellAddress,
    CellValue,
    // Chart types
    Chart,
    ChartKind,
    Color,
    DataReference,
    DataSeries,
    Distance,
    // Document types
    Document,
    // Extension traits
    DocumentExt,
    // Writers
    DocxWriter,
    Drawing,
    // Error types
    Error,
    Field,
    HdrFtrType,
    Highlight,
    Result,
    TabAlignment,
    TabStop,
    VerticalMerge,
    // Main types
    Workbook,
    WorkbookExt,
    Worksheet,
    XlsxWriter,
};
