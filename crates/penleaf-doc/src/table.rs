//! Tables

use penleaf_core::{Color, Distance};

use crate::paragraph::Paragraph;

/// Table border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    Single,
    Double,
    Dashed,
    Dotted,
}

impl BorderStyle {
    /// Attribute value used in WML (`w:val` of a border element)
    pub fn code(self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Single => "single",
            BorderStyle::Double => "double",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

/// Uniform borders on all table edges (outer and inside)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBorders {
    pub style: BorderStyle,
    pub color: Color,
    /// Line width; zero is the thinnest (hairline) rendering
    pub size: Distance,
}

/// Table width
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableWidth {
    /// Sized by content
    Auto,
    /// Percentage of the page width
    Percent(f64),
    /// Fixed width
    Fixed(Distance),
}

/// Table-level properties
#[derive(Debug, Clone, PartialEq)]
pub struct TableProperties {
    width: TableWidth,
    borders: Option<TableBorders>,
}

impl Default for TableProperties {
    fn default() -> Self {
        Self {
            width: TableWidth::Auto,
            borders: None,
        }
    }
}

impl TableProperties {
    /// Table width
    pub fn width(&self) -> TableWidth {
        self.width
    }

    /// Size the table as a percentage of the page width
    pub fn set_width_percent(&mut self, percent: f64) {
        self.width = TableWidth::Percent(percent);
    }

    /// Size the table to a fixed width
    pub fn set_width(&mut self, width: Distance) {
        self.width = TableWidth::Fixed(width);
    }

    /// Borders, if set
    pub fn borders(&self) -> Option<&TableBorders> {
        self.borders.as_ref()
    }

    /// Apply the same border to every edge of the table
    pub fn set_all_borders(&mut self, style: BorderStyle, color: Color, size: Distance) {
        self.borders = Some(TableBorders { style, color, size });
    }
}

/// Vertical cell merge marker
///
/// A merge is a `Restart` cell with `Continue` cells in the rows directly
/// below it, all in the same grid column. The order is part of the contract;
/// `Document::validate` rejects a `Continue` with no merge cell above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalMerge {
    /// Start (or restart) a merge region here
    Restart,
    /// Merge this cell with the one above
    Continue,
}

impl VerticalMerge {
    /// Attribute value used in WML (`w:val` of `w:vMerge`)
    pub fn code(self) -> &'static str {
        match self {
            VerticalMerge::Restart => "restart",
            VerticalMerge::Continue => "continue",
        }
    }
}

/// Cell-level properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellProperties {
    column_span: Option<u32>,
    vertical_merge: Option<VerticalMerge>,
}

impl CellProperties {
    /// Number of grid columns this cell spans (None = 1)
    pub fn column_span(&self) -> Option<u32> {
        self.column_span
    }

    /// Make the cell span `span` grid columns
    pub fn set_column_span(&mut self, span: u32) {
        self.column_span = Some(span);
    }

    /// Vertical merge marker, if any
    pub fn vertical_merge(&self) -> Option<VerticalMerge> {
        self.vertical_merge
    }

    /// Mark the cell as part of a vertical merge
    pub fn set_vertical_merge(&mut self, merge: VerticalMerge) {
        self.vertical_merge = Some(merge);
    }
}

/// A table cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    properties: CellProperties,
    paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Cell properties
    pub fn properties(&self) -> &CellProperties {
        &self.properties
    }

    /// Cell properties, mutably
    pub fn properties_mut(&mut self) -> &mut CellProperties {
        &mut self.properties
    }

    /// Append a new paragraph and return it
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new());
        self.paragraphs.last_mut().unwrap()
    }

    /// The cell's paragraphs
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Grid columns occupied (span, at least 1)
    pub fn grid_width(&self) -> u32 {
        self.properties.column_span.unwrap_or(1).max(1)
    }
}

/// A table row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    cells: Vec<TableCell>,
}

impl TableRow {
    /// Append a new cell and return it
    pub fn add_cell(&mut self) -> &mut TableCell {
        self.cells.push(TableCell::default());
        self.cells.last_mut().unwrap()
    }

    /// The row's cells
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }
}

/// A table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    properties: TableProperties,
    rows: Vec<TableRow>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table properties
    pub fn properties(&self) -> &TableProperties {
        &self.properties
    }

    /// Table properties, mutably
    pub fn properties_mut(&mut self) -> &mut TableProperties {
        &mut self.properties
    }

    /// Append a new row and return it
    pub fn add_row(&mut self) -> &mut TableRow {
        self.rows.push(TableRow::default());
        self.rows.last_mut().unwrap()
    }

    /// The table's rows
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}
