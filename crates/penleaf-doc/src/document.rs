//! Document type - the main word-processing structure

use crate::error::{DocError, DocResult};
use crate::paragraph::Paragraph;
use crate::table::{Table, TableRow, VerticalMerge};

/// Identifier of a header within its document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderId(pub(crate) usize);

impl HeaderId {
    /// Position of the header in [`Document::headers`]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identifier of a footer within its document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterId(pub(crate) usize);

impl FooterId {
    /// Position of the footer in [`Document::footers`]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which pages a header/footer applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HdrFtrType {
    /// All pages not covered by a more specific type
    Default,
    /// First page of the section
    First,
    /// Even pages
    Even,
}

impl HdrFtrType {
    /// Attribute value used in WML (`w:type` of a reference element)
    pub fn code(self) -> &'static str {
        match self {
            HdrFtrType::Default => "default",
            HdrFtrType::First => "first",
            HdrFtrType::Even => "even",
        }
    }
}

/// A page header
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Header {
    paragraphs: Vec<Paragraph>,
}

impl Header {
    /// Append a new paragraph and return it
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new());
        self.paragraphs.last_mut().unwrap()
    }

    /// The header's paragraphs
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }
}

/// A page footer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Footer {
    paragraphs: Vec<Paragraph>,
}

impl Footer {
    /// Append a new paragraph and return it
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new());
        self.paragraphs.last_mut().unwrap()
    }

    /// The footer's paragraphs
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }
}

/// One block-level body element
#[derive(Debug, Clone, PartialEq)]
pub enum BodyItem {
    Paragraph(Paragraph),
    Table(Table),
}

/// Properties of the document's body section
///
/// Headers and footers exist independently of any section; a document can
/// have several for different purposes. They only render once referenced
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionProperties {
    header_refs: Vec<(HeaderId, HdrFtrType)>,
    footer_refs: Vec<(FooterId, HdrFtrType)>,
}

impl SectionProperties {
    /// Attach a header for the given page type, replacing any previous one
    pub fn set_header(&mut self, id: HeaderId, kind: HdrFtrType) {
        self.header_refs.retain(|(_, k)| *k != kind);
        self.header_refs.push((id, kind));
    }

    /// Attach a footer for the given page type, replacing any previous one
    pub fn set_footer(&mut self, id: FooterId, kind: HdrFtrType) {
        self.footer_refs.retain(|(_, k)| *k != kind);
        self.footer_refs.push((id, kind));
    }

    /// Attached headers
    pub fn header_refs(&self) -> &[(HeaderId, HdrFtrType)] {
        &self.header_refs
    }

    /// Attached footers
    pub fn footer_refs(&self) -> &[(FooterId, HdrFtrType)] {
        &self.footer_refs
    }
}

/// A word-processing document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    headers: Vec<Header>,
    footers: Vec<Footer>,
    body: Vec<BodyItem>,
    section: SectionProperties,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header; attach it with [`SectionProperties::set_header`]
    pub fn add_header(&mut self) -> HeaderId {
        self.headers.push(Header::default());
        HeaderId(self.headers.len() - 1)
    }

    /// Get a header by id
    pub fn header(&self, id: HeaderId) -> Option<&Header> {
        self.headers.get(id.0)
    }

    /// Get a mutable header by id
    pub fn header_mut(&mut self, id: HeaderId) -> Option<&mut Header> {
        self.headers.get_mut(id.0)
    }

    /// All headers
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Add a footer; attach it with [`SectionProperties::set_footer`]
    pub fn add_footer(&mut self) -> FooterId {
        self.footers.push(Footer::default());
        FooterId(self.footers.len() - 1)
    }

    /// Get a footer by id
    pub fn footer(&self, id: FooterId) -> Option<&Footer> {
        self.footers.get(id.0)
    }

    /// Get a mutable footer by id
    pub fn footer_mut(&mut self, id: FooterId) -> Option<&mut Footer> {
        self.footers.get_mut(id.0)
    }

    /// All footers
    pub fn footers(&self) -> &[Footer] {
        &self.footers
    }

    /// Append a paragraph to the body and return it
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.body.push(BodyItem::Paragraph(Paragraph::new()));
        match self.body.last_mut() {
            Some(BodyItem::Paragraph(p)) => p,
            _ => unreachable!(),
        }
    }

    /// Append a table to the body and return it
    pub fn add_table(&mut self) -> &mut Table {
        self.body.push(BodyItem::Table(Table::new()));
        match self.body.last_mut() {
            Some(BodyItem::Table(t)) => t,
            _ => unreachable!(),
        }
    }

    /// The document body, in order
    pub fn body(&self) -> &[BodyItem] {
        &self.body
    }

    /// The body section's properties
    pub fn body_section(&self) -> &SectionProperties {
        &self.section
    }

    /// The body section's properties, mutably
    pub fn body_section_mut(&mut self) -> &mut SectionProperties {
        &mut self.section
    }

    /// Validate the document structure before saving
    ///
    /// Checks that section references resolve, tables are non-degenerate,
    /// and vertical merges follow the restart/continue contract.
    pub fn validate(&self) -> DocResult<()> {
        for (id, _) in self.section.header_refs() {
            if id.0 >= self.headers.len() {
                return Err(DocError::MissingHeader(id.0));
            }
        }
        for (id, _) in self.section.footer_refs() {
            if id.0 >= self.footers.len() {
                return Err(DocError::MissingFooter(id.0));
            }
        }

        for (table_index, item) in self.body.iter().enumerate() {
            if let BodyItem::Table(table) = item {
                Self::validate_table(table_index, table)?;
            }
        }

        Ok(())
    }

    fn validate_table(table_index: usize, table: &Table) -> DocResult<()> {
        if table.rows().is_empty() {
            return Err(DocError::EmptyTable(table_index));
        }

        let mut prev_row: Option<&TableRow> = None;
        for (row_index, row) in table.rows().iter().enumerate() {
            if row.cells().is_empty() {
                return Err(DocError::EmptyRow {
                    table: table_index,
                    row: row_index,
                });
            }

            let mut grid_col: u32 = 0;
            for cell in row.cells() {
                if cell.properties().vertical_merge() == Some(VerticalMerge::Continue)
                    && !Self::merge_above(prev_row, grid_col)
                {
                    return Err(DocError::DanglingMergeContinue {
                        table: table_index,
                        row: row_index,
                        grid_col,
                    });
                }
                grid_col += cell.grid_width();
            }

            prev_row = Some(row);
        }

        Ok(())
    }

    /// Does the previous row carry a merge cell covering `grid_col`?
    fn merge_above(prev_row: Option<&TableRow>, grid_col: u32) -> bool {
        let Some(row) = prev_row else {
            return false;
        };
        let mut col: u32 = 0;
        for cell in row.cells() {
            let width = cell.grid_width();
            if grid_col >= col && grid_col < col + width {
                return cell.properties().vertical_merge().is_some();
            }
            col += width;
        }
        false
    }
}
