//! Drawing anchors

use crate::error::ChartError;

const DEFAULT_WIDTH_COLS: u32 = 5;
const DEFAULT_HEIGHT_ROWS: u32 = 15;

/// A two-cell anchor
///
/// Pins a drawing's top-left and bottom-right corners to grid cells, so the
/// drawing resizes with its columns and rows. Indices are 0-based like all
/// sheet coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoCellAnchor {
    /// Top-left column
    pub from_col: u32,
    /// Top-left row
    pub from_row: u32,
    /// Bottom-right column (exclusive edge)
    pub to_col: u32,
    /// Bottom-right row (exclusive edge)
    pub to_row: u32,
}

impl TwoCellAnchor {
    /// Create an anchor at the origin with the default extent
    pub fn new() -> Self {
        Self {
            from_col: 0,
            from_row: 0,
            to_col: DEFAULT_WIDTH_COLS,
            to_row: DEFAULT_HEIGHT_ROWS,
        }
    }

    /// Width in columns
    pub fn width(&self) -> u32 {
        self.to_col.saturating_sub(self.from_col)
    }

    /// Height in rows
    pub fn height(&self) -> u32 {
        self.to_row.saturating_sub(self.from_row)
    }

    /// Resize to `cols` columns wide, keeping the top-left corner
    pub fn set_width(&mut self, cols: u32) {
        self.to_col = self.from_col + cols;
    }

    /// Resize to `rows` rows tall, keeping the top-left corner
    pub fn set_height(&mut self, rows: u32) {
        self.to_row = self.from_row + rows;
    }

    /// Move the top-left corner to (col, row), keeping the extent
    pub fn move_to(&mut self, col: u32, row: u32) {
        let (w, h) = (self.width(), self.height());
        self.from_col = col;
        self.from_row = row;
        self.to_col = col + w;
        self.to_row = row + h;
    }

    /// Check the anchor encloses a non-empty area
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.from_col >= self.to_col || self.from_row >= self.to_row {
            return Err(ChartError::DegenerateAnchor {
                from_col: self.from_col,
                from_row: self.from_row,
                to_col: self.to_col,
                to_row: self.to_row,
            });
        }
        Ok(())
    }
}

impl Default for TwoCellAnchor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_width_then_move() {
        let mut anchor = TwoCellAnchor::new();
        anchor.set_width(9);
        anchor.move_to(5, 1);
        assert_eq!(
            anchor,
            TwoCellAnchor {
                from_col: 5,
                from_row: 1,
                to_col: 14,
                to_row: 16
            }
        );
    }

    #[test]
    fn test_move_preserves_extent() {
        let mut anchor = TwoCellAnchor::new();
        anchor.move_to(1, 23);
        assert_eq!(anchor.width(), 5);
        assert_eq!(anchor.height(), 15);
        assert_eq!((anchor.from_col, anchor.from_row), (1, 23));
    }

    #[test]
    fn test_degenerate_anchor() {
        let mut anchor = TwoCellAnchor::new();
        anchor.set_width(0);
        assert!(anchor.validate().is_err());

        let mut anchor = TwoCellAnchor::new();
        anchor.set_height(0);
        assert!(anchor.validate().is_err());

        TwoCellAnchor::new().validate().unwrap();
    }
}
