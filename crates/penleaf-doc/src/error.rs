//! Document error types

use thiserror::Error;

/// Result type for document operations
pub type DocResult<T> = std::result::Result<T, DocError>;

/// Errors found while validating a document
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocError {
    /// Section references a header that does not exist
    #[error("Section references missing header {0}")]
    MissingHeader(usize),

    /// Section references a footer that does not exist
    #[error("Section references missing footer {0}")]
    MissingFooter(usize),

    /// A table has no rows
    #[error("Table {0} has no rows")]
    EmptyTable(usize),

    /// A table row has no cells
    #[error("Table {table} row {row} has no cells")]
    EmptyRow { table: usize, row: usize },

    /// A merge-continue cell has nothing to continue from
    ///
    /// Vertical merges are a restart cell followed by continue cells in the
    /// rows directly below, in the same grid column. A continue cell whose
    /// upward neighbor is not part of a merge breaks the contract.
    #[error("Table {table} row {row}: vertical merge continues without a merge above (grid column {grid_col})")]
    DanglingMergeContinue {
        table: usize,
        row: usize,
        grid_col: u32,
    },
}
