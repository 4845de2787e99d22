//! Error types for layout computation.

use thiserror::Error;

/// Errors reported by the packing and lookup operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A tile's colspan exceeds the grid's column count, so no placement
    /// exists. Rejected up front instead of searching forever.
    #[error("tile colspan {colspan} exceeds the grid's {columns} columns")]
    SpanTooWide {
        /// Colspan of the offending tile.
        colspan: u16,
        /// Column count of the grid.
        columns: u16,
    },

    /// Packing needed more rows than a grid can address, so a placement's
    /// row index would not be representable. Rejected instead of wrapping.
    #[error("tile placement exceeds the {limit}-row grid limit")]
    GridTooTall {
        /// Maximum number of rows a grid can hold.
        limit: u16,
    },

    /// A positional lookup asked for a grid cell no tile covers.
    #[error("no tile covers grid cell (row {row}, col {col})")]
    NoTileAt {
        /// Requested row.
        row: u16,
        /// Requested column.
        col: u16,
    },
}
