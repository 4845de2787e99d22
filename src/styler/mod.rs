//! Styler: turns grid placements into concrete on-screen rectangles.
//!
//! The packer decides *which* grid cell a tile starts in; the styler decides
//! how big a grid cell is. Given a container rectangle, a gutter, and a
//! row-height mode, it produces one character-cell [`Rect`] per tile.
//!
//! Integer sizing: cell extents use floor division of the usable span, and
//! the remainder is left as trailing slack instead of being smeared across
//! cells, so every column (and every row) renders at a uniform size.

use crate::layout::Rect;
use crate::packing::TileCoordinator;

/// How tall one grid row is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHeightMode {
    /// Every row is exactly this many character cells tall.
    Fixed(u16),
    /// Row height follows the computed column width at `width:height`.
    /// `Ratio { width: 2, height: 1 }` makes rows half as tall as columns
    /// are wide.
    Ratio {
        /// Width term of the ratio.
        width: u16,
        /// Height term of the ratio.
        height: u16,
    },
    /// Rows divide the container height evenly among the occupied rows.
    Fit,
}

impl Default for RowHeightMode {
    /// Square cells.
    fn default() -> Self {
        Self::Ratio { width: 1, height: 1 }
    }
}

/// Converts packed tile positions into character-cell rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileStyler {
    /// Gap between adjacent cells, in character cells.
    gutter: u16,
    /// Row sizing mode.
    row_height: RowHeightMode,
}

impl Default for TileStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl TileStyler {
    /// Create a styler with a one-cell gutter and square cells.
    pub const fn new() -> Self {
        Self {
            gutter: 1,
            row_height: RowHeightMode::Ratio { width: 1, height: 1 },
        }
    }

    /// Set the gutter between adjacent cells.
    #[must_use]
    pub const fn with_gutter(mut self, gutter: u16) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set the row-height mode.
    #[must_use]
    pub const fn with_row_height(mut self, mode: RowHeightMode) -> Self {
        self.row_height = mode;
        self
    }

    /// Gutter between adjacent cells.
    pub const fn gutter(&self) -> u16 {
        self.gutter
    }

    /// Row sizing mode.
    pub const fn row_height(&self) -> RowHeightMode {
        self.row_height
    }

    /// Width of one grid column inside `container`.
    ///
    /// Usable width is the container width minus the gutters between
    /// columns; columns get the floor share of it.
    pub fn column_width(&self, container: &Rect, column_count: u16) -> u16 {
        let columns = column_count.max(1);
        let gutters = self.gutter.saturating_mul(columns - 1);
        container.width.saturating_sub(gutters) / columns
    }

    /// Height of one grid row inside `container`.
    ///
    /// `Fit` needs to know how many rows share the container; the other
    /// modes ignore `row_count`.
    pub fn row_cell_height(&self, container: &Rect, column_count: u16, row_count: u16) -> u16 {
        match self.row_height {
            RowHeightMode::Fixed(height) => height,
            RowHeightMode::Ratio { width, height } => {
                let column_width = self.column_width(container, column_count);
                u32::from(column_width)
                    .saturating_mul(u32::from(height))
                    .checked_div(u32::from(width))
                    .map_or(0, |h| u16::try_from(h).unwrap_or(u16::MAX))
            }
            RowHeightMode::Fit => {
                let rows = row_count.max(1);
                let gutters = self.gutter.saturating_mul(rows - 1);
                container.height.saturating_sub(gutters) / rows
            }
        }
    }

    /// Compute one character-cell rectangle per packed tile.
    ///
    /// Tiles are sized from the placements currently held by `coordinator`;
    /// spans wider or taller than one cell absorb the gutters they cross.
    /// Degenerate containers produce empty rectangles rather than errors.
    pub fn apply(&self, coordinator: &TileCoordinator, container: &Rect) -> Vec<Rect> {
        let column_width = self.column_width(container, coordinator.column_count());
        let row_height =
            self.row_cell_height(container, coordinator.column_count(), coordinator.row_count());
        let column_stride = column_width.saturating_add(self.gutter);
        let row_stride = row_height.saturating_add(self.gutter);

        (0..coordinator.len())
            .map(|index| {
                // Index is in range by construction.
                let cell = coordinator.tile_rect(index).unwrap_or(Rect::ZERO);
                Rect::new(
                    container.x.saturating_add(cell.x.saturating_mul(column_stride)),
                    container.y.saturating_add(cell.y.saturating_mul(row_stride)),
                    Self::spanned_extent(column_width, self.gutter, cell.width),
                    Self::spanned_extent(row_height, self.gutter, cell.height),
                )
            })
            .collect()
    }

    /// Extent of `span` cells plus the gutters between them, saturating at
    /// the `u16` range.
    const fn spanned_extent(cell: u16, gutter: u16, span: u16) -> u16 {
        if span == 0 {
            return 0;
        }
        cell.saturating_mul(span)
            .saturating_add(gutter.saturating_mul(span - 1))
    }
}
