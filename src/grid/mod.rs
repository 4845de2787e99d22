//! Grid list: the front door tying the packer and the styler together.
//!
//! A [`GridList`] holds the grid's configuration (column count, gutter,
//! row-height mode) and owns a [`TileCoordinator`]. One [`layout`] call
//! packs the tiles and sizes them into a container, producing a flat
//! [`GridLayout`] snapshot.
//!
//! [`layout`]: GridList::layout

use crate::error::LayoutError;
use crate::layout::{Rect, TilePosition, TileSpan};
use crate::packing::TileCoordinator;
use crate::styler::{RowHeightMode, TileStyler};

/// A fixed-column tile grid.
#[derive(Debug, Clone)]
pub struct GridList {
    column_count: u16,
    styler: TileStyler,
    coordinator: TileCoordinator,
}

impl GridList {
    /// Create a grid with the given column count (minimum one).
    pub fn new(column_count: u16) -> Self {
        Self {
            column_count: column_count.max(1),
            styler: TileStyler::new(),
            coordinator: TileCoordinator::new(),
        }
    }

    /// Set the gutter between adjacent cells.
    #[must_use]
    pub const fn with_gutter(mut self, gutter: u16) -> Self {
        self.styler = self.styler.with_gutter(gutter);
        self
    }

    /// Set the row-height mode.
    #[must_use]
    pub const fn with_row_height(mut self, mode: RowHeightMode) -> Self {
        self.styler = self.styler.with_row_height(mode);
        self
    }

    /// Column count of the grid.
    pub const fn column_count(&self) -> u16 {
        self.column_count
    }

    /// Pack `tiles` and size them into `container`.
    ///
    /// Replaces any previous layout held by this grid.
    pub fn layout(
        &mut self,
        tiles: &[TileSpan],
        container: &Rect,
    ) -> Result<GridLayout, LayoutError> {
        self.coordinator.update(self.column_count, tiles)?;
        Ok(GridLayout {
            positions: self.coordinator.positions().to_vec(),
            rects: self.styler.apply(&self.coordinator, container),
            row_count: self.coordinator.row_count(),
        })
    }

    /// Index of the tile covering grid cell `(row, col)` in the most recent
    /// layout.
    pub fn tile_at(&self, row: u16, col: u16) -> Result<usize, LayoutError> {
        self.coordinator.tile_at(row, col)
    }
}

/// Flat result of one [`GridList::layout`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    /// Grid-cell placement of each tile, in input order.
    pub positions: Vec<TilePosition>,
    /// Character-cell rectangle of each tile, in input order.
    pub rects: Vec<Rect>,
    /// Number of grid rows the tiles occupy.
    pub row_count: u16,
}

impl GridLayout {
    /// Number of laid-out tiles.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Smallest character-cell rectangle containing every tile.
    pub fn bounding_rect(&self) -> Rect {
        self.rects
            .iter()
            .fold(Rect::ZERO, |acc, rect| acc.union(rect))
    }
}
