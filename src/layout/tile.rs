//! Tile data types: spans going into the packer, positions coming out.

/// The size of one tile, in grid cells.
///
/// Spans are at least 1x1; the constructor clamps zero to one rather than
/// erroring, matching how grid-list inputs are coerced at the boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSpan {
    /// Number of grid columns the tile covers.
    pub colspan: u16,
    /// Number of grid rows the tile covers.
    pub rowspan: u16,
}

impl TileSpan {
    /// A 1x1 tile.
    pub const UNIT: Self = Self { colspan: 1, rowspan: 1 };

    /// Create a span, clamping zero dimensions to one.
    #[inline]
    pub const fn new(colspan: u16, rowspan: u16) -> Self {
        Self {
            colspan: if colspan == 0 { 1 } else { colspan },
            rowspan: if rowspan == 0 { 1 } else { rowspan },
        }
    }

    /// Number of grid cells the tile occupies.
    #[inline]
    pub const fn cells(&self) -> u32 {
        (self.colspan as u32) * (self.rowspan as u32)
    }
}

impl Default for TileSpan {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Computed top-left placement of one tile, in grid cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePosition {
    /// Grid row of the tile's top-left corner.
    pub row: u16,
    /// Grid column of the tile's top-left corner.
    pub col: u16,
}

impl TilePosition {
    /// Create a position.
    #[inline]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}
