//! # Gridlist
//!
//! Greedy tile-packing and grid-list layout for terminal UIs.
//!
//! Gridlist packs an ordered list of fixed-span tiles into a fixed-column
//! grid, left-to-right and top-to-bottom, then sizes the result into
//! character-cell rectangles for rendering.
//!
//! ## Core Concepts
//!
//! - **Packing**: [`TileCoordinator`] assigns each tile a `(row, col)` grid
//!   placement; rows grow on demand and tiles never overlap
//! - **Styling**: [`TileStyler`] maps placements to on-screen rectangles
//!   given a container, a gutter, and a row-height mode
//! - **Lookup**: a `(row, col)` grid cell resolves back to the tile index
//!   covering it
//!
//! ## Example
//!
//! ```rust
//! use gridlist::{GridList, Rect, RowHeightMode, TileSpan};
//!
//! let mut grid = GridList::new(4)
//!     .with_gutter(1)
//!     .with_row_height(RowHeightMode::Fixed(3));
//!
//! let tiles = [TileSpan::new(2, 2), TileSpan::UNIT, TileSpan::UNIT];
//! let layout = grid.layout(&tiles, &Rect::new(0, 0, 80, 24)).unwrap();
//!
//! assert_eq!(layout.len(), tiles.len());
//! assert_eq!(grid.tile_at(0, 0), Ok(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod grid;
pub mod layout;
pub mod packing;
pub mod styler;

// Re-exports for convenience
pub use error::LayoutError;
pub use grid::{GridLayout, GridList};
pub use layout::{Rect, TilePosition, TileSpan};
pub use packing::{pack, TileCoordinator};
pub use styler::{RowHeightMode, TileStyler};
