//! Layout primitives: rectangles, tile spans, and tile positions.
//!
//! Everything here is plain `Copy` data. The packing logic lives in
//! [`crate::packing`]; the sizing logic in [`crate::styler`].

mod rect;
mod tile;

pub use rect::Rect;
pub use tile::{TilePosition, TileSpan};
