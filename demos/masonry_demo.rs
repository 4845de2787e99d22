//! Masonry demo: pack a mixed-span tile list and draw it as boxes.
//!
//! Demonstrates:
//! - GridList configuration (columns, gutter, row-height mode)
//! - The greedy packing order with wide and tall tiles
//! - Resolving a grid cell back to its tile with tile_at

use std::io::{stdout, Write};

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::Print,
    terminal::{size, Clear, ClearType},
};

use gridlist::{GridList, Rect, RowHeightMode, TileSpan};

fn main() -> std::io::Result<()> {
    let tiles = [
        TileSpan::new(2, 2),
        TileSpan::UNIT,
        TileSpan::UNIT,
        TileSpan::new(3, 1),
        TileSpan::new(1, 2),
        TileSpan::UNIT,
        TileSpan::new(2, 1),
        TileSpan::UNIT,
    ];

    let (term_width, term_height) = size().unwrap_or((80, 24));
    let container = Rect::new(1, 1, term_width.saturating_sub(2), term_height.saturating_sub(4));

    let mut grid = GridList::new(4)
        .with_gutter(1)
        .with_row_height(RowHeightMode::Fixed(3));
    let layout = grid
        .layout(&tiles, &container)
        .expect("demo tiles fit a 4-column grid");

    let mut out = stdout();
    execute!(out, Clear(ClearType::All))?;

    for (index, rect) in layout.rects.iter().enumerate() {
        draw_box(&mut out, rect, index)?;
    }

    let footer = container.bottom() + 1;
    queue!(out, MoveTo(1, footer))?;
    queue!(
        out,
        Print(format!(
            "{} tiles, {} columns, {} rows; tile_at(0, 3) = {:?}",
            layout.len(),
            grid.column_count(),
            layout.row_count,
            grid.tile_at(0, 3),
        ))
    )?;
    queue!(out, MoveTo(0, footer + 1))?;
    out.flush()
}

/// Draw one tile as a bordered box with its index in the corner.
fn draw_box(out: &mut impl Write, rect: &Rect, index: usize) -> std::io::Result<()> {
    if rect.is_empty() {
        return Ok(());
    }
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    for y in rect.y..=bottom {
        for x in rect.x..=right {
            let glyph = match (x, y) {
                _ if (x, y) == (rect.x, rect.y) => '┌',
                _ if (x, y) == (right, rect.y) => '┐',
                _ if (x, y) == (rect.x, bottom) => '└',
                _ if (x, y) == (right, bottom) => '┘',
                _ if y == rect.y || y == bottom => '─',
                _ if x == rect.x || x == right => '│',
                _ => ' ',
            };
            queue!(out, MoveTo(x, y), Print(glyph))?;
        }
    }

    if rect.width > 2 && rect.height > 1 {
        queue!(out, MoveTo(rect.x + 1, rect.y + 1), Print(index))?;
    }
    Ok(())
}
