//! Fixed dot geometry for the 5x6 grid.
//!
//! The layout is deliberately not configurable: a trained reader of the
//! display relies on every dot sitting exactly where it always sits.

use embedded_graphics::geometry::Point;

use crate::encoder::{Column, COLUMNS, ROWS};

/// Radius of one indicator dot, in pixels.
pub const DOT_RADIUS: i32 = 12;
/// Gap between adjacent dots, in pixels.
pub const DOT_SPACING: i32 = 4;

/// Center of the dot at `(col, row)`.
///
/// Columns are padded by a full gap on the left, rows by half a gap on
/// top, which keeps the grid visually centered on the 144x168 face.
#[inline]
pub fn dot_center(col: Column, row: usize) -> Point {
    let c = col.index() as i32;
    let r = row as i32;
    Point::new(
        DOT_RADIUS * (1 + 2 * c) + DOT_SPACING * c + DOT_SPACING,
        DOT_RADIUS * (1 + 2 * r) + DOT_SPACING * r + DOT_SPACING / 2,
    )
}

/// Width of the smallest framebuffer that fits the whole grid.
pub const DISPLAY_WIDTH: u32 =
    (DOT_RADIUS * (2 * COLUMNS as i32) + DOT_SPACING * (COLUMNS as i32 - 1) + 2 * DOT_SPACING)
        as u32;

/// Height of the smallest framebuffer that fits the whole grid.
pub const DISPLAY_HEIGHT: u32 =
    (DOT_RADIUS * (2 * ROWS as i32) + DOT_SPACING * (ROWS as i32 - 1) + DOT_SPACING) as u32;
