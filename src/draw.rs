use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, PrimitiveStyle},
};

use crate::encoder::{Column, Grid};
use crate::layout::{dot_center, DOT_RADIUS};

/// Draws one indicator dot: filled `On` when lit, filled `Off` when dark.
///
/// Dark dots are painted rather than skipped so a redraw over a previous
/// frame never leaves stale dots lit.
pub fn render_dot<D>(target: &mut D, col: Column, row: usize, on: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let center = dot_center(col, row);
    let top_left = Point::new(center.x - DOT_RADIUS, center.y - DOT_RADIUS);
    let color = if on { BinaryColor::On } else { BinaryColor::Off };
    Circle::new(top_left, (DOT_RADIUS * 2) as u32)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

/// Draws the whole grid, one dot per cell.
pub fn render_grid<D>(target: &mut D, grid: &Grid) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    for (col, row, on) in grid.iter() {
        render_dot(target, col, row, on)?;
    }
    Ok(())
}
