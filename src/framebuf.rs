/*
 *  framebuf.rs
 *
 *  dottime - the time, one dot at a time
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use core::convert::Infallible;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// A runtime-sized monochrome framebuffer for embedded-graphics.
///
/// Draw targets sit behind the rendering seam; anything that can paint
/// `BinaryColor` pixels can show the clock. This one lives in memory and
/// is what the terminal front-end and the tests read back from.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    buf: Vec<BinaryColor>,
    w: usize,
    h: usize,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self { buf: vec![BinaryColor::Off; w * h], w, h }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// True if the pixel at `p` is lit. Out-of-bounds reads are dark.
    #[inline]
    pub fn is_lit(&self, p: Point) -> bool {
        self.idx(p)
            .map(|i| self.buf[i] == BinaryColor::On)
            .unwrap_or(false)
    }

    /// Clears the whole buffer to dark.
    pub fn clear_off(&mut self) {
        self.buf.fill(BinaryColor::Off);
    }

    /// Map (x,y) to linear index; returns None if out of bounds
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 {
            let (x, y) = (p.x as usize, p.y as usize);
            if x < self.w && y < self.h {
                return Some(y * self.w + x);
            }
        }
        None
    }
}

impl OriginDimensions for PixelBuffer {
    fn size(&self) -> Size {
        Size::new(self.w as u32, self.h as u32)
    }
}

impl DrawTarget for PixelBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            if let Some(i) = self.idx(p) {
                self.buf[i] = c;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buf.fill(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_dark() {
        let fb = PixelBuffer::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                assert!(!fb.is_lit(Point::new(x, y)));
            }
        }
    }

    #[test]
    fn test_draw_and_clear() {
        let mut fb = PixelBuffer::new(8, 8);
        fb.draw_iter([Pixel(Point::new(3, 5), BinaryColor::On)]).unwrap();
        assert!(fb.is_lit(Point::new(3, 5)));
        fb.clear_off();
        assert!(!fb.is_lit(Point::new(3, 5)));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = PixelBuffer::new(4, 4);
        fb.draw_iter([
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(4, 4), BinaryColor::On),
        ])
        .unwrap();
        assert!(!fb.is_lit(Point::new(-1, 0)));
        assert!(!fb.is_lit(Point::new(4, 4)));
    }
}
