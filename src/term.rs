/*
 *  term.rs
 *
 *  dottime - the time, one dot at a time
 *
 *  Terminal front-end: puts the framebuffer on a TTY, one character per
 *  dot cell
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

use std::io::{self, Write};

use crate::encoder::{Column, ROWS};
use crate::framebuf::PixelBuffer;
use crate::layout::dot_center;

const LIT: char = '\u{25cf}'; // ●
const DARK: char = '\u{00b7}'; // ·

/// Writes each frame over the previous one with ANSI cursor control.
///
/// Owns no clock logic: it probes the framebuffer at the known dot centers
/// and prints one character per cell.
pub struct TermRenderer<W: Write> {
    out: W,
    first_frame: bool,
}

impl TermRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, first_frame: true }
    }

    pub fn draw(&mut self, fb: &PixelBuffer) -> io::Result<()> {
        if self.first_frame {
            // hide cursor, clear screen
            write!(self.out, "\x1b[?25l\x1b[2J")?;
            self.first_frame = false;
        }
        // home
        write!(self.out, "\x1b[H")?;
        for row in 0..ROWS {
            let line: String = Column::ALL
                .into_iter()
                .map(|col| if fb.is_lit(dot_center(col, row)) { LIT } else { DARK })
                .flat_map(|c| [c, ' '])
                .collect();
            writeln!(self.out, "{}", line.trim_end())?;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for TermRenderer<W> {
    fn drop(&mut self) {
        // restore the cursor even on an error path
        let _ = write!(self.out, "\x1b[?25h");
        let _ = self.out.flush();
    }
}
