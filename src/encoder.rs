/*
 *  encoder.rs
 *
 *  dottime - the time, one dot at a time
 *
 *  The bit-to-dot encoding: one column per calendar field, one row per
 *  binary digit, LSB at the top.
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

use crate::sample::TimeSample;

/// Number of columns on the display, one per calendar field.
pub const COLUMNS: usize = 5;
/// Number of rows; rows 0-4 hold value bits, row 5 is the weekday row.
pub const ROWS: usize = 6;
/// The shared sixth row carrying the weekday bits.
pub const WEEKDAY_ROW: usize = 5;

/// Semantic column index, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Month = 0,
    DayOfMonth = 1,
    Hour = 2,
    Minute = 3,
    Second = 4,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; COLUMNS] = [
        Column::Month,
        Column::DayOfMonth,
        Column::Hour,
        Column::Minute,
        Column::Second,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The complete on/off state of the display: 5 columns x 6 rows of dots.
///
/// A grid is always produced whole from a single [`TimeSample`]; individual
/// cells are never mutated between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[bool; ROWS]; COLUMNS],
}

impl Grid {
    /// State of one dot.
    #[inline]
    pub fn get(&self, col: Column, row: usize) -> bool {
        self.cells[col.index()][row]
    }

    #[inline]
    pub(crate) fn set(&mut self, col: Column, row: usize, on: bool) {
        self.cells[col.index()][row] = on;
    }

    /// Iterates every cell as `(column, row, on)`, column-major.
    pub fn iter(&self) -> impl Iterator<Item = (Column, usize, bool)> + '_ {
        Column::ALL
            .into_iter()
            .flat_map(move |col| (0..ROWS).map(move |row| (col, row, self.get(col, row))))
    }
}

#[inline]
fn bit(value: u8, index: usize) -> bool {
    value & (1 << index) != 0
}

/// Encodes one sample into the full dot grid.
///
/// Pure and deterministic: the same sample always yields a bit-identical
/// grid. The layout packs three fields into space they do not nominally
/// own, and that packing is the whole point of the display:
///
/// * Hour row 4 is shared. In 24-hour mode it is hour bit 4 (lit for
///   16:00-23:59); in 12-hour mode the same dot doubles as the PM flag.
/// * The weekday (1-7, Sunday folded to 7) has no column of its own. Its
///   three bits ride the otherwise unused row-5 cells: bit 0 on the Hour
///   column, bit 1 on DayOfMonth, bit 2 on Month. Minute and Second cannot
///   donate row 5 because 59 needs all six bits.
pub fn encode(sample: &TimeSample) -> Grid {
    let mut grid = Grid::default();

    for row in 0..ROWS {
        grid.set(Column::Second, row, bit(sample.second(), row));
        grid.set(Column::Minute, row, bit(sample.minute(), row));
    }

    let hour = sample.display_hour();
    for row in 0..4 {
        grid.set(Column::Hour, row, bit(hour, row));
    }
    let hour_row4 = if sample.use_24h() {
        bit(hour, 4)
    } else {
        sample.is_pm()
    };
    grid.set(Column::Hour, 4, hour_row4);

    for row in 0..5 {
        grid.set(Column::DayOfMonth, row, bit(sample.day_of_month(), row));
    }
    for row in 0..4 {
        grid.set(Column::Month, row, bit(sample.month(), row));
    }

    let wd = sample.display_weekday();
    grid.set(Column::Hour, WEEKDAY_ROW, bit(wd, 0));
    grid.set(Column::DayOfMonth, WEEKDAY_ROW, bit(wd, 1));
    grid.set(Column::Month, WEEKDAY_ROW, bit(wd, 2));

    grid
}
