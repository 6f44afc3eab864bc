/*
 *  clock.rs
 *
 *  dottime - the time, one dot at a time
 *
 *  Clock controller - owns the current grid and auxiliary indicator state,
 *  updated by events dispatched from the application shell
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

use crate::encoder::{encode, Column, Grid};
use crate::sample::TimeSample;

/// Row on the Month column used for the phone-link dot. Months only need
/// bits 0-3, so row 4 of that column is never claimed by the time encoding.
const CONNECTION_ROW: usize = 4;

/// Owns everything the render pass reads: the grid encoded from the last
/// tick plus the link indicator. One controller per display; no ambient
/// globals.
#[derive(Debug, Default)]
pub struct ClockController {
    grid: Grid,
    connected: bool,
}

impl ClockController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Second-tick event: recompute the whole grid from the sample.
    /// Synchronous and total; samples are validated before they get here.
    pub fn on_tick(&mut self, sample: TimeSample) {
        self.grid = encode(&sample);
    }

    /// Link-status event.
    pub fn on_connection_changed(&mut self, connected: bool) {
        if connected != self.connected {
            log::info!(
                "link {}",
                if connected { "established" } else { "lost" }
            );
        }
        self.connected = connected;
    }

    /// The grid as last encoded, without overlays.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The grid to put on screen: the encoded time with the link dot
    /// overlaid on the Month column's spare row. The overlay happens here,
    /// not in `encode`, so the encoder stays a pure function of its sample.
    pub fn display_grid(&self) -> Grid {
        let mut grid = self.grid;
        if self.connected {
            grid.set(Column::Month, CONNECTION_ROW, true);
        }
        grid
    }
}
