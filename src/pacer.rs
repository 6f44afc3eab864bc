/*
 *  pacer.rs
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

use chrono::{Local, Timelike};
use std::time::{Duration, Instant};

/// Deadline-based 1 Hz tick source.
///
/// The first deadline is aligned to the next wall-clock second so the
/// seconds column flips on the boundary rather than some arbitrary phase
/// of it; after that, deadlines advance by exactly one second, which keeps
/// the loop from drifting when a render runs long.
pub struct TickPacer {
    next_deadline: Instant,
    period: Duration,
}

impl TickPacer {
    /// Pacer whose first tick lands on the next whole wall-clock second.
    pub fn aligned_to_wall_second() -> Self {
        let nanos_into_second = Local::now().nanosecond() % 1_000_000_000;
        let to_boundary = Duration::from_nanos((1_000_000_000 - nanos_into_second) as u64);
        Self {
            next_deadline: Instant::now() + to_boundary,
            period: Duration::from_secs(1),
        }
    }

    /// How long to sleep before the next tick is due. Zero if overdue.
    #[inline]
    pub fn time_until_tick(&self) -> Duration {
        self.next_deadline.saturating_duration_since(Instant::now())
    }

    /// Returns true if a tick is due now; if true, it also schedules the
    /// next deadline.
    #[inline]
    pub fn should_tick(&mut self) -> bool {
        let now = Instant::now();
        if now >= self.next_deadline {
            // Catch up in whole periods if the loop stalled past a deadline.
            while self.next_deadline <= now {
                self.next_deadline += self.period;
            }
            true
        } else {
            false
        }
    }
}
