/*!
 # dottime

 A binary LED clock for small dot-matrix displays.

 The current time, date, and weekday are shown as a fixed 5x6 grid of dots,
 one column per calendar field (month, day-of-month, hour, minute, second),
 one row per binary digit, LSB at the top. The sixth row is shared: the
 three otherwise unused cells on the month, day, and hour columns carry the
 3-bit weekday. Everything refreshes once per second.

 ## Example

 ```rust
 use chrono::Local;
 use dottime::{encode, TimeSample};

 let sample = TimeSample::from_datetime(&Local::now(), true);
 let grid = encode(&sample);
 for (col, row, on) in grid.iter() {
     println!("{:?} row {}: {}", col, row, if on { "on" } else { "off" });
 }
 ```
*/

pub mod clock;
pub mod config;
pub mod draw;
pub mod encoder;
pub mod framebuf;
pub mod layout;
pub mod pacer;
pub mod sample;
pub mod term;

pub use clock::ClockController;
pub use encoder::{encode, Column, Grid, COLUMNS, ROWS, WEEKDAY_ROW};
pub use framebuf::PixelBuffer;
pub use sample::{SampleError, TimeSample};
