/*
 *  tests/render_integration.rs
 *
 *  dottime - the time, one dot at a time
 *
 *  End-to-end checks through the public API: sample -> encode -> draw ->
 *  probe the framebuffer at the dot centers.
 */

use chrono::{Local, TimeZone};

use dottime::clock::ClockController;
use dottime::draw::render_grid;
use dottime::encoder::{Column, ROWS, WEEKDAY_ROW};
use dottime::framebuf::PixelBuffer;
use dottime::layout::{dot_center, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use dottime::sample::TimeSample;
use dottime::{encode, Grid};

fn render(grid: &Grid) -> PixelBuffer {
    let mut fb = PixelBuffer::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    render_grid(&mut fb, grid).unwrap();
    fb
}

/// Reads a column's dots back into a number, LSB in row 0.
fn read_column(fb: &PixelBuffer, col: Column, rows: usize) -> u8 {
    (0..rows).fold(0u8, |acc, row| {
        acc | (u8::from(fb.is_lit(dot_center(col, row))) << row)
    })
}

#[test]
fn full_face_round_trips_through_pixels() {
    // Saturday 2026-08-29 23:59:58, 24-hour mode.
    let dt = Local.with_ymd_and_hms(2026, 8, 29, 23, 59, 58).unwrap();
    let sample = TimeSample::from_datetime(&dt, true);
    let fb = render(&encode(&sample));

    assert_eq!(read_column(&fb, Column::Second, 6), 58);
    assert_eq!(read_column(&fb, Column::Minute, 6), 59);
    assert_eq!(read_column(&fb, Column::Hour, 5), 23);
    assert_eq!(read_column(&fb, Column::DayOfMonth, 5), 29);
    assert_eq!(read_column(&fb, Column::Month, 4), 8);

    // Saturday = 6 = 0b110
    assert!(!fb.is_lit(dot_center(Column::Hour, WEEKDAY_ROW)));
    assert!(fb.is_lit(dot_center(Column::DayOfMonth, WEEKDAY_ROW)));
    assert!(fb.is_lit(dot_center(Column::Month, WEEKDAY_ROW)));
}

#[test]
fn pm_dot_and_folded_hour_in_12h_mode() {
    let dt = Local.with_ymd_and_hms(2026, 8, 29, 13, 0, 0).unwrap();
    let sample = TimeSample::from_datetime(&dt, false);
    let fb = render(&encode(&sample));

    assert_eq!(read_column(&fb, Column::Hour, 4), 1); // 13:00 reads 1
    assert!(fb.is_lit(dot_center(Column::Hour, 4))); // PM dot
}

#[test]
fn controller_tick_drives_the_face() {
    let mut controller = ClockController::new();
    controller.on_connection_changed(true);

    let sample = TimeSample::new(45, 30, 14, 9, 3, 2, true).unwrap();
    controller.on_tick(sample);
    let fb = render(&controller.display_grid());

    assert_eq!(read_column(&fb, Column::Second, 6), 45);
    assert_eq!(read_column(&fb, Column::Minute, 6), 30);
    assert_eq!(read_column(&fb, Column::Hour, 5), 14);
    // link dot rides the month column's spare row
    assert!(fb.is_lit(dot_center(Column::Month, 4)));
}

#[test]
fn invalid_sample_keeps_previous_face() {
    let mut controller = ClockController::new();
    let good = TimeSample::new(10, 20, 3, 15, 6, 4, true).unwrap();
    controller.on_tick(good);
    let before = controller.display_grid();

    // The shell's policy: a sample that fails validation never reaches the
    // controller, so the face is simply left alone.
    assert!(TimeSample::new(99, 20, 3, 15, 6, 4, true).is_err());
    assert_eq!(controller.display_grid(), before);
}

#[test]
fn redraw_clears_stale_dots() {
    let mut fb = PixelBuffer::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);

    let s59 = TimeSample::new(59, 0, 0, 1, 1, 1, true).unwrap();
    render_grid(&mut fb, &encode(&s59)).unwrap();
    let s0 = TimeSample::new(0, 0, 0, 1, 1, 1, true).unwrap();
    render_grid(&mut fb, &encode(&s0)).unwrap();

    for row in 0..ROWS {
        assert!(!fb.is_lit(dot_center(Column::Second, row)), "row {row}");
    }
}
