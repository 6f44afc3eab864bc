use chrono::{DateTime, Datelike, Local, Timelike};
use thiserror::Error;

/// Error type for time sample validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    #[error("{field} value {value} out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// An immutable snapshot of the calendar fields needed for one render pass.
///
/// A sample is built once per second tick, encoded, and discarded. Fields
/// are validated on construction so the encoder never sees an out-of-range
/// value; there is no clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    second: u8,
    minute: u8,
    hour: u8,
    day_of_month: u8,
    month: u8,
    weekday: u8,
    use_24h: bool,
}

fn check(field: &'static str, value: u32, min: u32, max: u32) -> Result<u8, SampleError> {
    if value < min || value > max {
        return Err(SampleError::OutOfRange { field, value, min, max });
    }
    Ok(value as u8)
}

impl TimeSample {
    /// Builds a validated sample. `hour` is the 24-hour wall-clock value
    /// regardless of display mode; `weekday` uses 0=Sunday..6=Saturday.
    pub fn new(
        second: u32,
        minute: u32,
        hour: u32,
        day_of_month: u32,
        month: u32,
        weekday: u32,
        use_24h: bool,
    ) -> Result<Self, SampleError> {
        Ok(Self {
            second: check("second", second, 0, 59)?,
            minute: check("minute", minute, 0, 59)?,
            hour: check("hour", hour, 0, 23)?,
            day_of_month: check("day_of_month", day_of_month, 1, 31)?,
            month: check("month", month, 1, 12)?,
            weekday: check("weekday", weekday, 0, 6)?,
            use_24h,
        })
    }

    /// Builds a sample from a chrono timestamp. Infallible: every field
    /// chrono hands back is already within the documented ranges.
    pub fn from_datetime(when: &DateTime<Local>, use_24h: bool) -> Self {
        Self {
            second: when.second() as u8,
            minute: when.minute() as u8,
            hour: when.hour() as u8,
            day_of_month: when.day() as u8,
            month: when.month() as u8,
            weekday: when.weekday().num_days_from_sunday() as u8,
            use_24h,
        }
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Wall-clock hour, always 0-23.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn day_of_month(&self) -> u8 {
        self.day_of_month
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Raw weekday, 0=Sunday..6=Saturday.
    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    pub fn use_24h(&self) -> bool {
        self.use_24h
    }

    /// Hour value as shown on the grid: the raw hour in 24-hour mode, or
    /// the 1-12 folded hour (midnight and noon read as 12) otherwise.
    pub fn display_hour(&self) -> u8 {
        if self.use_24h {
            self.hour
        } else {
            match self.hour % 12 {
                0 => 12,
                h => h,
            }
        }
    }

    /// True from noon onwards. Only meaningful in 12-hour mode.
    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    /// Weekday as encoded: Monday=1..Saturday=6, Sunday folded to 7 so the
    /// value always fits three bits without a zero (an all-dark row would
    /// be unreadable).
    pub fn display_weekday(&self) -> u8 {
        if self.weekday == 0 { 7 } else { self.weekday }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(hour: u32, use_24h: bool) -> TimeSample {
        TimeSample::new(0, 0, hour, 1, 1, 1, use_24h).unwrap()
    }

    #[test]
    fn test_valid_ranges_accepted() {
        assert!(TimeSample::new(59, 59, 23, 31, 12, 6, true).is_ok());
        assert!(TimeSample::new(0, 0, 0, 1, 1, 0, false).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = TimeSample::new(60, 0, 0, 1, 1, 0, true).unwrap_err();
        assert_eq!(
            err,
            SampleError::OutOfRange { field: "second", value: 60, min: 0, max: 59 }
        );
        assert!(TimeSample::new(0, 60, 0, 1, 1, 0, true).is_err());
        assert!(TimeSample::new(0, 0, 24, 1, 1, 0, true).is_err());
        assert!(TimeSample::new(0, 0, 0, 0, 1, 0, true).is_err());
        assert!(TimeSample::new(0, 0, 0, 32, 1, 0, true).is_err());
        assert!(TimeSample::new(0, 0, 0, 1, 13, 0, true).is_err());
        assert!(TimeSample::new(0, 0, 0, 1, 1, 7, true).is_err());
    }

    #[test]
    fn test_display_hour_24h_is_identity() {
        for h in 0..24 {
            assert_eq!(sample(h, true).display_hour(), h as u8);
        }
    }

    #[test]
    fn test_display_hour_12h_folding() {
        assert_eq!(sample(0, false).display_hour(), 12); // midnight reads 12
        assert_eq!(sample(12, false).display_hour(), 12); // noon reads 12
        assert_eq!(sample(13, false).display_hour(), 1);
        assert_eq!(sample(23, false).display_hour(), 11);
        assert!(!sample(11, false).is_pm());
        assert!(sample(12, false).is_pm());
    }

    #[test]
    fn test_sunday_folds_to_seven() {
        let sunday = TimeSample::new(0, 0, 0, 1, 1, 0, true).unwrap();
        assert_eq!(sunday.display_weekday(), 7);
        for wd in 1..=6 {
            let s = TimeSample::new(0, 0, 0, 1, 1, wd, true).unwrap();
            assert_eq!(s.display_weekday(), wd as u8);
        }
    }

    #[test]
    fn test_from_datetime() {
        // 2026-03-09 is a Monday.
        let dt = Local.with_ymd_and_hms(2026, 3, 9, 14, 30, 45).unwrap();
        let s = TimeSample::from_datetime(&dt, true);
        assert_eq!(s.second(), 45);
        assert_eq!(s.minute(), 30);
        assert_eq!(s.hour(), 14);
        assert_eq!(s.day_of_month(), 9);
        assert_eq!(s.month(), 3);
        assert_eq!(s.weekday(), 1);
        assert_eq!(s.display_weekday(), 1);
    }
}
