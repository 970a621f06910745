//! Wall-clock time of day with minute precision.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Pattern for `H:MM`/`HH:MM` clock text; one or two hour digits, minutes
/// strictly two digits in 00-59. No signs, no extra padding.
fn clock_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{1,2}):([0-5][0-9])$").unwrap())
}

/// A time of day such as "9:30" or "17:45".
///
/// Input accepts an unpadded hour (`H:MM` or `HH:MM`); output is always
/// zero-padded `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn parse(text: &str) -> AppResult<Self> {
        let trimmed = text.trim();

        let caps = clock_pattern()
            .captures(trimmed)
            .ok_or_else(|| AppError::Format(format!("{trimmed} (expected H:MM)")))?;

        let hour: u32 = caps[1]
            .parse()
            .map_err(|_| AppError::Format(format!("{trimmed} (bad hour)")))?;
        let minute: u32 = caps[2]
            .parse()
            .map_err(|_| AppError::Format(format!("{trimmed} (bad minute)")))?;

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| AppError::Format(format!("{trimmed} (out of range)")))?;

        Ok(Self(time))
    }

    /// Minutes since midnight; used for span arithmetic.
    pub fn minutes(&self) -> i64 {
        use chrono::Timelike;
        (self.0.hour() * 60 + self.0.minute()) as i64
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}
