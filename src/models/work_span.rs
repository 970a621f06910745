//! Non-negative hours+minutes span used for break and worked time.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::fmt;
use std::ops::Sub;
use std::sync::OnceLock;

/// Pattern for `H:MM` span text; minutes are strictly two digits in 00-59,
/// the hour part is unbounded.
fn span_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+):([0-5][0-9])$").unwrap())
}

/// A span such as "1:00" or "10:30".
///
/// The type itself carries no ceiling; domain rules like the break-time
/// maximum live at the call site building a [`WorkRecord`](crate::models::WorkRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkSpan {
    total_minutes: i64,
}

impl WorkSpan {
    pub fn parse(text: &str) -> AppResult<Self> {
        let trimmed = text.trim();

        let caps = span_pattern()
            .captures(trimmed)
            .ok_or_else(|| AppError::Format(format!("{trimmed} (expected H:MM)")))?;

        let hours: i64 = caps[1]
            .parse()
            .map_err(|_| AppError::Format(format!("{trimmed} (bad hour)")))?;
        let minutes: i64 = caps[2]
            .parse()
            .map_err(|_| AppError::Format(format!("{trimmed} (bad minute)")))?;

        Ok(Self {
            total_minutes: hours * 60 + minutes,
        })
    }

    pub fn from_minutes(total_minutes: i64) -> Self {
        Self { total_minutes }
    }

    pub fn total_minutes(&self) -> i64 {
        self.total_minutes
    }
}

impl Sub for WorkSpan {
    type Output = WorkSpan;

    fn sub(self, rhs: WorkSpan) -> WorkSpan {
        WorkSpan::from_minutes(self.total_minutes - rhs.total_minutes)
    }
}

impl fmt::Display for WorkSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.total_minutes / 60, self.total_minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_round_trip() {
        for text in ["0:00", "1:00", "1:30", "10:05", "123:59"] {
            let span = WorkSpan::parse(text).unwrap();
            assert_eq!(span.to_string(), text);
            assert_eq!(WorkSpan::parse(&span.to_string()).unwrap(), span);
        }
    }

    #[test]
    fn hour_part_is_unbounded() {
        let span = WorkSpan::parse("100:15").unwrap();
        assert_eq!(span.total_minutes(), 6015);
    }

    #[test]
    fn rejects_minute_out_of_range() {
        assert!(WorkSpan::parse("1:60").is_err());
    }

    #[test]
    fn rejects_single_digit_minutes() {
        assert!(WorkSpan::parse("1:5").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(WorkSpan::parse("").is_err());
        assert!(WorkSpan::parse(":30").is_err());
        assert!(WorkSpan::parse("1:").is_err());
        assert!(WorkSpan::parse("-1:30").is_err());
    }

    #[test]
    fn subtraction_and_comparison() {
        let worked = WorkSpan::parse("8:00").unwrap();
        let lunch = WorkSpan::parse("1:00").unwrap();
        assert!(lunch < worked);
        assert_eq!((worked - lunch).to_string(), "7:00");
    }
}
