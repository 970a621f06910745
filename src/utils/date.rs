//! Date text formats shared by the CSV codec and the filename conventions.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Parses a CSV date in `YYYY/M/D` form (month and day may be unpadded).
pub fn parse_csv_date(text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y/%m/%d")
        .map_err(|_| AppError::Format(format!("{text} (expected YYYY/M/D)")))
}

/// Formats a date back to `YYYY/M/D` with unpadded month and day, so that
/// `parse_csv_date(format_csv_date(d)) == d` for every representable date.
pub fn format_csv_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

/// A target year-month such as `2025/06`.
///
/// Accepted input is `YYYY/M` or `YYYY/MM`; the filename stamp is always the
/// six-digit `yyyyMM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReportMonth {
    year: i32,
    month: u32,
}

impl ReportMonth {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1900..=2100).contains(&year) || !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth(format!("{year}/{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn parse(text: &str) -> AppResult<Self> {
        let trimmed = text.trim();
        let (y, m) = trimmed
            .split_once('/')
            .ok_or_else(|| AppError::InvalidMonth(trimmed.to_string()))?;

        let year: i32 = y
            .parse()
            .map_err(|_| AppError::InvalidMonth(trimmed.to_string()))?;
        let month: u32 = m
            .parse()
            .map_err(|_| AppError::InvalidMonth(trimmed.to_string()))?;

        Self::new(year, month).map_err(|_| AppError::InvalidMonth(trimmed.to_string()))
    }

    /// Parses the six-digit `yyyyMM` stamp embedded in filenames.
    pub fn from_file_stamp(stamp: &str) -> AppResult<Self> {
        if stamp.len() != 6 || !stamp.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidMonth(stamp.to_string()));
        }
        let year: i32 = stamp[..4].parse().unwrap();
        let month: u32 = stamp[4..].parse().unwrap();
        Self::new(year, month).map_err(|_| AppError::InvalidMonth(stamp.to_string()))
    }

    /// The six-digit `yyyyMM` stamp used in filenames.
    pub fn file_stamp(&self) -> String {
        format!("{:04}{:02}", self.year, self.month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated at construction")
    }

    /// Every calendar date in the month, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        let mut d = self.first_day();
        while d.month() == self.month {
            out.push(d);
            match d.succ_opt() {
                Some(next) => d = next,
                None => break,
            }
        }
        out
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_date_round_trip_unpadded() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(format_csv_date(d), "2025/6/2");
        assert_eq!(parse_csv_date("2025/6/2").unwrap(), d);
        assert_eq!(parse_csv_date(&format_csv_date(d)).unwrap(), d);
    }

    #[test]
    fn csv_date_accepts_padded_input() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(parse_csv_date("2025/06/02").unwrap(), d);
    }

    #[test]
    fn csv_date_rejects_garbage() {
        assert!(parse_csv_date("invalid").is_err());
        assert!(parse_csv_date("2025-06-02").is_err());
        assert!(parse_csv_date("2025/13/01").is_err());
    }

    #[test]
    fn month_parse_accepts_unpadded() {
        let m = ReportMonth::parse("2025/6").unwrap();
        assert_eq!(m, ReportMonth::parse("2025/06").unwrap());
        assert_eq!(m.file_stamp(), "202506");
        assert_eq!(m.to_string(), "2025/06");
    }

    #[test]
    fn month_parse_rejects_bad_input() {
        assert!(ReportMonth::parse("202506").is_err());
        assert!(ReportMonth::parse("2025/13").is_err());
        assert!(ReportMonth::parse("2025/0").is_err());
        assert!(ReportMonth::parse("25/06").is_err());
    }

    #[test]
    fn file_stamp_round_trip() {
        let m = ReportMonth::from_file_stamp("202512").unwrap();
        assert_eq!(m.file_stamp(), "202512");
        assert!(ReportMonth::from_file_stamp("20251").is_err());
        assert!(ReportMonth::from_file_stamp("2025xx").is_err());
        assert!(ReportMonth::from_file_stamp("202500").is_err());
    }

    #[test]
    fn days_enumerates_the_whole_month() {
        let june = ReportMonth::parse("2025/06").unwrap().days();
        assert_eq!(june.len(), 30);
        assert_eq!(june[0], NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(june[29], NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());

        let feb = ReportMonth::parse("2024/02").unwrap().days();
        assert_eq!(feb.len(), 29);
    }

    #[test]
    fn next_rolls_over_december() {
        let dec = ReportMonth::parse("2025/12").unwrap();
        assert_eq!(dec.next(), ReportMonth::parse("2026/01").unwrap());
    }
}
