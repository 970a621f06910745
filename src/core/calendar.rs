//! Holiday calendar and workday queries.
//!
//! The calendar is an explicitly constructed value passed to whatever needs
//! workday answers; nothing here is process-global. A fresh [`HolidayCalendar::load`]
//! (or [`reload`](HolidayCalendar::reload)) is required to pick up edits to
//! the holiday file.

use crate::csvio;
use crate::models::Holiday;
use crate::ui::messages::warning;
use crate::utils::date::ReportMonth;
use chrono::{Datelike, NaiveDate, Weekday};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct HolidayCalendar {
    source: PathBuf,
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Loads the holiday CSV at `source`. An unreadable file degrades to an
    /// empty holiday set with a warning instead of failing the operation:
    /// weekdays then all count as workdays, which keeps the tool usable when
    /// the holiday data is missing or stale.
    pub fn load(source: &Path) -> Self {
        let holidays = match csvio::read_holidays(source) {
            Ok(list) => list,
            Err(e) => {
                warning(format!(
                    "Could not read holiday data ({}): {e}. Continuing without holidays.",
                    source.display()
                ));
                Vec::new()
            }
        };

        let mut holidays = holidays;
        holidays.sort_by_key(|h| h.date);

        Self {
            source: source.to_path_buf(),
            holidays,
        }
    }

    /// An always-empty calendar, useful for tests.
    pub fn empty() -> Self {
        Self {
            source: PathBuf::new(),
            holidays: Vec::new(),
        }
    }

    /// Re-reads the holiday file this calendar was loaded from.
    pub fn reload(&mut self) {
        *self = Self::load(&self.source.clone());
    }

    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays
            .binary_search_by_key(&date, |h| h.date)
            .is_ok()
    }

    /// True iff `date` is neither Saturday, Sunday, nor a listed holiday.
    pub fn is_workday(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.is_holiday(date)
    }

    /// The ordered workdays of `month`. Recomputed on every call so a
    /// reloaded calendar is picked up immediately.
    pub fn workdays_of_month(&self, month: ReportMonth) -> Vec<NaiveDate> {
        month
            .days()
            .into_iter()
            .filter(|d| self.is_workday(*d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_holidays(dates: &[(i32, u32, u32)]) -> HolidayCalendar {
        let mut cal = HolidayCalendar::empty();
        cal.holidays = dates
            .iter()
            .map(|&(y, m, d)| {
                Holiday::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), "holiday")
            })
            .collect();
        cal.holidays.sort_by_key(|h| h.date);
        cal
    }

    #[test]
    fn weekends_are_not_workdays() {
        let cal = HolidayCalendar::empty();
        // 2025-06-01 is a Sunday, 2025-06-07 a Saturday
        assert!(!cal.is_workday(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
        assert!(!cal.is_workday(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
        assert!(cal.is_workday(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
    }

    #[test]
    fn holidays_are_not_workdays() {
        let cal = with_holidays(&[(2025, 6, 2)]);
        assert!(cal.is_holiday(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
        assert!(!cal.is_workday(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
    }

    #[test]
    fn june_2025_workdays_with_empty_calendar() {
        // 30 days starting on a Sunday: 21 workdays
        let cal = HolidayCalendar::empty();
        let month = ReportMonth::parse("2025/06").unwrap();
        let workdays = cal.workdays_of_month(month);

        assert_eq!(workdays.len(), 21);
        assert!(workdays.contains(&NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
        assert!(!workdays.contains(&NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
        assert!(!workdays.contains(&NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
        assert!(!workdays.contains(&NaiveDate::from_ymd_opt(2025, 6, 8).unwrap()));
    }

    #[test]
    fn weekend_holiday_is_not_double_counted() {
        // 2025-06-01 is already a Sunday; listing it as a holiday must not
        // change the workday count.
        let plain = HolidayCalendar::empty();
        let overlapping = with_holidays(&[(2025, 6, 1)]);
        let month = ReportMonth::parse("2025/06").unwrap();

        assert_eq!(
            plain.workdays_of_month(month).len(),
            overlapping.workdays_of_month(month).len()
        );
    }

    #[test]
    fn midweek_holiday_reduces_workday_count() {
        let cal = with_holidays(&[(2025, 6, 2)]);
        let month = ReportMonth::parse("2025/06").unwrap();
        assert_eq!(cal.workdays_of_month(month).len(), 20);
    }

    #[test]
    fn missing_source_degrades_to_empty_calendar() {
        let cal = HolidayCalendar::load(Path::new("/nonexistent/holidays.csv"));
        assert_eq!(cal.holiday_count(), 0);
        assert!(cal.is_workday(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
    }
}
