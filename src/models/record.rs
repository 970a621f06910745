//! A validated entry for one calendar day of work.

use crate::errors::{AppError, AppResult};
use crate::models::{ClockTime, WorkSpan};
use chrono::NaiveDate;

/// Break time longer than this is rejected when building a record.
/// This is a rule of the break role, not of [`WorkSpan`] itself.
pub const MAX_BREAK_MINUTES: i64 = 3 * 60;

/// One day's work entry. Built only through [`WorkRecord::of`] and
/// immutable afterwards; the sync engine replaces records, never edits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkRecord {
    date: NaiveDate,
    start_time: ClockTime,
    end_time: ClockTime,
    break_time: WorkSpan,
    note: String,
}

impl WorkRecord {
    /// Validating factory: parses the three time fields and checks that the
    /// end does not precede the start and that the break fits inside the
    /// worked span.
    pub fn of(
        date: NaiveDate,
        start_text: &str,
        end_text: &str,
        break_text: &str,
        note: &str,
    ) -> AppResult<Self> {
        let start_time = ClockTime::parse(start_text)?;
        let end_time = ClockTime::parse(end_text)?;
        let break_time = WorkSpan::parse(break_text)?;

        if end_time < start_time {
            return Err(AppError::Validation(format!(
                "end time must not precede start time: {start_time} -> {end_time}"
            )));
        }

        if break_time.total_minutes() > MAX_BREAK_MINUTES {
            return Err(AppError::Validation(format!(
                "break time must not exceed 3 hours: {break_time}"
            )));
        }

        let worked = WorkSpan::from_minutes(end_time.minutes() - start_time.minutes());
        if break_time > worked {
            return Err(AppError::Validation(format!(
                "break time must fit inside the worked span: {break_time} > {worked}"
            )));
        }

        Ok(Self {
            date,
            start_time,
            end_time,
            break_time,
            note: note.to_string(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Canonical `HH:MM` text, used when writing document cells.
    pub fn start_text(&self) -> String {
        self.start_time.to_string()
    }

    /// Canonical `HH:MM` text, used when writing document cells.
    pub fn end_text(&self) -> String {
        self.end_time.to_string()
    }

    /// Canonical `H:MM` text, used when writing document cells.
    pub fn break_text(&self) -> String {
        self.break_time.to_string()
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}
