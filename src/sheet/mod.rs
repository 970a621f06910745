//! The report document: cell addressing, the fixed template layout, and the
//! date-to-row mapping.
//!
//! The layout is a template convention, not discovered at runtime: the month
//! stamp, identity fields and per-day columns live at fixed addresses, and
//! day N of the month always occupies the same row.

pub mod store;
pub mod xlsx;

pub use store::SheetDocument;

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Template layout constants (client report format).
pub mod layout {
    /// Month stamp cell, 1-based address.
    pub const MONTH_CELL: &str = "B7";
    /// Client name cell.
    pub const CLIENT_CELL: &str = "C4";
    /// Reporting user cell.
    pub const USER_CELL: &str = "L4";

    /// 0-based row of day 1; each later day occupies the next row.
    pub const BASE_ROW: u32 = 7;
    /// Last 0-based day row the template provisions (day 31).
    pub const LAST_DAY_ROW: u32 = BASE_ROW + 30;

    pub const DAY_COLUMN: char = 'B';
    pub const START_COLUMN: char = 'F';
    pub const END_COLUMN: char = 'G';
    pub const BREAK_COLUMN: char = 'H';
    pub const WORKED_COLUMN: char = 'I';
    pub const NOTE_COLUMN: char = 'J';

    /// Monthly total cell, directly under the day-31 worked column.
    pub const TOTAL_CELL: &str = "I39";
}

/// A 0-based (row, column) pair addressed externally as a column letter
/// `A`-`Z` followed by a 1-based row number, e.g. `B7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CellAddress {
    pub row: u32,
    pub col: u16,
}

impl CellAddress {
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Builds an address from a column letter and a 0-based row.
    pub fn at(column: char, row: u32) -> Self {
        Self {
            row,
            col: (column as u8 - b'A') as u16,
        }
    }

    pub fn parse(text: &str) -> AppResult<Self> {
        if text.len() < 2 {
            return Err(AppError::AddressFormat(text.to_string()));
        }

        let column = text.chars().next().expect("length checked above");
        if !column.is_ascii_uppercase() {
            return Err(AppError::AddressFormat(text.to_string()));
        }

        let row_number: u32 = text[1..]
            .parse()
            .map_err(|_| AppError::AddressFormat(text.to_string()))?;
        if row_number == 0 {
            return Err(AppError::AddressFormat(text.to_string()));
        }

        Ok(Self::at(column, row_number - 1))
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", letter, self.row + 1)
    }
}

/// Narrow interface the sync engine drives the document through.
pub trait Document {
    fn set_cell(&mut self, addr: CellAddress, value: &str);
    fn clear_cell(&mut self, addr: CellAddress);
    fn cell_text(&self, addr: CellAddress) -> Option<&str>;
    /// Whether the template materialized this row at all.
    fn has_row(&self, row: u32) -> bool;
    /// Re-evaluates the document's pre-existing formulas.
    fn recompute(&mut self);
}

/// Maps a calendar date to its 0-based document row, or `None` when the
/// document has no such row materialized. The template convention puts day 1
/// at [`layout::BASE_ROW`] and each later day on the next row.
pub fn row_for_date(doc: &impl Document, date: NaiveDate) -> Option<u32> {
    let row = layout::BASE_ROW + date.day() - 1;
    doc.has_row(row).then_some(row)
}
