//! JSON-backed sheet store, the production implementation of [`Document`].
//!
//! A document is a sparse grid of cells keyed by address text. A cell holds
//! either a plain text value, or a stored formula with its cached value. The
//! only formula shapes the report template carries are `=WORKED()` (per-row
//! worked hours) and `=TOTAL()` (monthly sum); recompute re-evaluates those
//! and nothing else.

use crate::errors::{AppError, AppResult};
use crate::models::{ClockTime, WorkSpan};
use crate::sheet::{layout, CellAddress, Document};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const WORKED_FORMULA: &str = "=WORKED()";
pub const TOTAL_FORMULA: &str = "=TOTAL()";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    formula: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SheetDocument {
    cells: BTreeMap<String, Cell>,
}

impl SheetDocument {
    pub fn open(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::Document(format!("cannot parse document {}: {e}", path.display()))
        })
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Document(format!("cannot serialize document: {e}")))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// The blank month grid written by `init`: identity labels, the month
    /// stamp row, 31 pre-provisioned day rows with worked-hours formulas,
    /// and the monthly total.
    pub fn month_template() -> Self {
        let mut doc = Self::default();

        doc.put_value("A1", "Monthly Work Report");
        doc.put_value("B4", "client");
        doc.put_value("K4", "user");
        doc.put_value(layout::CLIENT_CELL, "");
        doc.put_value(layout::USER_CELL, "");

        doc.put_value(layout::MONTH_CELL, "");
        for (column, label) in [
            (layout::START_COLUMN, "start"),
            (layout::END_COLUMN, "end"),
            (layout::BREAK_COLUMN, "break"),
            (layout::WORKED_COLUMN, "worked"),
            (layout::NOTE_COLUMN, "note"),
        ] {
            doc.put_value(&CellAddress::at(column, layout::BASE_ROW - 1).to_string(), label);
        }

        for day in 1u32..=31 {
            let row = layout::BASE_ROW + day - 1;
            doc.put_value(
                &CellAddress::at(layout::DAY_COLUMN, row).to_string(),
                &day.to_string(),
            );
            doc.cells.insert(
                CellAddress::at(layout::WORKED_COLUMN, row).to_string(),
                Cell {
                    value: None,
                    formula: Some(WORKED_FORMULA.to_string()),
                },
            );
        }

        doc.put_value("H39", "total");
        doc.cells.insert(
            layout::TOTAL_CELL.to_string(),
            Cell {
                value: None,
                formula: Some(TOTAL_FORMULA.to_string()),
            },
        );

        doc
    }

    fn put_value(&mut self, addr: &str, value: &str) {
        self.cells.insert(
            addr.to_string(),
            Cell {
                value: Some(value.to_string()),
                formula: None,
            },
        );
    }

    /// All cells with a present value, as (address, text), for rendering.
    pub fn value_cells(&self) -> impl Iterator<Item = (CellAddress, &str)> {
        self.cells.iter().filter_map(|(key, cell)| {
            let addr = CellAddress::parse(key).ok()?;
            Some((addr, cell.value.as_deref()?))
        })
    }

    fn worked_minutes_for_row(&self, row: u32) -> Option<i64> {
        let read = |column: char| {
            self.cell_text(CellAddress::at(column, row))
                .filter(|t| !t.is_empty())
        };

        let start = ClockTime::parse(read(layout::START_COLUMN)?).ok()?;
        let end = ClockTime::parse(read(layout::END_COLUMN)?).ok()?;
        let brk = WorkSpan::parse(read(layout::BREAK_COLUMN)?).ok()?;

        let minutes = end.minutes() - start.minutes() - brk.total_minutes();
        (minutes >= 0).then_some(minutes)
    }
}

impl Document for SheetDocument {
    fn set_cell(&mut self, addr: CellAddress, value: &str) {
        let cell = self.cells.entry(addr.to_string()).or_default();
        cell.value = Some(value.to_string());
    }

    fn clear_cell(&mut self, addr: CellAddress) {
        let key = addr.to_string();
        if let Some(cell) = self.cells.get_mut(&key) {
            cell.value = None;
            if cell.formula.is_none() {
                self.cells.remove(&key);
            }
        }
    }

    fn cell_text(&self, addr: CellAddress) -> Option<&str> {
        self.cells.get(&addr.to_string())?.value.as_deref()
    }

    fn has_row(&self, row: u32) -> bool {
        self.cells
            .keys()
            .filter_map(|key| CellAddress::parse(key).ok())
            .any(|addr| addr.row == row)
    }

    fn recompute(&mut self) {
        // Per-row worked hours first, then the total over their results.
        let worked_rows: Vec<u32> = self
            .cells
            .iter()
            .filter(|(_, cell)| cell.formula.as_deref() == Some(WORKED_FORMULA))
            .filter_map(|(key, _)| CellAddress::parse(key).ok())
            .map(|addr| addr.row)
            .collect();

        let mut total_minutes = 0i64;
        for row in worked_rows {
            let addr = CellAddress::at(layout::WORKED_COLUMN, row);
            match self.worked_minutes_for_row(row) {
                Some(minutes) => {
                    total_minutes += minutes;
                    let text = WorkSpan::from_minutes(minutes).to_string();
                    if let Some(cell) = self.cells.get_mut(&addr.to_string()) {
                        cell.value = Some(text);
                    }
                }
                None => {
                    if let Some(cell) = self.cells.get_mut(&addr.to_string()) {
                        cell.value = None;
                    }
                }
            }
        }

        if let Some(cell) = self.cells.get_mut(layout::TOTAL_CELL) {
            if cell.formula.as_deref() == Some(TOTAL_FORMULA) {
                cell.value = Some(WorkSpan::from_minutes(total_minutes).to_string());
            }
        }
    }
}

/// Copies the template document to `dst`. A missing template is fatal for
/// the calling operation.
pub fn copy_template(src: &Path, dst: &Path) -> AppResult<()> {
    if !src.exists() {
        return Err(AppError::TemplateMissing(src.display().to_string()));
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dst)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::row_for_date;
    use chrono::NaiveDate;

    #[test]
    fn template_provisions_all_day_rows() {
        let doc = SheetDocument::month_template();
        for day in 1u32..=31 {
            assert!(doc.has_row(layout::BASE_ROW + day - 1), "day {day}");
        }
    }

    #[test]
    fn row_mapping_is_strictly_increasing() {
        let doc = SheetDocument::month_template();
        let rows: Vec<u32> = (1..=30)
            .map(|day| {
                let date = NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
                row_for_date(&doc, date).unwrap()
            })
            .collect();

        assert_eq!(rows[0], layout::BASE_ROW);
        assert!(rows.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn unprovisioned_row_is_a_miss_not_an_error() {
        let doc = SheetDocument::default();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(row_for_date(&doc, date), None);
    }

    #[test]
    fn set_clear_and_read_back() {
        let mut doc = SheetDocument::month_template();
        let addr = CellAddress::parse("F8").unwrap();

        doc.set_cell(addr, "09:00");
        assert_eq!(doc.cell_text(addr), Some("09:00"));

        doc.clear_cell(addr);
        assert_eq!(doc.cell_text(addr), None);
    }

    #[test]
    fn clearing_a_formula_cell_keeps_the_formula() {
        let mut doc = SheetDocument::month_template();
        let addr = CellAddress::at(layout::WORKED_COLUMN, layout::BASE_ROW);

        doc.set_cell(CellAddress::at(layout::START_COLUMN, layout::BASE_ROW), "9:00");
        doc.set_cell(CellAddress::at(layout::END_COLUMN, layout::BASE_ROW), "18:00");
        doc.set_cell(CellAddress::at(layout::BREAK_COLUMN, layout::BASE_ROW), "1:00");
        doc.recompute();
        assert_eq!(doc.cell_text(addr), Some("8:00"));

        doc.clear_cell(addr);
        doc.recompute();
        assert_eq!(doc.cell_text(addr), Some("8:00"));
    }

    #[test]
    fn recompute_fills_worked_and_total() {
        let mut doc = SheetDocument::month_template();

        // day 2 and day 3
        for row in [layout::BASE_ROW + 1, layout::BASE_ROW + 2] {
            doc.set_cell(CellAddress::at(layout::START_COLUMN, row), "09:00");
            doc.set_cell(CellAddress::at(layout::END_COLUMN, row), "18:00");
            doc.set_cell(CellAddress::at(layout::BREAK_COLUMN, row), "1:00");
        }
        doc.recompute();

        let worked = CellAddress::at(layout::WORKED_COLUMN, layout::BASE_ROW + 1);
        assert_eq!(doc.cell_text(worked), Some("8:00"));
        assert_eq!(
            doc.cell_text(CellAddress::parse(layout::TOTAL_CELL).unwrap()),
            Some("16:00")
        );
    }

    #[test]
    fn recompute_blanks_rows_with_missing_inputs() {
        let mut doc = SheetDocument::month_template();
        let row = layout::BASE_ROW;

        doc.set_cell(CellAddress::at(layout::START_COLUMN, row), "09:00");
        doc.recompute();

        assert_eq!(
            doc.cell_text(CellAddress::at(layout::WORKED_COLUMN, row)),
            None
        );
    }

    #[test]
    fn save_and_reopen_round_trip() {
        let mut path = std::env::temp_dir();
        path.push("store_round_trip_rworkreport.json");

        let mut doc = SheetDocument::month_template();
        doc.set_cell(CellAddress::parse("C4").unwrap(), "ACME Corp");
        doc.save(&path).unwrap();

        let reopened = SheetDocument::open(&path).unwrap();
        assert_eq!(
            reopened.cell_text(CellAddress::parse("C4").unwrap()),
            Some("ACME Corp")
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_template_copy_is_fatal() {
        let err = copy_template(
            Path::new("/nonexistent/template.json"),
            Path::new("/tmp/out.json"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::TemplateMissing(_)));
    }
}
