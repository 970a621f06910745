//! The CSV-to-report reconciliation engine.
//!
//! After a sync, the document's workday rows mirror the CSV exactly: rows
//! for dates present in the CSV carry the CSV values, and workday rows for
//! dates absent from the CSV are cleared so they never retain stale data.

use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::naming;
use crate::csvio;
use crate::errors::AppResult;
use crate::sheet::{layout, row_for_date, CellAddress, Document, SheetDocument};
use crate::ui::messages::{error, info, warning};
use std::collections::HashSet;
use std::path::Path;

/// Counts returned by one reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    pub updated: usize,
    pub cleared: usize,
}

/// High-level logic for the `update` and `save` commands.
pub struct SyncLogic;

impl SyncLogic {
    /// Reconciles one report document against one CSV file.
    pub fn update_from_csv(
        cfg: &Config,
        calendar: &HolidayCalendar,
        report_file: &str,
        csv_file: &str,
    ) -> AppResult<SyncOutcome> {
        // 1. Read the CSV; malformed lines were already skipped with a warning.
        let csv_path = Path::new(&cfg.csv_dir).join(csv_file);
        let records = csvio::valid_records(csvio::read_work_records(&csv_path)?);

        // 2. The target month comes from the report filename convention.
        let month = naming::month_from_report_name(report_file)?;

        // 3. Open the document.
        let report_path = Path::new(&cfg.output_dir).join(report_file);
        let mut doc = SheetDocument::open(&report_path)?;

        let csv_dates: HashSet<_> = records.iter().map(|r| r.date()).collect();

        // 4. Overwrite the row of every CSV record; a date outside the
        //    document's range is tolerated, not fatal.
        let mut updated = 0;
        for record in &records {
            match row_for_date(&doc, record.date()) {
                Some(row) => {
                    doc.set_cell(
                        CellAddress::at(layout::START_COLUMN, row),
                        &record.start_text(),
                    );
                    doc.set_cell(CellAddress::at(layout::END_COLUMN, row), &record.end_text());
                    doc.set_cell(
                        CellAddress::at(layout::BREAK_COLUMN, row),
                        &record.break_text(),
                    );
                    doc.set_cell(CellAddress::at(layout::NOTE_COLUMN, row), record.note());
                    updated += 1;
                }
                None => warning(format!("No document row for {}", record.date())),
            }
        }

        // 5. Clear the row of every workday the CSV does not mention.
        let mut cleared = 0;
        for workday in calendar.workdays_of_month(month) {
            if csv_dates.contains(&workday) {
                continue;
            }
            if let Some(row) = row_for_date(&doc, workday) {
                for column in [
                    layout::START_COLUMN,
                    layout::END_COLUMN,
                    layout::BREAK_COLUMN,
                    layout::NOTE_COLUMN,
                ] {
                    doc.clear_cell(CellAddress::at(column, row));
                }
                cleared += 1;
            }
        }

        // 6. Refresh derived cells, then persist.
        doc.recompute();
        doc.save(&report_path)?;

        info(format!("Sync complete: {updated} updated, {cleared} cleared"));
        Ok(SyncOutcome { updated, cleared })
    }

    /// Applies the most recent CSV (by filename stamp) to every report
    /// document of the same month. Returns the number of documents updated;
    /// nothing to do is zero, not an error.
    pub fn sync_latest(cfg: &Config, calendar: &HolidayCalendar) -> AppResult<usize> {
        let Some(latest) = naming::find_latest_csv(Path::new(&cfg.csv_dir))? else {
            info("No work-data CSV files found");
            return Ok(0);
        };

        let reports =
            naming::find_reports_for_month(Path::new(&cfg.output_dir), latest.month)?;
        if reports.is_empty() {
            warning(format!("No report documents found for {}", latest.month));
            return Ok(0);
        }

        let mut updated_documents = 0;
        for report_file in reports {
            match Self::update_from_csv(cfg, calendar, &report_file, &latest.file_name) {
                Ok(outcome) => {
                    info(format!(
                        "Updated {report_file} ({} rows)",
                        outcome.updated
                    ));
                    updated_documents += 1;
                }
                Err(e) => error(format!("Failed to update {report_file}: {e}")),
            }
        }

        Ok(updated_documents)
    }
}
