//! Report and CSV creation for a target month.

use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::naming;
use crate::csvio;
use crate::errors::{AppError, AppResult};
use crate::models::WorkRecord;
use crate::sheet::store::copy_template;
use crate::sheet::{layout, row_for_date, CellAddress, Document, SheetDocument};
use crate::ui::messages::{info, warning};
use crate::utils::date::ReportMonth;
use std::path::Path;

/// High-level logic for the `create` and `gencsv` commands.
pub struct CreateLogic;

impl CreateLogic {
    /// Creates a new report document from the template: stamps the month and
    /// identity cells, then fills every workday row with the configured
    /// default times. Returns the created filename.
    pub fn create_report(
        cfg: &Config,
        calendar: &HolidayCalendar,
        month: ReportMonth,
        user: &str,
        client: &str,
    ) -> AppResult<String> {
        let file_name = naming::report_file_name(user, month);
        let output_path = Path::new(&cfg.output_dir).join(&file_name);

        copy_template(Path::new(&cfg.template_file), &output_path)?;

        let mut doc = SheetDocument::open(&output_path)?;

        doc.set_cell(CellAddress::parse(layout::MONTH_CELL)?, &month.to_string());
        doc.set_cell(CellAddress::parse(layout::CLIENT_CELL)?, client);
        doc.set_cell(CellAddress::parse(layout::USER_CELL)?, user);

        for record in Self::default_records(cfg, calendar, month)? {
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
                }
                None => warning(format!("No document row for {}", record.date())),
            }
        }

        doc.recompute();
        doc.save(&output_path)?;

        info(format!("Report created: {file_name}"));
        Ok(file_name)
    }

    /// Writes the editable CSV counterpart: one default record per workday
    /// of the month. Returns the created filename.
    pub fn generate_csv(
        cfg: &Config,
        calendar: &HolidayCalendar,
        month: ReportMonth,
    ) -> AppResult<String> {
        let file_name = naming::csv_file_name(month);
        let csv_path = Path::new(&cfg.csv_dir).join(&file_name);

        let records = Self::default_records(cfg, calendar, month)?;
        csvio::write_work_records(&records, &csv_path)?;

        info(format!("CSV created: {file_name}"));
        Ok(file_name)
    }

    /// One default record per workday, built through the validating factory
    /// so misconfigured default times fail loudly instead of writing a
    /// broken month.
    fn default_records(
        cfg: &Config,
        calendar: &HolidayCalendar,
        month: ReportMonth,
    ) -> AppResult<Vec<WorkRecord>> {
        calendar
            .workdays_of_month(month)
            .into_iter()
            .map(|date| {
                WorkRecord::of(
                    date,
                    &cfg.default_start,
                    &cfg.default_end,
                    &cfg.default_break,
                    "",
                )
                .map_err(|e| AppError::Config(format!("invalid default work times: {e}")))
            })
            .collect()
    }
}
