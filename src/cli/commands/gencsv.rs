use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::create::CreateLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::ReportMonth;
use std::path::Path;

/// Regenerate the editable CSV for a month with default times.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Gencsv { month } = cmd {
        let month = ReportMonth::parse(month)?;
        let calendar = HolidayCalendar::load(Path::new(&cfg.holidays_file));

        let csv_name = CreateLogic::generate_csv(cfg, &calendar, month)?;
        success(format!("CSV created: {csv_name}"));
    }

    Ok(())
}
