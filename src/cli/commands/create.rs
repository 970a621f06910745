use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::create::CreateLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::ReportMonth;
use std::path::Path;

/// Create a report document and its editable CSV counterpart.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Create {
        month,
        user,
        client,
    } = cmd
    {
        if user.contains('_') {
            return Err(AppError::Validation(format!(
                "user name must not contain underscores: {user}"
            )));
        }

        let month = ReportMonth::parse(month)?;
        let calendar = HolidayCalendar::load(Path::new(&cfg.holidays_file));

        let report_name = CreateLogic::create_report(cfg, &calendar, month, user, client)?;
        let csv_name = CreateLogic::generate_csv(cfg, &calendar, month)?;

        success(format!(
            "Files created:\n- report: {report_name}\n- csv: {csv_name}"
        ));
    }

    Ok(())
}
