use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::send::SendLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Package a report as a password-protected zip with the mail text.
pub fn handle(cmd: &Commands, cfg: &Config, config_path: Option<&Path>) -> AppResult<()> {
    if let Commands::Send { file } = cmd {
        let calendar = HolidayCalendar::load(Path::new(&cfg.holidays_file));

        let mut cfg = cfg.clone();
        let summary = SendLogic::send(&mut cfg, config_path, &calendar, file.as_deref())?;
        success(summary);
    }

    Ok(())
}
