use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::sync::SyncLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Reconcile one report document against one CSV file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update { file, csv } = cmd {
        let calendar = HolidayCalendar::load(Path::new(&cfg.holidays_file));
        let outcome = SyncLogic::update_from_csv(cfg, &calendar, file, csv)?;

        success(format!(
            "Update complete: {} rows updated, {} rows cleared",
            outcome.updated, outcome.cleared
        ));
    }

    Ok(())
}
