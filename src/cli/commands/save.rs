use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::sync::SyncLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Apply the latest CSV to every report document of its month.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let calendar = HolidayCalendar::load(Path::new(&cfg.holidays_file));
    let updated = SyncLogic::sync_latest(cfg, &calendar)?;

    if updated > 0 {
        success(format!("Save complete: {updated} documents updated"));
    } else {
        info("Nothing to update");
    }

    Ok(())
}
