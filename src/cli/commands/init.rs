use crate::config::Config;
use crate::core::send::DEFAULT_MAIL_TEMPLATE;
use crate::errors::AppResult;
use crate::sheet::SheetDocument;
use crate::ui::messages::{info, success};
use std::fs;
use std::path::Path;

/// Initialize the configuration, data directories, template document,
/// holiday file and mail template. Existing files are left untouched.
pub fn handle(config_path: Option<&Path>) -> AppResult<()> {
    let cfg = Config::load(config_path)?;
    cfg.save(config_path)?;
    cfg.create_data_dirs()?;

    let template_path = Path::new(&cfg.template_file);
    if template_path.exists() {
        info(format!("Template already present: {}", template_path.display()));
    } else {
        SheetDocument::month_template().save(template_path)?;
        success(format!("Template created: {}", template_path.display()));
    }

    let holidays_path = Path::new(&cfg.holidays_file);
    if !holidays_path.exists() {
        fs::write(holidays_path, "date,name\n")?;
        success(format!("Holiday file created: {}", holidays_path.display()));
    }

    let mail_path = Path::new(&cfg.mail_template_file);
    if !mail_path.exists() {
        fs::write(mail_path, DEFAULT_MAIL_TEMPLATE)?;
        success(format!("Mail template created: {}", mail_path.display()));
    }

    success("Initialization complete");
    Ok(())
}
