use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, config_path: Option<&Path>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        set_send_dir,
    } = cmd
    {
        if *path {
            let shown = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(Config::config_file);
            println!("{}", shown.display());
        }

        if let Some(dir) = set_send_dir {
            let mut updated = cfg.clone();
            updated.send_dir = dir.clone();
            updated.save(config_path)?;
            success(format!("Send directory set to {dir}"));
        }

        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
