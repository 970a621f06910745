//! Application configuration: a YAML file in the platform config directory.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Template document copied for every new report.
    pub template_file: String,
    /// Directory holding generated report documents.
    pub output_dir: String,
    /// Directory holding the editable work-record CSV files.
    pub csv_dir: String,
    /// Holiday data CSV (date,name).
    pub holidays_file: String,
    /// Three-section mail template used by the send flow.
    pub mail_template_file: String,
    /// Destination directory for zipped reports; empty until set.
    #[serde(default)]
    pub send_dir: String,
    #[serde(default = "default_start")]
    pub default_start: String,
    #[serde(default = "default_end")]
    pub default_end: String,
    #[serde(default = "default_break")]
    pub default_break: String,
}

fn default_start() -> String {
    "09:00".to_string()
}
fn default_end() -> String {
    "18:00".to_string()
}
fn default_break() -> String {
    "1:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::default_rooted(&Self::config_dir())
    }
}

impl Config {
    /// Standard configuration directory, depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rworkreport")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rworkreport")
        }
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkreport.conf")
    }

    /// A default configuration whose data files all live under `root`.
    pub fn default_rooted(root: &Path) -> Self {
        Self {
            template_file: root
                .join("templates/work_report_template.json")
                .display()
                .to_string(),
            output_dir: root.join("output").display().to_string(),
            csv_dir: root.join("csv").display().to_string(),
            holidays_file: root.join("holidays.csv").display().to_string(),
            mail_template_file: root.join("mail/mail_template.txt").display().to_string(),
            send_dir: String::new(),
            default_start: default_start(),
            default_end: default_end(),
            default_break: default_break(),
        }
    }

    /// Loads the configuration from `path` (or the standard location). When
    /// no file exists, falls back to defaults rooted next to the missing
    /// file so an overridden location stays self-contained.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(Self::config_dir);
            return Ok(Self::default_rooted(&root));
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Writes the configuration to `path` (or the standard location).
    pub fn save(&self, path: Option<&Path>) -> AppResult<()> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        fs::write(&path, yaml)?;
        Ok(())
    }

    /// Creates the data directories this configuration points at.
    pub fn create_data_dirs(&self) -> AppResult<()> {
        fs::create_dir_all(&self.output_dir)?;
        fs::create_dir_all(&self.csv_dir)?;
        if let Some(parent) = Path::new(&self.template_file).parent() {
            fs::create_dir_all(parent)?;
        }
        if let Some(parent) = Path::new(&self.mail_template_file).parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}
