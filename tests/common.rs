#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwr() -> Command {
    cargo_bin_cmd!("rworkreport")
}

/// Create an isolated workspace in the system temp dir and return the
/// config file path plus the workspace root. The directory is wiped first.
pub fn setup_workspace(name: &str) -> (String, PathBuf) {
    let mut root: PathBuf = env::temp_dir();
    root.push(format!("{name}_rworkreport_it"));
    fs::remove_dir_all(&root).ok();
    fs::create_dir_all(&root).expect("create workspace");

    let config_path = root.join("rworkreport.conf").to_string_lossy().to_string();
    (config_path, root)
}

/// Initialize config, data directories and the template document.
pub fn init_workspace(config_path: &str) {
    rwr()
        .args(["--config", config_path, "init"])
        .assert()
        .success();
}

/// Create a June 2025 report plus CSV for the given user.
pub fn create_june_report(config_path: &str, user: &str) {
    rwr()
        .args([
            "--config",
            config_path,
            "create",
            "--month",
            "2025/06",
            "--user",
            user,
            "--client",
            "ACME",
        ])
        .assert()
        .success();
}

/// Overwrite the June 2025 work-data CSV with the given body (header
/// included by this helper).
pub fn write_june_csv(root: &PathBuf, body: &str) {
    let content = format!("date,start,end,break,note\n{body}");
    fs::write(root.join("csv/202506_work_data.csv"), content).expect("write csv");
}
