//! Filename conventions linking CSV files and report documents to a
//! year-month.
//!
//! The conventions are a documented parser/formatter pair, not ad hoc string
//! splitting: reports are `{identity}_{yyyyMM}_work_report.json` (the
//! identity must not contain underscores) and CSV files are
//! `{yyyyMM}_work_data.csv`.

use crate::errors::{AppError, AppResult};
use crate::utils::date::ReportMonth;
use regex::Regex;
use std::fs;
use std::path::Path;

pub const REPORT_SUFFIX: &str = "work_report";
pub const REPORT_EXT: &str = ".json";
pub const CSV_SUFFIX: &str = "work_data";
pub const CSV_EXT: &str = ".csv";

pub fn report_file_name(identity: &str, month: ReportMonth) -> String {
    format!(
        "{identity}_{}_{REPORT_SUFFIX}{REPORT_EXT}",
        month.file_stamp()
    )
}

pub fn csv_file_name(month: ReportMonth) -> String {
    format!("{}_{CSV_SUFFIX}{CSV_EXT}", month.file_stamp())
}

/// Extracts the year-month from a report filename: the second
/// underscore-delimited segment, which must be exactly six digits.
pub fn month_from_report_name(file_name: &str) -> AppResult<ReportMonth> {
    let segment = file_name
        .split('_')
        .nth(1)
        .ok_or_else(|| AppError::InvalidMonth(file_name.to_string()))?;

    ReportMonth::from_file_stamp(segment)
        .map_err(|_| AppError::InvalidMonth(file_name.to_string()))
}

/// A discovered CSV file and the month its name embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFileInfo {
    pub file_name: String,
    pub month: ReportMonth,
}

/// Finds the CSV whose six-digit year-month stamp sorts highest. `None` when
/// the directory holds no conforming file.
pub fn find_latest_csv(csv_dir: &Path) -> AppResult<Option<CsvFileInfo>> {
    let pattern = Regex::new(&format!(r"^(\d{{6}})_{CSV_SUFFIX}\.csv$")).expect("static pattern");

    let mut latest: Option<CsvFileInfo> = None;

    for entry in fs::read_dir(csv_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        let Some(caps) = pattern.captures(&file_name) else {
            continue;
        };
        let Ok(month) = ReportMonth::from_file_stamp(&caps[1]) else {
            continue;
        };

        let candidate = CsvFileInfo { file_name, month };
        match &latest {
            Some(current) if current.month >= candidate.month => {}
            _ => latest = Some(candidate),
        }
    }

    Ok(latest)
}

/// All report documents whose filename embeds `month`, in directory order.
pub fn find_reports_for_month(output_dir: &Path, month: ReportMonth) -> AppResult<Vec<String>> {
    let pattern = Regex::new(&format!(
        r"^(.+)_{}_{REPORT_SUFFIX}\.json$",
        month.file_stamp()
    ))
    .expect("static pattern");

    let mut matches = Vec::new();

    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if pattern.is_match(&file_name) {
            matches.push(file_name);
        }
    }

    matches.sort();
    Ok(matches)
}
