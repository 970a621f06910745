//! Flat record codec: work-record CSV files and the holiday CSV.
//!
//! Reading is lenient per line: a malformed line becomes a
//! [`LineOutcome::Skipped`] with a reason instead of aborting the whole
//! file. Callers decide whether zero valid records is itself an error.

use crate::errors::{AppError, AppResult};
use crate::models::{Holiday, WorkRecord};
use crate::ui::messages::warning;
use crate::utils::date::{format_csv_date, parse_csv_date};
use std::path::Path;

pub const RECORD_HEADER: [&str; 5] = ["date", "start", "end", "break", "note"];

/// Outcome of decoding one CSV line.
#[derive(Debug)]
pub enum LineOutcome {
    Record(WorkRecord),
    Skipped { line: u64, reason: String },
}

/// Reads a work-record CSV: a header line, then
/// `date,start,end,break,note` with `YYYY/M/D` dates.
///
/// Per-line failures are recovered; only a file-level read failure is an
/// error.
pub fn read_work_records(path: &Path) -> AppResult<Vec<LineOutcome>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut outcomes = Vec::new();

    for result in reader.records() {
        // Record-level failures (e.g. an invalid-UTF-8 line) are skipped
        // like any other bad line; only opening the file is fatal.
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                let reason = e.to_string();
                warning(format!(
                    "Skipping CSV line {line} in {}: {reason}",
                    path.display()
                ));
                outcomes.push(LineOutcome::Skipped { line, reason });
                continue;
            }
        };
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let outcome = match decode_record(&row) {
            Ok(record) => LineOutcome::Record(record),
            Err(reason) => {
                warning(format!(
                    "Skipping CSV line {line} in {}: {reason}",
                    path.display()
                ));
                LineOutcome::Skipped { line, reason }
            }
        };
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn decode_record(row: &csv::StringRecord) -> Result<WorkRecord, String> {
    if row.len() < 5 {
        let missing = RECORD_HEADER[row.len()];
        return Err(AppError::RequiredField(missing.to_string()).to_string());
    }

    let date = parse_csv_date(row[0].trim()).map_err(|e| e.to_string())?;

    WorkRecord::of(
        date,
        row[1].trim(),
        row[2].trim(),
        row[3].trim(),
        row[4].trim(),
    )
    .map_err(|e| e.to_string())
}

/// Just the successfully decoded records, in file order.
pub fn valid_records(outcomes: Vec<LineOutcome>) -> Vec<WorkRecord> {
    outcomes
        .into_iter()
        .filter_map(|o| match o {
            LineOutcome::Record(r) => Some(r),
            LineOutcome::Skipped { .. } => None,
        })
        .collect()
}

/// Writes the fixed header plus one line per record with canonical field
/// formatting. An existing file is overwritten.
pub fn write_work_records(records: &[WorkRecord], path: &Path) -> AppResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(RECORD_HEADER)?;

    for record in records {
        writer.write_record(&[
            format_csv_date(record.date()),
            record.start_text(),
            record.end_text(),
            record.break_text(),
            record.note().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads the holiday CSV (`date,name` after a header line). Lines with an
/// unparsable date or a missing name are skipped with a warning; holiday
/// source quality varies and one bad row should not lose the rest.
pub fn read_holidays(path: &Path) -> AppResult<Vec<Holiday>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut holidays = Vec::new();

    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() < 2 {
            warning(format!(
                "Skipping holiday line {line} in {}: expected 2 fields",
                path.display()
            ));
            continue;
        }

        match parse_csv_date(row[0].trim()) {
            Ok(date) => holidays.push(Holiday::new(date, row[1].trim())),
            Err(e) => warning(format!(
                "Skipping holiday line {line} in {}: {e}",
                path.display()
            )),
        }
    }

    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_csv(name: &str, content: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{name}_rworkreport.csv"));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn read_skips_header_and_decodes_rows() {
        let path = temp_csv(
            "codec_read",
            "date,start,end,break,note\n2025/6/2,9:30,17:45,1:00,design\n",
        );

        let records = valid_records(read_work_records(&path).unwrap());
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].date(),
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
        );
        assert_eq!(records[0].note(), "design");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn bad_line_is_skipped_and_rest_is_kept() {
        let path = temp_csv(
            "codec_bad_line",
            "date,start,end,break,note\n\
             invalid,9:30,17:45,1:00,x\n\
             2025/6/3,10:00,18:30,1:00,implementation\n",
        );

        let outcomes = read_work_records(&path).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], LineOutcome::Skipped { .. }));

        let records = valid_records(outcomes);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].note(), "implementation");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn short_line_is_skipped_with_the_missing_field_named() {
        let path = temp_csv(
            "codec_short_line",
            "date,start,end,break,note\n2025/6/2,9:30\n",
        );

        let outcomes = read_work_records(&path).unwrap();
        match &outcomes[0] {
            LineOutcome::Skipped { reason, .. } => {
                assert!(reason.contains("Missing required field: end"), "{reason}");
            }
            LineOutcome::Record(_) => panic!("short line must be skipped"),
        }
        fs::remove_file(&path).ok();
    }

    #[test]
    fn invalid_utf8_line_is_skipped_and_rest_is_kept() {
        let mut path = env::temp_dir();
        path.push("codec_bad_utf8_rworkreport.csv");
        fs::write(
            &path,
            b"date,start,end,break,note\n\
              2025/6/2,9:30,17:45,1:00,\xff\xfe\n\
              2025/6/3,10:00,18:30,1:00,implementation\n" as &[u8],
        )
        .unwrap();

        let outcomes = read_work_records(&path).unwrap();
        assert!(outcomes
            .iter()
            .any(|o| matches!(o, LineOutcome::Skipped { .. })));

        let records = valid_records(outcomes);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].note(), "implementation");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn write_then_read_round_trip() {
        let record = WorkRecord::of(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            "9:00",
            "18:00",
            "1:00",
            "design",
        )
        .unwrap();

        let mut path = env::temp_dir();
        path.push("codec_round_trip_rworkreport.csv");
        write_work_records(&[record.clone()], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("date,start,end,break,note"));
        assert!(content.contains("2025/6/2,09:00,18:00,1:00,design"));

        let read_back = valid_records(read_work_records(&path).unwrap());
        assert_eq!(read_back, vec![record]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn holiday_reader_skips_bad_dates() {
        let path = temp_csv(
            "codec_holidays",
            "date,name\n2025/1/1,New Year's Day\nnot-a-date,Broken\n2025/5/5,Children's Day\n",
        );

        let holidays = read_holidays(&path).unwrap();
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].name, "New Year's Day");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(read_work_records(Path::new("/nonexistent/in.csv")).is_err());
        assert!(read_holidays(Path::new("/nonexistent/holidays.csv")).is_err());
    }
}
