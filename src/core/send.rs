//! The send flow: render a report to XLSX, zip it with a generated
//! password, and prepare the outbound mail text.

use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::core::naming;
use crate::errors::{AppError, AppResult};
use crate::sheet::xlsx::render_xlsx;
use crate::sheet::SheetDocument;
use crate::ui::messages::info;
use crate::utils::date::ReportMonth;
use chrono::NaiveDate;
use std::fs;
use std::io::{stdin, stdout, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{AesMode, CompressionMethod, ZipWriter};

const PASSWORD_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const PASSWORD_LEN: usize = 8;

/// Section separator inside the mail template file.
pub const TEMPLATE_DELIMITER: &str = "--------";

/// Template written on first use: subject, body, password body.
pub const DEFAULT_MAIL_TEMPLATE: &str = "\
Work report for ${yearMonth}
--------
Dear Sir or Madam,

Please find attached the work report for ${yearMonth}.
The archive password follows in a separate message.
We would appreciate your confirmation by ${deadline}.

Best regards
--------
The password for the attached archive is: ${password}
";

/// High-level logic for the `send` command.
pub struct SendLogic;

impl SendLogic {
    /// Packages a report for sending. With no explicit file, the report
    /// matching the latest CSV's month is used. Returns a human-readable
    /// summary of what was produced.
    pub fn send(
        cfg: &mut Config,
        config_path: Option<&Path>,
        calendar: &HolidayCalendar,
        file: Option<&str>,
    ) -> AppResult<String> {
        // The destination directory is prompted for once, then persisted.
        if cfg.send_dir.is_empty() {
            let dir = prompt_line("Destination directory for sent reports: ")?;
            if dir.is_empty() {
                return Err(AppError::RequiredField("send directory".to_string()));
            }
            cfg.send_dir = dir;
            cfg.save(config_path)?;
        }

        let file_name = match file {
            Some(name) => name.to_string(),
            None => Self::default_report(cfg)?,
        };
        let month = naming::month_from_report_name(&file_name)?;

        let work_dir = Path::new(&cfg.send_dir)
            .join("work")
            .join(format!("{:04}", month.year()))
            .join(month.file_stamp());
        fs::create_dir_all(&work_dir)?;

        // Render the spreadsheet view that actually gets sent.
        let doc = SheetDocument::open(&Path::new(&cfg.output_dir).join(&file_name))?;
        let stem = file_name
            .strip_suffix(naming::REPORT_EXT)
            .unwrap_or(&file_name);
        let xlsx_path = work_dir.join(format!("{stem}.xlsx"));
        render_xlsx(&doc, &xlsx_path)?;

        let password = generate_password()?;
        let zip_path = work_dir.join(format!("{stem}.zip"));
        zip_with_password(&xlsx_path, &zip_path, &password)?;

        let password_path = work_dir.join("password.txt");
        fs::write(&password_path, &password)?;

        let mail_path = Self::write_mail_content(cfg, calendar, month, &password, &work_dir)?;

        info(format!("Report packaged under {}", work_dir.display()));
        Ok(format!(
            "Report sent:\n- source: {file_name}\n- zip: {}\n- password file: {}\n- mail text: {}",
            zip_path.display(),
            password_path.display(),
            mail_path.display()
        ))
    }

    /// The first report document matching the latest CSV's year-month.
    fn default_report(cfg: &Config) -> AppResult<String> {
        let latest = naming::find_latest_csv(Path::new(&cfg.csv_dir))?
            .ok_or_else(|| AppError::Send("no work-data CSV files found".to_string()))?;

        naming::find_reports_for_month(Path::new(&cfg.output_dir), latest.month)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::Send(format!("no report documents found for {}", latest.month))
            })
    }

    /// Renders the three-section mail template into `mail_content.txt`.
    fn write_mail_content(
        cfg: &Config,
        calendar: &HolidayCalendar,
        month: ReportMonth,
        password: &str,
        work_dir: &Path,
    ) -> AppResult<PathBuf> {
        let template = Self::read_mail_template(cfg)?;
        let sections: Vec<&str> = template.split(TEMPLATE_DELIMITER).collect();
        if sections.len() < 3 {
            return Err(AppError::Send(
                "mail template needs 3 sections: subject, body, password body".to_string(),
            ));
        }

        let year_month = month.to_string();
        let deadline = second_business_day_of(calendar, month.next())
            .format("%Y/%m/%d (%a)")
            .to_string();

        let subject = sections[0].trim().replace("${yearMonth}", &year_month);
        let body = sections[1]
            .trim()
            .replace("${yearMonth}", &year_month)
            .replace("${deadline}", &deadline);
        let password_body = sections[2].trim().replace("${password}", password);

        let combined = format!(
            "{subject}\n{TEMPLATE_DELIMITER}\n{body}\n{TEMPLATE_DELIMITER}\n{password_body}\n"
        );

        let mail_path = work_dir.join("mail_content.txt");
        fs::write(&mail_path, combined)?;
        Ok(mail_path)
    }

    /// Reads the configured mail template, writing the default one first if
    /// the file does not exist yet.
    fn read_mail_template(cfg: &Config) -> AppResult<String> {
        let path = Path::new(&cfg.mail_template_file);
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_MAIL_TEMPLATE)?;
            info(format!("Default mail template created: {}", path.display()));
        }
        Ok(fs::read_to_string(path)?)
    }
}

/// The second workday of `month`, used as the confirmation deadline in the
/// mail body.
pub fn second_business_day_of(calendar: &HolidayCalendar, month: ReportMonth) -> NaiveDate {
    let mut date = month.first_day();
    let mut seen = 0;
    loop {
        if calendar.is_workday(date) {
            seen += 1;
            if seen == 2 {
                return date;
            }
        }
        date = date.succ_opt().expect("dates stay far from the calendar bounds");
    }
}

fn generate_password() -> AppResult<String> {
    let mut buf = [0u8; PASSWORD_LEN];
    getrandom::fill(&mut buf)
        .map_err(|e| AppError::Send(format!("cannot generate password: {e}")))?;

    Ok(buf
        .iter()
        .map(|b| PASSWORD_CHARS[*b as usize % PASSWORD_CHARS.len()] as char)
        .collect())
}

/// Compresses `src` into an AES-encrypted zip at `zip_path`.
fn zip_with_password(src: &Path, zip_path: &Path, password: &str) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .with_aes_encryption(AesMode::Aes256, password);

    let entry_name = src
        .file_name()
        .ok_or_else(|| AppError::Send(format!("invalid source path: {}", src.display())))?
        .to_string_lossy()
        .to_string();

    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;
    let mut reader = fs::File::open(src)?;
    std::io::copy(&mut reader, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}

fn prompt_line(text: &str) -> AppResult<String> {
    print!("{text}");
    stdout().flush()?;

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
