//! XLSX rendering of a report document.
//!
//! The JSON sheet store is the editable artifact; this module produces the
//! spreadsheet view that gets exported or zipped for sending.

use crate::errors::{AppError, AppResult};
use crate::sheet::{layout, SheetDocument};
use crate::ui::messages::{info, success};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Renders the document to `path` with a colored label row, bordered day
/// rows, and auto-sized columns.
pub fn render_xlsx(doc: &SheetDocument, path: &Path) -> AppResult<()> {
    info(format!("Rendering XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let label_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    let grid_format = Format::new().set_border(FormatBorder::Thin);
    let plain_format = Format::new();

    let mut col_widths: Vec<usize> = Vec::new();

    for (addr, value) in doc.value_cells() {
        let format = if addr.row + 1 == layout::BASE_ROW {
            &label_format
        } else if (layout::BASE_ROW..=layout::LAST_DAY_ROW).contains(&addr.row) {
            &grid_format
        } else {
            &plain_format
        };

        worksheet
            .write_with_format(addr.row, addr.col, value, format)
            .map_err(to_export_error)?;

        let col = addr.col as usize;
        if col_widths.len() <= col {
            col_widths.resize(col + 1, 0);
        }
        col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value));
    }

    for (col, width) in col_widths.iter().enumerate() {
        if *width > 0 {
            worksheet
                .set_column_width(col as u16, *width as f64 + 2.0)
                .map_err(to_export_error)?;
        }
    }

    let path_text = path
        .to_str()
        .ok_or_else(|| AppError::Export("invalid output path".to_string()))?;
    workbook.save(path_text).map_err(to_export_error)?;

    success(format!("XLSX rendered: {}", path.display()));
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn renders_template_to_file() {
        let mut path = env::temp_dir();
        path.push("render_template_rworkreport.xlsx");
        fs::remove_file(&path).ok();

        let doc = SheetDocument::month_template();
        render_xlsx(&doc, &path).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
        fs::remove_file(&path).ok();
    }
}
