use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX export with a styled header row and fitted column widths.
pub(crate) fn export_xlsx(headers: &[&str], rows: &[Vec<String>], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x4F81BD))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let row_idx = (r + 1) as u32;
            let col_idx = c as u16;

            // Numeric cells (IDs, hours) are written as numbers.
            if let Ok(n) = cell.parse::<f64>() {
                worksheet
                    .write_number(row_idx, col_idx, n)
                    .map_err(to_export_error)?;
            } else {
                worksheet
                    .write_string(row_idx, col_idx, cell)
                    .map_err(to_export_error)?;
            }
        }
    }

    for (c, header) in headers.iter().enumerate() {
        let mut width = header.width();
        for row in rows {
            if let Some(cell) = row.get(c) {
                width = width.max(cell.width());
            }
        }
        worksheet
            .set_column_width(c as u16, (width + 2) as f64)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;
    notify_export_success("XLSX", path);
    Ok(())
}

fn to_export_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::Export(e.to_string())
}
