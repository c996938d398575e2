use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use super::{OutputContent, MASTER_HEADERS, RAW_HEADERS};
use crate::error::MatlistError;

pub const MASTER_SHEET: &str = "Master";
pub const RAW_SHEET: &str = "RawExtract";

/// Rows in one XLSX worksheet, header row included.
pub const XLSX_MAX_ROWS: usize = 1_048_576;

/// Fail with `TooManyRows` when `data_rows` plus the header row do not fit
/// on one worksheet.
pub fn check_row_limit(sheet: &str, data_rows: usize) -> Result<(), MatlistError> {
    let rows = data_rows.saturating_add(1);
    if rows > XLSX_MAX_ROWS {
        return Err(MatlistError::TooManyRows {
            sheet: sheet.to_string(),
            rows,
            limit: XLSX_MAX_ROWS,
        });
    }
    Ok(())
}

/// Row limits of every sheet `write_xlsx` would write.
pub fn check_content_fits(content: &OutputContent<'_>) -> Result<(), MatlistError> {
    check_row_limit(MASTER_SHEET, content.records.len())?;
    if let Some(items) = content.raw_items {
        check_row_limit(RAW_SHEET, items.len())?;
    }
    Ok(())
}

/// Write the consolidated list as an XLSX workbook.
///
/// Sheet `Master` holds one row per record. Sheet `RawExtract`, when
/// requested, lists every extracted item with its source document.
/// Callers check `check_content_fits` first; rows past the sheet limit
/// fail inside the xlsx writer.
pub fn write_xlsx(path: &Path, content: &OutputContent<'_>) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let master = workbook.add_worksheet();
    master.set_name(MASTER_SHEET)?;
    write_headers(master, &MASTER_HEADERS, &bold)?;
    for (i, record) in content.records.iter().enumerate() {
        let row = i as u32 + 1;
        master.write_number(row, 0, to_number(&record.total_quantity))?;
        master.write_string(row, 1, &record.units)?;
        master.write_string(row, 2, &record.size)?;
        master.write_string(row, 3, &record.description)?;
    }
    master.set_column_width(3, 60)?;

    if let Some(items) = content.raw_items {
        let raw = workbook.add_worksheet();
        raw.set_name(RAW_SHEET)?;
        write_headers(raw, &RAW_HEADERS, &bold)?;
        for (i, item) in items.iter().enumerate() {
            let row = i as u32 + 1;
            raw.write_string(row, 0, &item.source)?;
            raw.write_number(row, 1, to_number(&item.quantity))?;
            raw.write_string(row, 2, &item.units)?;
            raw.write_string(row, 3, &item.size)?;
            raw.write_string(row, 4, &item.description)?;
        }
        raw.set_column_width(0, 24)?;
        raw.set_column_width(4, 60)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str], bold: &Format) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, bold)?;
    }
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn to_number(quantity: &Decimal) -> f64 {
    quantity.to_f64().unwrap_or_default()
}
