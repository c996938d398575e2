pub mod delimited;
pub mod spreadsheet;

use std::path::Path;

use crate::error::MatlistError;
use crate::model::{AggregateRecord, LineItem, OutputFormat};

/// Column headers of the consolidated list.
pub const MASTER_HEADERS: [&str; 4] = ["Quantity", "Units", "Size", "Description"];

/// Column headers of the raw extract sheet.
pub const RAW_HEADERS: [&str; 5] = ["Source", "Quantity", "Units", "Size", "Description"];

/// What to write.
pub struct OutputContent<'a> {
    pub records: &'a [AggregateRecord],
    /// Every extracted item; `None` leaves the raw sheet out.
    pub raw_items: Option<&'a [LineItem]>,
}

/// Write the consolidated list to `path`, replacing any existing file.
///
/// The format follows the file extension. Missing parent directories are
/// created. An XLSX output with more rows than a sheet holds fails with
/// `TooManyRows` before anything is written.
pub fn write_output(
    path: &Path,
    content: &OutputContent<'_>,
) -> Result<OutputFormat, MatlistError> {
    let fail = |reason: String| MatlistError::OutputWriteFailure {
        path: path.to_path_buf(),
        reason,
    };

    let format = OutputFormat::from_path(path);
    if format == OutputFormat::Xlsx {
        spreadsheet::check_content_fits(content)?;
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| fail(e.to_string()))?;
    }

    log::debug!(
        "writing {} record(s) as {format} to {}",
        content.records.len(),
        path.display()
    );

    match format {
        OutputFormat::Csv => {
            delimited::write_csv(path, content.records).map_err(|e| fail(e.to_string()))?
        }
        OutputFormat::Xlsx => {
            spreadsheet::write_xlsx(path, content).map_err(|e| fail(e.to_string()))?
        }
    }

    Ok(format)
}

/// Quantity as written: trailing zeros dropped ("5.00" -> "5").
pub(crate) fn quantity_text(quantity: &rust_decimal::Decimal) -> String {
    quantity.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quantity_text() {
        assert_eq!(quantity_text(&dec!(5.00)), "5");
        assert_eq!(quantity_text(&dec!(2.50)), "2.5");
        assert_eq!(quantity_text(&dec!(1200)), "1200");
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where a directory is expected.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let path = blocker.join("out.csv");

        let content = OutputContent {
            records: &[],
            raw_items: None,
        };
        let err = write_output(&path, &content).unwrap_err();
        assert!(matches!(err, MatlistError::OutputWriteFailure { .. }));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("list.csv");
        let content = OutputContent {
            records: &[],
            raw_items: None,
        };
        assert_eq!(write_output(&path, &content).unwrap(), OutputFormat::Csv);
        assert!(path.exists());
    }
}
