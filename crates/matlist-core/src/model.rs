use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// One row extracted from a source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub quantity: Decimal,
    pub units: String,
    pub size: String,
    pub description: String,
    /// File stem of the document the row came from.
    pub source: String,
}

/// Normalized (units, size, description) triple that decides which
/// line items merge into one output row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AggregateKey {
    pub units: String,
    pub size: String,
    pub description: String,
}

impl fmt::Display for AggregateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.units, self.size, self.description)
    }
}

/// Summed result for one key. Written as one output row.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateRecord {
    pub key: AggregateKey,
    /// Units, size and description as first seen (normalized, original case).
    pub units: String,
    pub size: String,
    pub description: String,
    pub total_quantity: Decimal,
    /// Number of line items folded into this record.
    pub source_count: usize,
    /// Distinct source documents, first-seen order.
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    /// `.csv` selects CSV, everything else is written as XLSX.
    pub fn from_path(path: &std::path::Path) -> OutputFormat {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => OutputFormat::Csv,
            _ => OutputFormat::Xlsx,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Xlsx => write!(f, "xlsx"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_output_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("out/list.csv")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("out/list.CSV")), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path(Path::new("out/list.xlsx")), OutputFormat::Xlsx);
        assert_eq!(OutputFormat::from_path(Path::new("out/list")), OutputFormat::Xlsx);
    }

    #[test]
    fn test_key_display() {
        let key = AggregateKey {
            units: "ea".into(),
            size: "10mm".into(),
            description: "bolt".into(),
        };
        assert_eq!(key.to_string(), "ea | 10mm | bolt");
    }
}
