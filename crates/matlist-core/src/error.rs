use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MatlistError {
    #[error("input directory not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("could not read {}: {reason}", path.display())]
    DocumentUnreadable { path: PathBuf, reason: String },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("total quantity for '{key}' exceeds the representable range")]
    QuantityOverflow { key: String },

    #[error("sheet '{sheet}' needs {rows} rows, more than the {limit} an XLSX sheet holds; write a .csv output instead")]
    TooManyRows {
        sheet: String,
        rows: usize,
        limit: usize,
    },

    #[error("failed to write output to {}: {reason}", path.display())]
    OutputWriteFailure { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
