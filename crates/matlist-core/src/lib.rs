pub mod aggregate;
pub mod error;
pub mod extraction;
pub mod loader;
pub mod model;
pub mod parsing;
pub mod writer;

use std::path::{Path, PathBuf};

use aggregate::Aggregator;
use error::MatlistError;
use extraction::PdfExtractor;
use model::{LineItem, OutputFormat};
use parsing::{RowOutcome, SkippedRow};
use serde::Serialize;
use writer::OutputContent;

pub const DEFAULT_INPUT_DIR: &str = "input_pdfs";
pub const DEFAULT_OUTPUT_PATH: &str = "output/Master_Material_List.xlsx";

/// Settings for one consolidation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    /// Add the `RawExtract` sheet listing every item (XLSX only).
    pub include_raw_sheet: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            include_raw_sheet: true,
        }
    }
}

/// A file that was found but could not be read.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub reason: String,
}

/// What a run did, for the end-of-run report.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub documents_read: usize,
    pub documents_skipped: Vec<SkippedDocument>,
    pub items_extracted: usize,
    pub rows_skipped: Vec<SkippedRow>,
    pub records_written: usize,
    pub output_path: PathBuf,
    pub output_format: OutputFormat,
}

/// Result of parsing a single document in isolation.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedDocument {
    pub name: String,
    pub items: Vec<LineItem>,
    pub skipped_rows: Vec<SkippedRow>,
}

/// Main API entry point: consolidate every PDF in the input directory into
/// one material list.
///
/// Unreadable files and malformed rows are skipped, logged and counted, as
/// are items whose quantity would overflow their record's total.
/// Only a missing input directory or an unwritable output abort the run.
/// An input directory without PDFs still produces a headers-only output.
pub fn run(config: &RunConfig, extractor: &dyn PdfExtractor) -> Result<RunSummary, MatlistError> {
    let paths = loader::discover_documents(&config.input_dir)?;
    if paths.is_empty() {
        log::warn!("no PDF files found in {}", config.input_dir.display());
    }
    log::info!(
        "found {} PDF file(s) in {} (backend: {})",
        paths.len(),
        config.input_dir.display(),
        extractor.backend_name()
    );

    let mut aggregator = Aggregator::new();
    let mut raw_items: Vec<LineItem> = Vec::new();
    let mut documents_read = 0;
    let mut documents_skipped = Vec::new();
    let mut items_extracted = 0;
    let mut rows_skipped = Vec::new();

    for (path, loaded) in loader::load_documents(&paths, extractor) {
        let document = match loaded {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("skipping {}: {e}", path.display());
                documents_skipped.push(SkippedDocument {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        documents_read += 1;

        let mut document_items = 0;
        for page in &document.pages {
            for outcome in parsing::parse_page(&document.name, page) {
                let item = match outcome {
                    RowOutcome::Item(item) => item,
                    RowOutcome::Skipped(row) => {
                        warn_skipped(&row);
                        rows_skipped.push(row);
                        continue;
                    }
                };

                if let Err(e) = aggregator.add(&item) {
                    let row = SkippedRow {
                        source: item.source.clone(),
                        page_number: page.page_number,
                        line_text: format!(
                            "{} {} {} {}",
                            item.quantity, item.units, item.size, item.description
                        ),
                        reason: e.to_string(),
                    };
                    warn_skipped(&row);
                    rows_skipped.push(row);
                    continue;
                }
                document_items += 1;
                if config.include_raw_sheet {
                    raw_items.push(item);
                }
            }
        }
        log::info!(
            "read {} ({} page(s), {} item(s))",
            path.display(),
            document.pages.len(),
            document_items
        );
        items_extracted += document_items;
    }

    let records = aggregator.finish();
    let content = OutputContent {
        records: &records,
        raw_items: config.include_raw_sheet.then_some(raw_items.as_slice()),
    };
    let output_format = writer::write_output(&config.output_path, &content)?;
    log::info!(
        "wrote {} record(s) to {}",
        records.len(),
        config.output_path.display()
    );

    Ok(RunSummary {
        documents_read,
        documents_skipped,
        items_extracted,
        rows_skipped,
        records_written: records.len(),
        output_path: config.output_path.clone(),
        output_format,
    })
}

fn warn_skipped(row: &SkippedRow) {
    log::warn!(
        "{} page {}: skipped row '{}': {}",
        row.source,
        row.page_number,
        row.line_text,
        row.reason
    );
}

/// Read one PDF and return its line items without aggregating.
pub fn parse_pdf(path: &Path, extractor: &dyn PdfExtractor) -> Result<ParsedDocument, MatlistError> {
    let document = loader::load_document(path, extractor)?;

    let mut items = Vec::new();
    let mut skipped_rows = Vec::new();
    for outcome in parsing::line_items(&document.name, &document.pages) {
        match outcome {
            RowOutcome::Item(item) => items.push(item),
            RowOutcome::Skipped(row) => skipped_rows.push(row),
        }
    }

    Ok(ParsedDocument {
        name: document.name,
        items,
        skipped_rows,
    })
}
