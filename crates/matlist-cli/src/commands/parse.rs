use matlist_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(pdf_file: PathBuf, output_format: &str) -> Result<(), matlist_core::error::MatlistError> {
    let extractor = PdftotextExtractor::new();
    let parsed = matlist_core::parse_pdf(&pdf_file, &extractor)?;

    match output_format {
        "json" => output::json::print(&parsed)?,
        _ => println!("{}", output::table::format_parsed(&parsed)),
    }

    if !parsed.skipped_rows.is_empty() {
        eprintln!("  {} row(s) skipped during parsing", parsed.skipped_rows.len());
    }

    Ok(())
}
