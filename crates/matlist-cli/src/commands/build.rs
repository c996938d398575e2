use matlist_core::extraction::pdftotext::PdftotextExtractor;
use matlist_core::RunConfig;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_dir: PathBuf,
    output_path: PathBuf,
    include_raw_sheet: bool,
) -> Result<(), matlist_core::error::MatlistError> {
    if !PdftotextExtractor::is_available() {
        log::warn!("pdftotext was not found on PATH; every PDF will be skipped");
    }

    let config = RunConfig {
        input_dir,
        output_path,
        include_raw_sheet,
    };
    let extractor = PdftotextExtractor::new();
    let summary = matlist_core::run(&config, &extractor)?;

    output::table::print_summary(&summary);
    Ok(())
}
