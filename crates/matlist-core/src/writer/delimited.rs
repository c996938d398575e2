use std::path::Path;

use csv::WriterBuilder;

use super::{quantity_text, MASTER_HEADERS};
use crate::model::AggregateRecord;

/// Write the consolidated list as CSV, headers first.
pub fn write_csv(path: &Path, records: &[AggregateRecord]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(MASTER_HEADERS)?;
    for record in records {
        writer.write_record([
            quantity_text(&record.total_quantity).as_str(),
            record.units.as_str(),
            record.size.as_str(),
            record.description.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
