use crate::error::CleanError;
use crate::record::CleanRecord;

use csv::WriterBuilder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write records as CSV under a `CleanRecord::FIELDS` header row.
///
/// Nothing is written for an empty slice, not even the header.
pub fn write_csv<W: Write>(records: &[CleanRecord], writer: W) -> Result<(), CleanError> {
    if records.is_empty() {
        return Ok(());
    }

    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(CleanRecord::FIELDS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write records as one compact JSON object per line.
pub fn write_jsonl<W: Write>(records: &[CleanRecord], mut writer: W) -> Result<(), CleanError> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_csv(records: &[CleanRecord], path: &Path) -> Result<(), CleanError> {
    let file = File::create(path)?;
    write_csv(records, BufWriter::new(file))
}

pub fn save_jsonl(records: &[CleanRecord], path: &Path) -> Result<(), CleanError> {
    let file = File::create(path)?;
    write_jsonl(records, BufWriter::new(file))
}
