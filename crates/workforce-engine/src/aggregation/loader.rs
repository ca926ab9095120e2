//! CSV ingestion for raw population records.
//!
//! Row-tolerant: rows that fail to deserialize are skipped and counted,
//! file-level failures (I/O, headers) surface as DataError. Headers are
//! lowercased and trimmed before matching so `Tahun` and `tahun` both bind.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::warn;

use workforce_core::errors::DataError;
use workforce_core::types::RawRecord;

/// Load raw records from a CSV file.
pub fn load_csv(path: &Path) -> Result<Vec<RawRecord>, DataError> {
    let file = File::open(path).map_err(|source| DataError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    load_csv_reader(file).map_err(|e| DataError::CsvError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load raw records from any CSV reader.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<Vec<RawRecord>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    // Normalize headers the way the cleaning step normalizes values.
    let headers: StringRecord = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    rdr.set_headers(headers);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in rdr.deserialize::<RawRecord>() {
        match row {
            Ok(record) => records.push(record),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "skipped undeserializable CSV rows");
    }
    Ok(records)
}
