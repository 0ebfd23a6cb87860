//! CSV loading

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::air::record::Record;
use crate::errors::{RecordError, Result};

/// Read a header-bearing CSV file into records, one per data row
pub fn read_csv(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RecordError::FileNotFound {
            attempts: vec![path.to_path_buf()],
        },
        _ => RecordError::Io(e),
    })?;

    let records = read_records(file)?;
    log::info!("Read {} row(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Parse CSV text from any reader.
///
/// Short rows simply lack their trailing columns; cells beyond the header
/// width are dropped.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let record: Record = headers.iter().zip(row.iter()).collect();
        records.push(record);
    }

    Ok(records)
}
