//! CSV reader for enrollee input files

use crate::error::{Error, Result};
use crate::record::{Enrollee, COLUMNS};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read an enrollee CSV file into memory.
///
/// When `has_header` is true the first row is skipped. The full decoded
/// collection is returned only once the source is exhausted. Every data
/// row must carry at least 5 fields; a shorter row aborts the read with
/// [`Error::MalformedRow`] rather than producing a corrupted record.
pub fn read_enrollees<P: AsRef<Path>>(path: P, has_header: bool) -> Result<Vec<Enrollee>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true) // Allow varying number of fields
        .from_reader(BufReader::new(file));

    decode_records(reader, path)
}

/// Read enrollees from a string (useful for testing)
pub fn read_enrollees_str(content: &str, source_name: &str, has_header: bool) -> Result<Vec<Enrollee>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(content.as_bytes());

    decode_records(reader, Path::new(source_name))
}

fn decode_records<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Vec<Enrollee>> {
    let mut enrollees = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        if record.len() < COLUMNS.len() {
            return Err(Error::MalformedRow {
                path: path.to_path_buf(),
                row: row_idx + 1,
                fields: record.len(),
            });
        }

        let fields: Vec<&str> = record.iter().collect();
        enrollees.push(Enrollee::from_fields(&fields));
    }

    Ok(enrollees)
}
