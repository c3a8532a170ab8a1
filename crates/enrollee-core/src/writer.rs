//! CSV encoding and per-group output files

use crate::error::{Error, Result};
use crate::record::{Enrollee, COLUMNS};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Encode an enrollee as a comma-joined line in the [`COLUMNS`] order.
///
/// Field values are written as-is, with no quoting or escaping: a name
/// that itself contains a comma yields an ambiguous line. Known
/// limitation of the output format.
pub fn encode(e: &Enrollee) -> String {
    format!(
        "{},{},{},{},{}",
        e.user_id, e.first_name, e.last_name, e.version, e.insurance
    )
}

/// The header line matching [`encode`]'s field order
pub fn header_line() -> String {
    COLUMNS.join(",")
}

/// Write one group's records to `<out_dir>/<insurance>.csv`.
///
/// The file name is derived directly from the insurance value, with no
/// sanitization. The destination is opened once, fully written through a
/// buffered writer, and closed before returning. Returns the path that
/// was written.
pub fn write_group(
    out_dir: &Path,
    insurance: &str,
    records: &[Enrollee],
    write_header: bool,
) -> Result<PathBuf> {
    let path = out_dir.join(format!("{}.csv", insurance));
    let file = File::create(&path).map_err(|e| Error::FileWrite {
        path: path.clone(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, records, write_header).map_err(|e| Error::FileWrite {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}

/// Write the header and record lines to any sink
pub fn write_lines<W: Write>(
    writer: &mut W,
    records: &[Enrollee],
    write_header: bool,
) -> std::io::Result<()> {
    if write_header {
        writeln!(writer, "{}", header_line())?;
    }

    for record in records {
        writeln!(writer, "{}", encode(record))?;
    }

    writer.flush()
}
