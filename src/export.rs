//! CSV output surface.
//!
//! The `csv` crate handles field quoting and quote doubling; this module
//! only decides field order (matching [`ExportRow::HEADERS`]) and the
//! destination. Headers are always written, even for an empty row set.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use mediasweep_recon::ExportRow;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write the export rows to the given file, or to stdout.
pub fn write_rows(rows: &[ExportRow], target: Option<&Path>) -> Result<()> {
    match target {
        Some(path) => {
            let writer = csv::Writer::from_path(path).or_raise(|| ErrorKind::Export)?;
            write_into(rows, writer)?;
            info!(rows = rows.len(), path = %path.display(), "wrote CSV export");
        },
        None => {
            write_into(rows, csv::Writer::from_writer(std::io::stdout().lock()))?;
        },
    }
    Ok(())
}

fn write_into<W: Write>(rows: &[ExportRow], mut writer: csv::Writer<W>) -> Result<()> {
    writer.write_record(ExportRow::HEADERS).or_raise(|| ErrorKind::Export)?;
    for row in rows {
        let size_bytes = row.size_bytes.to_string();
        writer
            .write_record([
                row.key.as_str(),
                row.filename.as_str(),
                row.extension.as_str(),
                row.category.as_str(),
                row.role.as_str(),
                size_bytes.as_str(),
                row.human_size.as_str(),
                row.last_modified.as_str(),
                row.storage_class.as_str(),
                row.etag.as_str(),
            ])
            .or_raise(|| ErrorKind::Export)?;
    }
    writer.flush().or_raise(|| ErrorKind::Export)
}
