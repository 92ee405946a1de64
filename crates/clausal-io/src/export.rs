//! Alignment matrix export.
//!
//! Serialises the fixed 6-column schema declared in `clausal-core`.
//! The header row is written even for an empty result set, so
//! downstream consumers always see the declared columns. Presentation
//! styling (gap-row highlighting etc.) is a spreadsheet concern and
//! does not belong here.

use std::io::Write;

use clausal_core::{AlignmentRow, COLUMNS};

use crate::error::IoError;

/// Write rows as CSV with the fixed header.
pub fn write_csv<W: Write>(rows: &[AlignmentRow], writer: W) -> Result<(), IoError> {
    let mut csv = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(COLUMNS)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(rows: &[AlignmentRow], mut writer: W) -> Result<(), IoError> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.write_all(b"\n")?;
    Ok(())
}
