//! Document text extraction.
//!
//! The comparison core consumes plain extracted text; this boundary
//! validates size and format before any bytes reach segmentation.
//! Binary formats (PDF, DOCX) are not decoded here — they surface as
//! `UnsupportedFormat` like any other unrecognised extension.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::IoError;

/// Size ceiling enforced before reading: 50 MiB.
pub const MAX_DOCUMENT_BYTES: u64 = 50 * 1024 * 1024;

const TEXT_EXTENSIONS: [&str; 3] = ["txt", "text", "md"];

/// Read a document's text, enforcing the size ceiling and format check.
///
/// The size check runs against file metadata before the file contents
/// are read. Text is decoded as UTF-8 with invalid sequences replaced,
/// matching the tolerant decoding used for scraped legal sources.
pub fn read_document(path: &Path) -> Result<String, IoError> {
    check_size(fs::metadata(path)?.len())?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !TEXT_EXTENSIONS.contains(&extension.as_str()) {
        return Err(IoError::UnsupportedFormat(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read document");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reject inputs over the ceiling before any bytes are read.
fn check_size(size: u64) -> Result<(), IoError> {
    if size > MAX_DOCUMENT_BYTES {
        return Err(IoError::OversizedInput {
            size,
            limit: MAX_DOCUMENT_BYTES,
        });
    }
    Ok(())
}
