use thiserror::Error;

/// Boundary errors, all terminal for the current comparison request.
///
/// These are raised before segmentation begins — the core never sees a
/// document that failed extraction.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported file type: {0} (only plain-text documents are accepted)")]
    UnsupportedFormat(std::path::PathBuf),

    #[error("input too large: {size} bytes exceeds the {limit} byte ceiling")]
    OversizedInput { size: u64, limit: u64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
