pub mod error;
pub mod export;
pub mod extract;

pub use error::IoError;
pub use export::{write_csv, write_json};
pub use extract::{read_document, MAX_DOCUMENT_BYTES};
