pub mod boundary;
pub mod clause;
pub mod error;
pub mod normalize;
pub mod segment;

pub use boundary::BoundaryPattern;
pub use clause::{AlignmentRow, Clause, CompareConfig, GapStatus, COLUMNS};
pub use error::CoreError;
pub use normalize::normalize;
pub use segment::segment;
