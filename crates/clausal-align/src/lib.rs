//! Clause alignment between two regulatory documents.
//!
//! `compare` is the thin orchestration over the two core components:
//! segment both documents' extracted text into labeled clauses, then
//! align every source clause to its nearest target clauses in a
//! jointly-fitted TF-IDF space.

pub mod engine;
pub mod vectorizer;

pub use engine::align;
pub use vectorizer::TfidfVectorizer;

use clausal_core::{segment, AlignmentRow, BoundaryPattern, CompareConfig};

/// Run the full comparison pipeline over two extracted document texts.
///
/// Pure and side-effect free: each invocation builds its own boundary
/// pattern from `config`, so concurrent comparisons cannot interfere.
/// An invalid custom boundary pattern is reported as a warning and the
/// default pattern is used instead (never fatal).
pub fn compare(source_text: &str, target_text: &str, config: &CompareConfig) -> Vec<AlignmentRow> {
    let pattern = BoundaryPattern::from_config(config.boundary_pattern.as_deref());
    let source = segment(source_text, &pattern);
    let target = segment(target_text, &pattern);
    tracing::info!(
        source_clauses = source.len(),
        target_clauses = target.len(),
        "segmented documents"
    );
    align(&source, &target, config.min_similarity, config.top_k)
}
