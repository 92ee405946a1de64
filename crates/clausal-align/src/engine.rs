//! Nearest-match alignment between two clause lists.
//!
//! Every source clause is compared against every target clause by
//! cosine similarity in a jointly-fitted TF-IDF space, then classified:
//! candidates at or above the threshold become `Aligned` rows; a source
//! clause with no qualifying candidate gets exactly one `Potential Gap`
//! row carrying its best available match.

use clausal_core::{AlignmentRow, Clause, GapStatus};

use crate::vectorizer::{SparseVec, TfidfVectorizer};

/// Align `source` clauses against `target` clauses.
///
/// Returns rows grouped by source clause in document order; within a
/// group, rows are ordered by descending similarity. Either side empty
/// yields an empty result. `top_k` is clamped to `1..=target.len()`.
///
/// Threshold comparisons use unrounded similarity; the reported value
/// is rounded to 4 decimal places.
pub fn align(
    source: &[Clause],
    target: &[Clause],
    min_similarity: f32,
    top_k: usize,
) -> Vec<AlignmentRow> {
    if source.is_empty() || target.is_empty() {
        return Vec::new();
    }

    let corpus: Vec<&str> = source
        .iter()
        .chain(target.iter())
        .map(|c| c.text.as_str())
        .collect();
    let vectorizer = TfidfVectorizer::fit(&corpus);
    let source_vecs: Vec<SparseVec> = source.iter().map(|c| vectorizer.transform(&c.text)).collect();
    let target_vecs: Vec<SparseVec> = target.iter().map(|c| vectorizer.transform(&c.text)).collect();

    let k = top_k.clamp(1, target.len());
    let mut rows = Vec::with_capacity(source.len());

    for (clause, vec) in source.iter().zip(&source_vecs) {
        let sims: Vec<f32> = target_vecs.iter().map(|t| vec.cosine(t)).collect();

        // Rank by descending similarity; the stable sort over an
        // index-ordered list breaks exact ties by target document
        // order (lowest index wins).
        let mut ranked: Vec<usize> = (0..target.len()).collect();
        ranked.sort_by(|&a, &b| sims[b].total_cmp(&sims[a]));

        let mut emitted = false;
        for &j in &ranked[..k] {
            if sims[j] >= min_similarity {
                rows.push(row(clause, &target[j], sims[j], GapStatus::Aligned));
                emitted = true;
            }
        }
        if !emitted {
            let j = ranked[0];
            rows.push(row(clause, &target[j], sims[j], GapStatus::PotentialGap));
        }
    }
    rows
}

fn row(source: &Clause, target: &Clause, similarity: f32, status: GapStatus) -> AlignmentRow {
    AlignmentRow {
        source_id: source.id.clone(),
        source_text: source.text.clone(),
        matched_target_id: target.id.clone(),
        matched_target_text: target.text.clone(),
        similarity: round4(similarity),
        status,
    }
}

/// Round to 4 decimal places for reporting.
fn round4(x: f32) -> f32 {
    (x * 10_000.0).round() / 10_000.0
}
