//! Core record types for clause comparison.
//!
//! `Clause` is the atomic unit produced by the segmenter; `AlignmentRow`
//! is one emitted comparison result. Both are derived, immutable, and
//! transient — built fresh per comparison run, never persisted here.

use serde::{Deserialize, Serialize};

/// The fixed export schema consumed by CSV/spreadsheet exporters.
///
/// Declared up front so an empty result set still has a well-defined
/// column contract.
pub const COLUMNS: [&str; 6] = [
    "Source_ID",
    "Source_Text",
    "Matched_Target_ID",
    "Matched_Target_Text",
    "Similarity",
    "Gap?",
];

/// One segmented clause. Ordering is implicit: a clause's position in
/// its document's `Vec<Clause>` is its document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// Human-readable label derived from structural markers
    /// (e.g., "Annex 6", "4.2.1") or the leading words of the text.
    /// Unique within a single document's clause list.
    pub id: String,
    /// Verbatim clause body, whitespace-normalised and trimmed.
    /// Never empty — empty segments are dropped during segmentation.
    pub text: String,
}

impl Clause {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Classification of a source clause's match against the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapStatus {
    /// Best match met the similarity threshold.
    #[serde(rename = "Aligned")]
    Aligned,
    /// No candidate met the threshold — flagged for human review.
    #[serde(rename = "Potential Gap")]
    PotentialGap,
}

impl GapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aligned => "Aligned",
            Self::PotentialGap => "Potential Gap",
        }
    }
}

/// One row of the alignment / gap matrix.
///
/// Serde renames produce the stable `COLUMNS` schema directly, so the
/// CSV and JSON exporters never infer column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentRow {
    #[serde(rename = "Source_ID")]
    pub source_id: String,
    #[serde(rename = "Source_Text")]
    pub source_text: String,
    #[serde(rename = "Matched_Target_ID")]
    pub matched_target_id: String,
    #[serde(rename = "Matched_Target_Text")]
    pub matched_target_text: String,
    /// Cosine similarity in [0, 1], rounded to 4 decimal places.
    #[serde(rename = "Similarity")]
    pub similarity: f32,
    #[serde(rename = "Gap?")]
    pub status: GapStatus,
}

/// Caller-supplied comparison settings, validated at the boundary and
/// threaded by value into the pipeline — never process-wide state, so
/// concurrent comparisons with different settings cannot interfere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Gap threshold: best matches below this are flagged `Potential Gap`.
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f32,
    /// How many qualifying matches to emit per source clause.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Optional custom boundary pattern; `None` uses the built-in
    /// heading/numeric pattern.
    #[serde(default)]
    pub boundary_pattern: Option<String>,
}

fn default_min_similarity() -> f32 {
    0.35
}

fn default_top_k() -> usize {
    1
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            min_similarity: default_min_similarity(),
            top_k: default_top_k(),
            boundary_pattern: None,
        }
    }
}
