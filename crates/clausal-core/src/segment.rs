//! Clause segmentation.
//!
//! Turns normalised document text into an ordered sequence of labeled
//! clauses: find boundary marker positions, slice the text between
//! consecutive boundaries, derive a human-readable id per segment, and
//! disambiguate duplicate ids with a running occurrence counter.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::boundary::BoundaryPattern;
use crate::clause::Clause;
use crate::normalize::normalize;

static HEADING_ID: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^(annex|appendix|chapter|section|subpart|part)\s+([0-9a-z.]+)")
        .case_insensitive(true)
        .build()
        .expect("heading id pattern compiles")
});

static NUMERIC_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+){0,4})").expect("numeric id pattern compiles"));

/// Tokens kept when falling back to leading words as a clause id.
const FALLBACK_ID_TOKENS: usize = 6;

/// Segment `text` into labeled clauses.
///
/// An empty or whitespace-only input yields an empty sequence. A text
/// with no internal boundary markers yields exactly one clause spanning
/// the whole normalised text.
pub fn segment(text: &str, pattern: &BoundaryPattern) -> Vec<Clause> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let positions = pattern.boundaries(&normalized);
    let mut clauses: Vec<Clause> = Vec::with_capacity(positions.len().saturating_sub(1));
    for pair in positions.windows(2) {
        let chunk = normalized[pair[0]..pair[1]].trim();
        if chunk.is_empty() {
            continue;
        }
        clauses.push(Clause::new(derive_id(chunk), chunk));
    }

    disambiguate(&mut clauses);
    clauses
}

/// Derive a clause id, in priority order: heading prefix, numeric
/// prefix, then the leading words of the segment.
fn derive_id(chunk: &str) -> String {
    if let Some(caps) = HEADING_ID.captures(chunk) {
        let keyword = title_case(&caps[1]);
        let designator = caps[2].trim_end_matches('.');
        return format!("{keyword} {designator}");
    }
    if let Some(caps) = NUMERIC_ID.captures(chunk) {
        return caps[1].to_string();
    }
    let tokens: Vec<&str> = chunk.split_whitespace().collect();
    let mut id = tokens[..tokens.len().min(FALLBACK_ID_TOKENS)].join(" ");
    if tokens.len() > FALLBACK_ID_TOKENS {
        id.push_str("...");
    }
    id
}

/// Append `" (n)"` to the 2nd and later occurrences of a duplicate id.
fn disambiguate(clauses: &mut [Clause]) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for clause in clauses {
        let n = counts.entry(clause.id.clone()).or_insert(0);
        *n += 1;
        if *n > 1 {
            clause.id = format!("{} ({})", clause.id, n);
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str) -> Vec<Clause> {
        segment(text, &BoundaryPattern::default())
    }

    fn ids(clauses: &[Clause]) -> Vec<&str> {
        clauses.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn empty_text_yields_no_clauses() {
        assert!(seg("").is_empty());
        assert!(seg("  \n\t \n ").is_empty());
    }

    #[test]
    fn numbered_national_regulation() {
        let clauses = seg("1. Pilots shall carry a license.\n2. Aircraft require airworthiness certificates.");
        assert_eq!(ids(&clauses), vec!["1", "2"]);
        assert_eq!(clauses[0].text, "1. Pilots shall carry a license.");
        assert_eq!(clauses[1].text, "2. Aircraft require airworthiness certificates.");
    }

    #[test]
    fn annex_style_reference_document() {
        let clauses = seg("Annex 1. Licensing of personnel.\nAnnex 8. Airworthiness of aircraft.");
        assert_eq!(ids(&clauses), vec!["Annex 1", "Annex 8"]);
    }

    #[test]
    fn dotted_numeric_ids() {
        let clauses = seg("4.2 General rules apply.\n4.2.1 Flight crew must rest.\n4.2.1.3 Exceptions exist.");
        assert_eq!(ids(&clauses), vec!["4.2", "4.2.1", "4.2.1.3"]);
    }

    #[test]
    fn heading_keyword_is_title_cased() {
        let clauses = seg("section 12 something\nSUBPART 3 other");
        assert_eq!(ids(&clauses), vec!["Section 12", "Subpart 3"]);
    }

    #[test]
    fn no_markers_yields_single_whole_text_clause() {
        let clauses = seg("The operator shall establish a maintenance programme.");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].text, "The operator shall establish a maintenance programme.");
    }

    #[test]
    fn fallback_id_uses_first_six_tokens() {
        let clauses = seg("The operator shall establish a maintenance programme for each aircraft.");
        assert_eq!(ids(&clauses), vec!["The operator shall establish a maintenance..."]);
    }

    #[test]
    fn fallback_id_short_text_has_no_ellipsis() {
        let clauses = seg("keep records safe");
        assert_eq!(ids(&clauses), vec!["keep records safe"]);
    }

    #[test]
    fn duplicate_ids_get_occurrence_suffix() {
        let clauses = seg("Section 1 alpha text\nSection 1 beta text\nSection 1 gamma text");
        assert_eq!(ids(&clauses), vec!["Section 1", "Section 1 (2)", "Section 1 (3)"]);
    }

    #[test]
    fn ids_unique_within_document() {
        let clauses = seg("4.1 a\n4.1 b\n4.2 c\n4.1 d");
        let mut seen = std::collections::HashSet::new();
        for c in &clauses {
            assert!(seen.insert(&c.id), "duplicate id {}", c.id);
        }
    }

    #[test]
    fn no_clause_text_is_empty() {
        let clauses = seg("4.1 \n\n4.2 rule\n\n\n4.3 other");
        assert!(clauses.iter().all(|c| !c.text.trim().is_empty()));
    }

    #[test]
    fn segments_cover_without_inventing_characters() {
        let text = "Part 1 General.\n1.1 Scope of this part.\n1.2 Definitions apply to all.";
        let normalized = normalize(text);
        let clauses = seg(text);

        let total: usize = clauses.iter().map(|c| c.text.len()).sum();
        assert!(total <= normalized.len());

        // Each segment appears in order in the normalised text.
        let mut from = 0;
        for c in &clauses {
            let at = normalized[from..]
                .find(&c.text)
                .expect("segment text present in normalised input");
            from += at + c.text.len();
        }
    }

    #[test]
    fn custom_pattern_drives_segmentation() {
        let pattern = BoundaryPattern::custom(r"ART\.\s+\d+").unwrap();
        let clauses = segment("ART. 1 First rule.\nART. 2 Second rule.", &pattern);
        assert_eq!(clauses.len(), 2);
        // No heading/numeric prefix, so ids fall back to leading words.
        assert_eq!(ids(&clauses), vec!["ART. 1 First rule.", "ART. 2 Second rule."]);
    }

    #[test]
    fn heading_designator_trailing_period_is_trimmed() {
        let clauses = seg("Appendix 2. Something here");
        assert_eq!(ids(&clauses), vec!["Appendix 2"]);
    }

    #[test]
    fn mid_sentence_numbers_do_not_split() {
        let clauses = seg("4.1 The aircraft shall land within 14 days of notice.");
        assert_eq!(clauses.len(), 1);
    }
}
