//! Term-weighted text vectorization.
//!
//! Builds a TF-IDF representation over unigrams and bigrams of
//! whitespace-delimited tokens. The vocabulary is fitted jointly over
//! both documents' clause texts so that source and target vectors live
//! in the same feature space and are directly comparable.
//!
//! Vectors are sparse and L2-normalised, so a dot product is cosine
//! similarity. Weights are non-negative, hence cosine lands in [0, 1].

use std::collections::HashMap;

/// Smoothed inverse document frequency: `ln((1+n)/(1+df)) + 1`.
///
/// The +1 smoothing keeps every fitted term's weight positive and
/// tolerates terms present in every clause.
fn idf(n_docs: usize, doc_freq: usize) -> f32 {
    ((1.0 + n_docs as f32) / (1.0 + doc_freq as f32)).ln() + 1.0
}

/// A sparse L2-normalised term vector, sorted by term index.
#[derive(Debug, Clone, Default)]
pub struct SparseVec(Vec<(u32, f32)>);

impl SparseVec {
    /// Cosine similarity against another normalised vector.
    ///
    /// A zero vector (degenerate vocabulary) yields 0.0, never an error.
    pub fn cosine(&self, other: &SparseVec) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0f32;
        while i < self.0.len() && j < other.0.len() {
            let (ti, wi) = self.0[i];
            let (tj, wj) = other.0[j];
            match ti.cmp(&tj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += wi * wj;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot.clamp(0.0, 1.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

/// TF-IDF vectorizer over unigrams + bigrams.
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, u32>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Learn the joint vocabulary and document frequencies from `corpus`.
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Self {
        let mut vocabulary: HashMap<String, u32> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for text in corpus {
            let mut seen: Vec<u32> = Vec::new();
            for term in terms(text.as_ref()) {
                let next = vocabulary.len() as u32;
                let index = *vocabulary.entry(term).or_insert(next);
                if index as usize == doc_freq.len() {
                    doc_freq.push(0);
                }
                if !seen.contains(&index) {
                    seen.push(index);
                    doc_freq[index as usize] += 1;
                }
            }
        }

        let n = corpus.len();
        let idf = doc_freq.iter().map(|&df| idf(n, df)).collect();
        Self { vocabulary, idf }
    }

    /// Transform one text into a normalised sparse vector.
    ///
    /// Terms outside the fitted vocabulary are ignored; a text with no
    /// known terms transforms to the zero vector.
    pub fn transform(&self, text: &str) -> SparseVec {
        let mut counts: HashMap<u32, f32> = HashMap::new();
        for term in terms(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(u32, f32)> = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index as usize]))
            .collect();
        entries.sort_unstable_by_key(|&(index, _)| index);

        let norm = entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for entry in &mut entries {
                entry.1 /= norm;
            }
        }
        SparseVec(entries)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Unigram and bigram terms of a text.
fn terms(text: &str) -> Vec<String> {
    let tokens: Vec<String> = text.split_whitespace().filter_map(normalize_token).collect();
    let mut terms = Vec::with_capacity(tokens.len().saturating_mul(2));
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms.extend(tokens);
    terms
}

/// Lowercase, trim non-alphanumeric edges, and fold common English
/// inflection suffixes so that e.g. "license"/"Licensing" share the
/// stem "licens".
fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        return None;
    }
    Some(fold_suffix(&trimmed.to_lowercase()))
}

fn fold_suffix(word: &str) -> String {
    let mut w = word;
    if w.len() >= 6 && w.ends_with("ing") {
        w = &w[..w.len() - 3];
    } else if w.len() >= 5 && w.ends_with("ed") {
        w = &w[..w.len() - 2];
    } else if w.len() >= 5 && w.ends_with("es") {
        w = &w[..w.len() - 2];
    } else if w.len() >= 4 && w.ends_with('s') && !w.ends_with("ss") {
        w = &w[..w.len() - 1];
    }
    if w.len() >= 4 && w.ends_with('e') {
        w = &w[..w.len() - 1];
    }
    w.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_folding_aligns_inflections() {
        assert_eq!(fold_suffix("licensing"), "licens");
        assert_eq!(fold_suffix("license"), "licens");
        assert_eq!(fold_suffix("rules"), "rul");
        assert_eq!(fold_suffix("rule"), "rul");
        assert_eq!(fold_suffix("certificates"), "certificat");
        assert_eq!(fold_suffix("certificate"), "certificat");
        assert_eq!(fold_suffix("pilots"), "pilot");
        // Double-s words are not plurals.
        assert_eq!(fold_suffix("airworthiness"), "airworthiness");
        // Short words are left alone.
        assert_eq!(fold_suffix("is"), "is");
        assert_eq!(fold_suffix("as"), "as");
    }

    #[test]
    fn token_normalisation_strips_punctuation() {
        assert_eq!(normalize_token("1."), Some("1".to_string()));
        assert_eq!(normalize_token("(aircraft)"), Some("aircraft".to_string()));
        assert_eq!(normalize_token("—"), None);
        assert_eq!(normalize_token("..."), None);
    }

    #[test]
    fn identical_texts_have_cosine_one() {
        let v = TfidfVectorizer::fit(&["pilots shall carry a license", "unrelated words here"]);
        let a = v.transform("pilots shall carry a license");
        let b = v.transform("pilots shall carry a license");
        assert!((a.cosine(&b) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn disjoint_texts_have_cosine_zero() {
        let v = TfidfVectorizer::fit(&["alpha bravo charlie", "delta echo foxtrot"]);
        let a = v.transform("alpha bravo charlie");
        let b = v.transform("delta echo foxtrot");
        assert_eq!(a.cosine(&b), 0.0);
    }

    #[test]
    fn bigrams_contribute_to_similarity() {
        let v = TfidfVectorizer::fit(&["flight crew rest", "crew rest period", "other text entirely"]);
        let a = v.transform("flight crew rest");
        let b = v.transform("crew rest period");
        let c = v.transform("other text entirely");
        // "crew rest" bigram plus shared unigrams outweigh the disjoint pair.
        assert!(a.cosine(&b) > a.cosine(&c));
        // Bigram terms are in the vocabulary alongside unigrams.
        assert!(v.vocabulary_len() > 9);
    }

    #[test]
    fn empty_vocabulary_is_not_an_error() {
        let v = TfidfVectorizer::fit(&["!!!", "???"]);
        assert_eq!(v.vocabulary_len(), 0);
        let a = v.transform("!!!");
        assert!(a.is_zero());
        assert_eq!(a.cosine(&a), 0.0);
    }

    #[test]
    fn unknown_terms_are_ignored() {
        let v = TfidfVectorizer::fit(&["known words only"]);
        let a = v.transform("known words only");
        let b = v.transform("known words only plus novel vocabulary");
        assert!(a.cosine(&b) > 0.9);
    }

    #[test]
    fn cosine_stays_in_unit_interval() {
        let corpus = ["a b c d", "b c d e", "c d e f", "a a a a"];
        let v = TfidfVectorizer::fit(&corpus);
        let vecs: Vec<SparseVec> = corpus.iter().map(|t| v.transform(t)).collect();
        for x in &vecs {
            for y in &vecs {
                let s = x.cosine(y);
                assert!((0.0..=1.0).contains(&s), "cosine {s} out of bounds");
            }
        }
    }
}
