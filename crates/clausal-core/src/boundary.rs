//! Clause boundary patterns.
//!
//! A boundary pattern is an explicit, compiled value threaded into the
//! segmenter by parameter. It is never module-level mutable state:
//! concurrent comparison runs each hold their own pattern, so a custom
//! pattern on one request cannot leak into another.

use regex::{Regex, RegexBuilder};

use crate::error::CoreError;

/// Built-in pattern matching two families of structural markers, each
/// anchored at a line start:
///
/// - heading-style: `Annex 6`, `Appendix 2.`, `Chapter 3A`, `Section 4`,
///   `Part 145` (keyword, digit-led designator, optional period)
/// - numeric-style: a dotted numeric sequence of 1–5 components with an
///   optional `.` or `)` suffix, followed by whitespace: `4 `, `4.2 `,
///   `1. `, `4.2.1.3 `
const DEFAULT_PATTERN: &str = r"^(?:(?:annex|appendix|chapter|section|subpart|part)\s+\d+[a-z]*\.?|\d+(?:\.\d+){0,4}[.)]?\s+)";

/// A compiled, line-anchored clause boundary pattern.
#[derive(Debug, Clone)]
pub struct BoundaryPattern {
    regex: Regex,
}

impl Default for BoundaryPattern {
    fn default() -> Self {
        Self {
            // The built-in pattern is a constant; compilation cannot fail.
            regex: compile(DEFAULT_PATTERN).expect("default boundary pattern compiles"),
        }
    }
}

impl BoundaryPattern {
    /// Compile a caller-supplied pattern.
    ///
    /// Patterns are forced to anchor at a line start: the whole pattern
    /// is wrapped in a non-capturing group behind a `^`, so every
    /// alternate of an alternation is anchored and worst-case matching
    /// cost stays bounded on adversarial input. Compilation failure is
    /// recoverable — the caller keeps its previously active pattern.
    pub fn custom(pattern: &str) -> Result<Self, CoreError> {
        let anchored = format!("^(?:{})", pattern.trim());
        Ok(Self {
            regex: compile(&anchored)?,
        })
    }

    /// Resolve an optional custom pattern, falling back to the default
    /// with a warning when it does not compile (never fatal).
    pub fn from_config(custom: Option<&str>) -> Self {
        match custom.map(str::trim).filter(|p| !p.is_empty()) {
            None => Self::default(),
            Some(p) => Self::custom(p).unwrap_or_else(|e| {
                tracing::warn!(pattern = p, error = %e, "ignoring invalid boundary pattern");
                Self::default()
            }),
        }
    }

    /// Boundary positions in `text`: every match start, plus a synthetic
    /// leading boundary at 0 and a trailing one at `text.len()`, so the
    /// first and last segments are always captured.
    pub fn boundaries(&self, text: &str) -> Vec<usize> {
        let mut positions: Vec<usize> = self.regex.find_iter(text).map(|m| m.start()).collect();
        positions.push(0);
        positions.push(text.len());
        positions.sort_unstable();
        positions.dedup();
        positions
    }
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .case_insensitive(true)
        .build()
}
