//! Whitespace normalisation for extracted legal text.
//!
//! PDF and DOCX extraction introduces irregular spacing, mixed line
//! endings, and hard line breaks mid-sentence. Runs of horizontal
//! whitespace are collapsed but line breaks are preserved: clause
//! boundaries are anchored to line starts, so newlines are structural
//! signals.

/// Normalise whitespace while keeping line structure.
///
/// - `\r\n` and bare `\r` become `\n`
/// - runs of spaces/tabs within a line collapse to a single space
/// - each line is trimmed
/// - three or more consecutive blank lines collapse to one blank line
/// - the whole text is trimmed
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(unified.len());
    let mut blank_run = 0usize;
    for line in unified.split('\n') {
        let mut collapsed = String::with_capacity(line.len());
        let mut last_was_space = false;
        for ch in line.chars() {
            if ch == ' ' || ch == '\t' {
                if !last_was_space {
                    collapsed.push(' ');
                }
                last_was_space = true;
            } else {
                collapsed.push(ch);
                last_was_space = false;
            }
        }
        let trimmed = collapsed.trim();

        if trimmed.is_empty() {
            blank_run += 1;
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            // Runs of three or more blank lines collapse to exactly one;
            // shorter runs are kept as-is.
            let blanks = if blank_run >= 3 { 1 } else { blank_run };
            for _ in 0..blanks {
                out.push('\n');
            }
        }
        out.push_str(trimmed);
        blank_run = 0;
    }

    out.trim().to_string()
}
