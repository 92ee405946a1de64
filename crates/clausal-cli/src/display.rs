//! Terminal rendering of clause lists and the alignment matrix.
//!
//! Fixed-width columns with cell truncation; gap rows carry a leading
//! `!` marker so they stand out without any colour support.

use clausal_core::{AlignmentRow, Clause, GapStatus};

const ID_WIDTH: usize = 18;
const TEXT_WIDTH: usize = 44;

/// Print segmented clauses with a text preview and a clause count.
pub fn print_clauses(clauses: &[Clause]) {
    for clause in clauses {
        println!(
            "  {:<width$} {}",
            truncate(&clause.id, ID_WIDTH),
            truncate(&clause.text, TEXT_WIDTH + 20),
            width = ID_WIDTH
        );
    }
    println!();
    println!("{} clauses", clauses.len());
}

/// Print the alignment / gap matrix as a fixed-width table.
pub fn print_matrix(rows: &[AlignmentRow]) {
    println!(
        "  {:<iw$} {:<tw$} {:<iw$} {:>6}  {}",
        "Source",
        "Text",
        "Match",
        "Sim",
        "Status",
        iw = ID_WIDTH,
        tw = TEXT_WIDTH
    );
    for row in rows {
        let marker = match row.status {
            GapStatus::Aligned => ' ',
            GapStatus::PotentialGap => '!',
        };
        println!(
            "{marker} {:<iw$} {:<tw$} {:<iw$} {:>6.4}  {}",
            truncate(&row.source_id, ID_WIDTH),
            truncate(&row.source_text, TEXT_WIDTH),
            truncate(&row.matched_target_id, ID_WIDTH),
            row.similarity,
            row.status.as_str(),
            iw = ID_WIDTH,
            tw = TEXT_WIDTH
        );
    }

    let gaps = rows
        .iter()
        .filter(|r| r.status == GapStatus::PotentialGap)
        .count();
    println!();
    println!("{} rows, {} potential gaps", rows.len(), gaps);
}

/// Truncate to `max` characters, marking the cut with `...`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
