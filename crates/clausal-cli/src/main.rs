mod display;

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use clausal_core::{segment, BoundaryPattern, CompareConfig};

#[derive(Parser)]
#[command(name = "clausal", version, about = "Clause alignment and gap analysis for regulatory documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Segment one document and list its clauses
    Segment {
        /// Plain-text document (.txt, .text, .md)
        file: PathBuf,
        /// Custom clause boundary pattern (anchored to line starts)
        #[arg(long, env = "CLAUSAL_BOUNDARY_PATTERN")]
        boundary_pattern: Option<String>,
    },
    /// Align a primary document's clauses against a reference document
    Align {
        /// Primary document (e.g., a national aviation regulation)
        source: PathBuf,
        /// Reference document (e.g., an ICAO Annex)
        target: PathBuf,
        /// Gap threshold: best matches below this are flagged
        #[arg(long, default_value_t = 0.35)]
        min_similarity: f32,
        /// Matches to emit per source clause (practical range 1-3)
        #[arg(long, default_value_t = 1)]
        top_k: usize,
        /// Custom clause boundary pattern (anchored to line starts)
        #[arg(long, env = "CLAUSAL_BOUNDARY_PATTERN")]
        boundary_pattern: Option<String>,
        /// Write the alignment matrix as CSV
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
        /// Write the alignment matrix as JSON
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Segment {
            file,
            boundary_pattern,
        } => cmd_segment(&file, boundary_pattern.as_deref()),
        Command::Align {
            source,
            target,
            min_similarity,
            top_k,
            boundary_pattern,
            csv,
            json,
        } => cmd_align(
            &source,
            &target,
            min_similarity,
            top_k,
            boundary_pattern,
            csv,
            json,
        ),
    }
}

fn cmd_segment(file: &Path, boundary_pattern: Option<&str>) -> anyhow::Result<()> {
    let text = clausal_io::read_document(file)?;
    let pattern = BoundaryPattern::from_config(boundary_pattern);
    let clauses = segment(&text, &pattern);
    display::print_clauses(&clauses);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_align(
    source: &Path,
    target: &Path,
    min_similarity: f32,
    top_k: usize,
    boundary_pattern: Option<String>,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&min_similarity),
        "--min-similarity must be within [0, 1], got {min_similarity}"
    );

    let source_text = clausal_io::read_document(source)?;
    let target_text = clausal_io::read_document(target)?;

    let config = CompareConfig {
        min_similarity,
        top_k,
        boundary_pattern,
    };
    let rows = clausal_align::compare(&source_text, &target_text, &config);

    display::print_matrix(&rows);

    if let Some(path) = csv {
        clausal_io::write_csv(&rows, File::create(&path)?)?;
        tracing::info!(path = %path.display(), "wrote CSV export");
    }
    if let Some(path) = json {
        clausal_io::write_json(&rows, File::create(&path)?)?;
        tracing::info!(path = %path.display(), "wrote JSON export");
    }
    Ok(())
}
