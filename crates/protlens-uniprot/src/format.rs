//! Text rendering of protein records for text-only callers
//!
//! The output is meant for an LLM tool interface or a terminal, not for
//! parsing back. The character cap is applied once, after every block has
//! been joined, so the last record may be cut mid-way.

use crate::models::ProteinRecord;
use protlens_common::text::truncate_owned;
use serde::Serialize;
use std::fmt::Write;

/// Returned instead of an empty string when a search matched nothing
pub const NO_RESULT_MESSAGE: &str = "No good UniProt Result was found";

const BLOCK_SEPARATOR: &str = "\n\n";

/// An accession whose lookup failed, listed when failures are skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub accession: String,
    pub reason: String,
}

/// Render one record as a fixed multi-line block.
pub fn render_record(record: &ProteinRecord) -> String {
    format!(
        "Entry ID: {}\n\
         Protein: {}\n\
         Organism: {}\n\
         Function:\n{}\n\
         Subcellular Location:\n{}\n\
         Domains:\n{}\n\
         Sequence:\n{}\n\
         Structures:\n{}\n\
         PubMed Citations:\n{}",
        record.accession,
        record.protein_name,
        record.organism,
        record.function,
        record.subcellular_location,
        record.domains,
        record.sequence,
        pretty(&record.structures),
        pretty(&record.citations),
    )
}

/// Render records separated by blank lines, capped at `max_chars` characters.
pub fn render(records: &[ProteinRecord], max_chars: usize) -> String {
    render_with_skipped(records, &[], max_chars)
}

/// Like [`render`], followed by a note listing entries that could not be fetched.
///
/// With no records the text starts with [`NO_RESULT_MESSAGE`]. The cap applies
/// to every outcome, the sentinel included.
pub fn render_with_skipped(records: &[ProteinRecord], skipped: &[SkippedEntry], max_chars: usize) -> String {
    let mut text = if records.is_empty() {
        NO_RESULT_MESSAGE.to_string()
    } else {
        records.iter().map(render_record).collect::<Vec<_>>().join(BLOCK_SEPARATOR)
    };

    if !skipped.is_empty() {
        text.push_str(BLOCK_SEPARATOR);
        text.push_str("Skipped entries:");
        for entry in skipped {
            let _ = write!(text, "\n{}: {}", entry.accession, entry.reason);
        }
    }

    truncate_owned(text, max_chars)
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
}
