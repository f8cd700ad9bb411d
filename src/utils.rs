//! Utility functions for sequence processing.

use std::collections::BTreeSet;

/// Bases accepted by [`normalize_sequence`].
pub const NUCLEOTIDES: &[u8] = b"ACGTN";

/// Normalize raw sequence text: uppercase, then keep only `A C G T N`.
///
/// Whitespace, line breaks, digits and any other symbols are dropped, so a
/// FASTA body pasted with its line wrapping intact comes out as one run:
/// - "acgt\nnacg" → "ACGTNACG"
/// - "AC GT 12" → "ACGT"
pub fn normalize_sequence(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii() && NUCLEOTIDES.contains(&(*c as u8)))
        .collect()
}

/// One sequence from FASTA-ish text: `>` header lines dropped, the rest
/// joined and normalized.
pub fn sequence_from_fasta(raw: &str) -> String {
    let body: String = raw
        .lines()
        .filter(|line| !line.trim_start().starts_with('>'))
        .collect();
    normalize_sequence(&body)
}

/// One fragment per non-blank line, skipping `>` headers. Lines are trimmed
/// but otherwise left as is.
pub fn fragments_from_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('>'))
        .map(str::to_string)
        .collect()
}

/// Distinct bytes appearing across all sequences.
pub fn alphabet_of<'a, I>(sequences: I) -> BTreeSet<u8>
where
    I: IntoIterator<Item = &'a str>,
{
    sequences
        .into_iter()
        .flat_map(|s| s.bytes())
        .collect()
}
