//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of fixtures to avoid duplication.

#![doc(hidden)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assembly::FragmentStore;

/// Owned fragments from string literals.
pub fn fragments(seqs: &[&str]) -> Vec<String> {
    seqs.iter().map(|s| s.to_string()).collect()
}

/// Store over `seqs`, panicking on invalid input.
pub fn store(seqs: &[&str], min_overlap: usize) -> FragmentStore {
    FragmentStore::new(seqs.iter().copied(), min_overlap)
        .unwrap_or_else(|e| panic!("invalid test fragments: {e}"))
}

/// Uniform random `ACGT` sequence, reproducible from `seed`.
///
/// At a few thousand bases, 20-mer repeats are vanishingly rare, so the greedy
/// engine sees an unambiguous layout.
pub fn random_sequence(len: usize, seed: u64) -> String {
    const BASES: &[u8; 4] = b"ACGT";
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| BASES[rng.gen_range(0..BASES.len())] as char)
        .collect()
}

/// Evenly tiled fragments of `width` covering `source`, consecutive tiles
/// overlapping by `overlap` bytes. The last tile is clipped to the source end.
///
/// # Panics
/// Panics if `overlap >= width`.
pub fn tiled_fragments(source: &str, width: usize, overlap: usize) -> Vec<String> {
    assert!(overlap < width, "tile overlap must be smaller than tile width");
    let step = width - overlap;
    let mut tiles = Vec::new();
    let mut start = 0;
    loop {
        let end = (start + width).min(source.len());
        tiles.push(source[start..end].to_string());
        if end == source.len() {
            break;
        }
        start += step;
    }
    tiles
}
