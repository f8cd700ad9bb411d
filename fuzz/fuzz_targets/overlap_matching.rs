// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the suffix/prefix overlap matcher.
//!
//! Checks the answer against a brute-force scan. Every merge length the
//! engine commits comes from this function, so an off-by-one here silently
//! corrupts contigs.

#![no_main]

use arbitrary::Arbitrary;
use fragasm::{longest_overlap, suffix_matches_prefix};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct OverlapInput {
    /// Packed two bits per base so collisions are common.
    left: Vec<u8>,
    right: Vec<u8>,
    min_overlap: u8,
}

fn decode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(200)
        .map(|b| b"ACGT"[(b & 3) as usize] as char)
        .collect()
}

fuzz_target!(|input: OverlapInput| {
    let a = decode(&input.left);
    let b = decode(&input.right);
    let m = input.min_overlap as usize % 32;

    let got = longest_overlap(&a, &b, m);

    let expected = if m == 0 {
        0
    } else {
        (m..=a.len().min(b.len()))
            .rev()
            .find(|&len| a.as_bytes()[a.len() - len..] == b.as_bytes()[..len])
            .unwrap_or(0)
    };

    // The gate rejects even when a longer overlap exists.
    let expected = if m > 0 && !suffix_matches_prefix(a.as_bytes(), b.as_bytes(), m) {
        0
    } else {
        expected
    };

    assert_eq!(got, expected, "a={} b={} m={}", a, b, m);
    if got > 0 {
        assert!(got >= m);
        assert!(a.ends_with(&b[..got]));
    }
});
