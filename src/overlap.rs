// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix/prefix overlap between two fragments.
//!
//! The question is always the same: how many trailing bytes of `a` equal the
//! leading bytes of `b`? We want the *longest* such run that still clears the
//! minimum, not the first one we stumble on, so the scan goes from the longest
//! possible overlap down.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **GATE**: if the length-`m` suffix of `a` differs from the length-`m`
//!    prefix of `b`, the answer is 0. The prefix index already guarantees this
//!    for every candidate it hands out, so in practice the gate never rejects
//!    inside the engine. It stays because the function is public.
//! 2. **LONGEST**: the returned `L` is the largest value in
//!    `m..=min(len(a), len(b))` with `a[len(a)-L..] == b[..L]`.
//! 3. **PURE**: no state. Same inputs, same answer.

/// Check whether the last `len` bytes of `a` equal the first `len` bytes of `b`.
///
/// Returns `false` when either side is shorter than `len`.
#[inline]
pub fn suffix_matches_prefix(a: &[u8], b: &[u8], len: usize) -> bool {
    len <= a.len() && len <= b.len() && a[a.len() - len..] == b[..len]
}

/// Longest suffix-of-`a` / prefix-of-`b` overlap of at least `min_overlap` bytes.
///
/// Returns 0 when no overlap reaches `min_overlap`. Comparison is exact and
/// case-sensitive; inputs are expected to be normalized already.
///
/// ```
/// use fragasm::longest_overlap;
///
/// assert_eq!(longest_overlap("ACGTACG", "TACGTTT", 4), 4);
/// assert_eq!(longest_overlap("GGGG", "CCCC", 4), 0);
/// ```
pub fn longest_overlap(a: &str, b: &str, min_overlap: usize) -> usize {
    if min_overlap == 0 {
        return 0;
    }
    let (a, b) = (a.as_bytes(), b.as_bytes());

    // GATE: cheap rejection before the quadratic scan.
    if !suffix_matches_prefix(a, b, min_overlap) {
        return 0;
    }

    let max_overlap = a.len().min(b.len());
    (min_overlap..=max_overlap)
        .rev()
        .find(|&len| suffix_matches_prefix(a, b, len))
        .unwrap_or(0)
}
