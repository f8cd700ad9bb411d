// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the merge engine.
//!
//! Debug-mode assertions that verify the properties the engine relies on:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the invariants documented on each module
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                        |
//! |----------------------------|-------------------------------------------------|
//! | `check_merge_correct`      | merged = left ++ right[overlap..], overlap real |
//! | `check_store_consistent`   | index mirrors arena, active count correct       |
//! | `check_alphabet_preserved` | output uses only input bytes                    |
//! | `check_length_bound`       | output never longer than total input            |
//!
//! # Usage
//!
//! ```ignore
//! use fragasm::verify::contracts::*;
//!
//! // In debug builds, this panics if invariant is violated
//! check_store_consistent(&store);
//!
//! // In release builds, this is a no-op
//! ```

use std::collections::BTreeSet;

use crate::assembly::FragmentStore;
use crate::utils::alphabet_of;
use crate::verify::validate_store;

// ============================================================================
// MERGE CONTRACTS
// ============================================================================

/// Check one committed merge.
///
/// `merged` must be `left_before ++ right[overlap..]`. Since the absorber is
/// only ever appended to, the first `left_len_before` bytes are the old
/// sequence; what we check is that the overlap region really matched and the
/// tail is exactly the unmatched part of `right`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_merge_correct(merged: &str, left_len_before: usize, right: &str, overlap: usize) {
    debug_assert_eq!(
        merged.len(),
        left_len_before + right.len() - overlap,
        "Contract violation: merge length - {} != {} + {} - {}",
        merged.len(),
        left_len_before,
        right.len(),
        overlap
    );

    debug_assert!(
        merged.as_bytes()[left_len_before - overlap..left_len_before] == right.as_bytes()[..overlap],
        "Contract violation: merge overlap - suffix of absorber does not match \
         prefix of absorbed over {} bytes",
        overlap
    );

    debug_assert!(
        merged.ends_with(&right[overlap..]),
        "Contract violation: merge tail - merged sequence does not end with \
         absorbed[{}..]",
        overlap
    );
}

// ============================================================================
// STORE CONTRACTS
// ============================================================================

/// Check that the prefix index and the arena describe the same state.
///
/// O(n) in the number of fragments; the engine runs it once per pass.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_store_consistent(store: &FragmentStore) {
    if cfg!(debug_assertions) {
        if let Err(err) = validate_store(store) {
            panic!("Contract violation: store consistency - {}", err);
        }
    }
}

// ============================================================================
// OUTPUT CONTRACTS
// ============================================================================

/// Check that every byte of `output` appears somewhere in the input fragments.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_alphabet_preserved(inputs: &BTreeSet<u8>, output: &str) {
    if cfg!(debug_assertions) {
        let produced = alphabet_of([output]);
        let foreign: Vec<char> = produced.difference(inputs).map(|&b| b as char).collect();
        debug_assert!(
            foreign.is_empty(),
            "Contract violation: alphabet preserved - output contains {:?}",
            foreign
        );
    }
}

/// Check `len(output) <= total input length`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_length_bound(output_len: usize, input_total_len: usize) {
    debug_assert!(
        output_len <= input_total_len,
        "Contract violation: length bound - output {} > input total {}",
        output_len,
        input_total_len
    );
}
