// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy fixed-point merge loop.
//!
//! One pass visits every slot in id order. An active fragment long enough to
//! be indexed looks up the bucket keyed by its last `k` bytes, scores every
//! candidate with [`longest_overlap`], and absorbs the best one. Passes repeat
//! until one of them commits nothing.
//!
//! Lookups later in a pass see every merge committed earlier in the same pass;
//! the index is never stale between fragments.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NO_SELF_MERGE**: a fragment is never its own candidate, even when its
//!    suffix equals its prefix.
//! 2. **LONGEST_WINS**: the partner with the strictly largest overlap is chosen;
//!    equal overlaps go to the smallest id.
//! 3. **MONOTONIC_SHRINKAGE**: each merge retires exactly one fragment, so the
//!    active count drops by the number of merges in the pass.
//! 4. **TERMINATION**: a pass with zero merges ends the loop. With N fragments
//!    there are at most N - 1 merges, hence at most N passes.
//!
//! # Parallel scoring
//!
//! With the `parallel` feature, buckets of at least
//! [`PARALLEL_CANDIDATE_THRESHOLD`] candidates are scored with rayon. Only the
//! scoring fans out; `absorb` always runs on the calling thread, so the result
//! is identical to the sequential path.

use std::cmp::Reverse;
use std::collections::BTreeSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use super::finalize::{concatenate, finalize, Assembly};
use super::store::FragmentStore;
use crate::error::ConfigError;
use crate::overlap::longest_overlap;
use crate::types::{Fragment, FragmentId, MergeRecord, PassStats};
use crate::utils::alphabet_of;
use crate::verify::contracts;

/// Buckets at least this large are scored in parallel.
pub const PARALLEL_CANDIDATE_THRESHOLD: usize = 64;

/// Knobs layered around the fixed-point loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyOptions {
    /// Stop after this many passes even if the last one still merged.
    /// `None` runs to the fixed point.
    pub max_passes: Option<usize>,
}

/// Owns a [`FragmentStore`] for the duration of one run.
#[derive(Debug, Clone)]
pub struct GreedyAssembler {
    store: FragmentStore,
    options: AssemblyOptions,
    passes: Vec<PassStats>,
    merges: Vec<MergeRecord>,
    input_count: usize,
    input_total_len: usize,
    input_alphabet: BTreeSet<u8>,
}

impl GreedyAssembler {
    pub fn new(store: FragmentStore, options: AssemblyOptions) -> Self {
        let input_total_len = store.fragments().iter().map(Fragment::len).sum();
        let input_alphabet = alphabet_of(store.fragments().iter().filter_map(Fragment::sequence));
        GreedyAssembler {
            input_count: store.len(),
            input_total_len,
            input_alphabet,
            store,
            options,
            passes: Vec::new(),
            merges: Vec::new(),
        }
    }

    /// Build the store and the assembler in one go.
    pub fn from_fragments<I, S>(
        sequences: I,
        min_overlap: usize,
        options: AssemblyOptions,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(FragmentStore::new(sequences, min_overlap)?, options))
    }

    #[inline]
    pub fn store(&self) -> &FragmentStore {
        &self.store
    }

    /// Stats for every pass run so far.
    #[inline]
    pub fn passes(&self) -> &[PassStats] {
        &self.passes
    }

    /// Every merge committed so far, in commit order.
    #[inline]
    pub fn merges(&self) -> &[MergeRecord] {
        &self.merges
    }

    /// Run one full pass over the arena.
    pub fn step_pass(&mut self) -> PassStats {
        let pass = self.passes.len() + 1;
        let active_before = self.store.active_count();
        let mut merges = 0;

        for slot in 0..self.store.len() {
            let id = self.store.fragments()[slot].id;
            let Some((partner, overlap)) = self.best_partner(id) else {
                continue;
            };

            let record = self.store.absorb(id, partner, overlap, pass);
            trace!(
                pass,
                absorber = %record.absorber,
                absorbed = %record.absorbed,
                overlap,
                merged_len = record.merged_len(),
                "merge"
            );
            self.merges.push(record);
            merges += 1;
        }

        // INVARIANT: MONOTONIC_SHRINKAGE
        debug_assert_eq!(
            self.store.active_count(),
            active_before - merges,
            "Contract violation: monotonic shrinkage - {} active before, {} merges, {} after",
            active_before,
            merges,
            self.store.active_count()
        );
        contracts::check_store_consistent(&self.store);

        let stats = PassStats {
            pass,
            merges,
            active_after: self.store.active_count(),
        };
        debug!(pass, merges, active = stats.active_after, "pass complete");
        self.passes.push(stats);
        stats
    }

    /// Run passes until one merges nothing, then finalize.
    pub fn run(self) -> Assembly {
        self.run_with(|_| {})
    }

    /// Like [`run`](Self::run), calling `observer` after every pass.
    pub fn run_with<F>(mut self, mut observer: F) -> Assembly
    where
        F: FnMut(&PassStats),
    {
        let converged = loop {
            if let Some(cap) = self.options.max_passes {
                if self.passes.len() >= cap {
                    warn!(
                        max_passes = cap,
                        active = self.store.active_count(),
                        "pass cap reached before fixed point"
                    );
                    break false;
                }
            }

            let stats = self.step_pass();
            observer(&stats);
            if stats.merges == 0 {
                break true;
            }
        };

        self.finish(converged)
    }

    fn finish(self, converged: bool) -> Assembly {
        let contigs = finalize(&self.store);
        let sequence = concatenate(&contigs);

        contracts::check_alphabet_preserved(&self.input_alphabet, &sequence);
        contracts::check_length_bound(sequence.len(), self.input_total_len);

        info!(
            passes = self.passes.len(),
            merges = self.merges.len(),
            contigs = contigs.len(),
            assembled_len = sequence.len(),
            converged,
            "assembly finished"
        );

        Assembly {
            sequence,
            contigs,
            passes: self.passes,
            merges: self.merges,
            converged,
            input_count: self.input_count,
            input_total_len: self.input_total_len,
            min_overlap: self.store.min_overlap(),
        }
    }

    /// Best partner for `id` as the left side of a merge, if any.
    fn best_partner(&self, id: FragmentId) -> Option<(FragmentId, usize)> {
        let k = self.store.min_overlap();
        let left = self.store.sequence(id)?;
        if left.len() < k {
            return None;
        }
        let bucket = self.store.index().bucket(&left[left.len() - k..])?;

        // INVARIANT: NO_SELF_MERGE
        let score = |j: FragmentId| -> Option<(FragmentId, usize)> {
            if j == id {
                return None;
            }
            let right = self.store.sequence(j)?;
            match longest_overlap(left, right, k) {
                0 => None,
                overlap => Some((j, overlap)),
            }
        };
        // INVARIANT: LONGEST_WINS
        let rank = |&(j, overlap): &(FragmentId, usize)| (overlap, Reverse(j));

        #[cfg(feature = "parallel")]
        {
            if bucket.len() >= PARALLEL_CANDIDATE_THRESHOLD {
                return bucket
                    .par_iter()
                    .copied()
                    .filter_map(score)
                    .max_by_key(rank);
            }
        }

        bucket.iter().copied().filter_map(score).max_by_key(rank)
    }
}
