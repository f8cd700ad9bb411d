// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fragment arena and prefix index, owned together.
//!
//! The two structures describe the same state from different angles, so they
//! are only ever mutated through [`FragmentStore::absorb`]. There is no way to
//! touch a sequence without the index following along.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **ARENA_STABLE**: slots are never removed or reordered; `fragments[i].id == i`.
//! 2. **INDEX_MIRRORS_ARENA**: the prefix index holds exactly the active
//!    fragments of length ≥ k, each under its current prefix.
//! 3. **ACTIVE_COUNT**: `active` equals the number of `Active` slots.

use crate::error::ConfigError;
use crate::index::PrefixIndex;
use crate::types::{Fragment, FragmentId, FragmentState, MergeRecord};
use crate::verify::contracts;

#[derive(Debug, Clone)]
pub struct FragmentStore {
    fragments: Vec<Fragment>,
    index: PrefixIndex,
    active: usize,
}

impl FragmentStore {
    /// Load fragments with sequential ids and index them by their `min_overlap` prefix.
    ///
    /// Fragments shorter than `min_overlap` are accepted but never indexed, so
    /// nothing can find them by suffix lookup.
    pub fn new<I, S>(sequences: I, min_overlap: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if min_overlap == 0 {
            return Err(ConfigError::ZeroMinOverlap);
        }

        let mut fragments = Vec::new();
        for (slot, sequence) in sequences.into_iter().enumerate() {
            let id = u32::try_from(slot)
                .map(FragmentId)
                .map_err(|_| ConfigError::TooManyFragments { count: slot + 1 })?;
            let sequence: String = sequence.into();
            if sequence.is_empty() {
                return Err(ConfigError::EmptyFragment { id });
            }
            if !sequence.is_ascii() {
                return Err(ConfigError::NonAsciiFragment { id });
            }
            fragments.push(Fragment::active(id, sequence));
        }

        let index = PrefixIndex::build(
            fragments
                .iter()
                .filter_map(|f| f.sequence().map(|seq| (f.id, seq))),
            min_overlap,
        );
        let active = fragments.len();

        Ok(FragmentStore {
            fragments,
            index,
            active,
        })
    }

    /// Minimum overlap, which is also the prefix length of the index.
    #[inline]
    pub fn min_overlap(&self) -> usize {
        self.index.k()
    }

    /// Total slots, active or retired.
    #[inline]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    #[inline]
    pub fn get(&self, id: FragmentId) -> Option<&Fragment> {
        self.fragments.get(id.as_usize())
    }

    /// Current sequence of `id`, `None` if retired or out of range.
    #[inline]
    pub fn sequence(&self, id: FragmentId) -> Option<&str> {
        self.get(id).and_then(Fragment::sequence)
    }

    #[inline]
    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    /// Ids of every active fragment, ascending.
    pub fn active_ids(&self) -> impl Iterator<Item = FragmentId> + '_ {
        self.fragments
            .iter()
            .filter(|f| f.is_active())
            .map(|f| f.id)
    }

    /// Append `right[overlap..]` to `left` and retire `right`.
    ///
    /// This is the single commit point: the arena and the index are updated
    /// together, or the call panics.
    ///
    /// # Panics
    /// Panics if `left == right`, if either fragment is not active, or if
    /// `overlap` is longer than either sequence.
    pub fn absorb(
        &mut self,
        left: FragmentId,
        right: FragmentId,
        overlap: usize,
        pass: usize,
    ) -> MergeRecord {
        assert_ne!(left, right, "Invariant violation: {} cannot absorb itself", left);
        let absorber_len_before = self
            .sequence(left)
            .unwrap_or_else(|| panic!("Invariant violation: absorber {} is not active", left))
            .len();
        let absorbed_len = self
            .sequence(right)
            .unwrap_or_else(|| panic!("Invariant violation: absorbed {} is not active", right))
            .len();
        assert!(
            overlap <= absorber_len_before && overlap <= absorbed_len,
            "Invariant violation: overlap {} longer than {} ({}) or {} ({})",
            overlap,
            left,
            absorber_len_before,
            right,
            absorbed_len
        );

        let k = self.index.k();

        // Retire right first; its sequence moves out of the arena.
        let right_seq = match std::mem::replace(
            &mut self.fragments[right.as_usize()].state,
            FragmentState::Retired { absorbed_by: left },
        ) {
            FragmentState::Active(seq) => seq,
            FragmentState::Retired { .. } => unreachable!("checked active above"),
        };
        self.active -= 1;

        let FragmentState::Active(left_seq) = &mut self.fragments[left.as_usize()].state else {
            unreachable!("checked active above")
        };
        // Only the head matters for the old binding.
        let old_head = left_seq.get(..k).unwrap_or(left_seq.as_str()).to_string();
        left_seq.push_str(&right_seq[overlap..]);
        let merged: &str = left_seq;

        contracts::check_merge_correct(merged, absorber_len_before, &right_seq, overlap);

        // INVARIANT: INDEX_MIRRORS_ARENA
        self.index.rebind(left, Some(&old_head), Some(merged));
        self.index.rebind(right, Some(&right_seq), None);

        MergeRecord {
            pass,
            absorber: left,
            absorbed: right,
            overlap,
            absorber_len_before,
            absorbed_len,
        }
    }
}
