// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-length prefix index over the active fragments.
//!
//! Maps every `k`-byte prefix to the fragments currently starting with it.
//! The engine asks "who starts with my last `k` bytes?" once per fragment per
//! pass, so this turns the all-pairs overlap search into a hash lookup.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **BOUND_ONCE**: an active fragment of length ≥ k sits in exactly one
//!    bucket, the one keyed by `sequence[..k]`.
//! 2. **SHORT_EXCLUDED**: fragments shorter than `k` are never indexed.
//! 3. **NO_EMPTY_BUCKETS**: a bucket is dropped as soon as it empties.
//!
//! Breaking any of these is a programming error. `rebind` panics instead of
//! returning an error because the caller has already lost track of state.

use std::collections::{BTreeSet, HashMap};

use crate::types::FragmentId;

/// Prefix → fragment ids currently exposing that prefix.
///
/// Buckets are ordered sets so candidate lookup yields ids in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixIndex {
    k: usize,
    buckets: HashMap<String, BTreeSet<FragmentId>>,
    bindings: usize,
}

impl PrefixIndex {
    /// Empty index for prefixes of length `k`.
    ///
    /// # Panics
    /// Panics if `k == 0`.
    pub fn new(k: usize) -> Self {
        assert!(k > 0, "prefix length must be at least 1");
        PrefixIndex {
            k,
            buckets: HashMap::new(),
            bindings: 0,
        }
    }

    /// Index every fragment of length ≥ `k`.
    pub fn build<'a, I>(fragments: I, k: usize) -> Self
    where
        I: IntoIterator<Item = (FragmentId, &'a str)>,
    {
        let mut index = PrefixIndex::new(k);
        for (id, sequence) in fragments {
            if index.key(sequence).is_some() {
                index.insert(id, sequence);
            }
        }
        index
    }

    /// Prefix length this index was built for.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// The bucket key for `sequence`, or `None` if it is too short to index.
    #[inline]
    pub fn key<'s>(&self, sequence: &'s str) -> Option<&'s str> {
        sequence.get(..self.k)
    }

    /// Move `id` from the bucket of `old` to the bucket of `new`.
    ///
    /// Either side may be `None` (fresh insert, or retirement) or too short to
    /// be indexed, in which case that half is skipped.
    ///
    /// # Panics
    /// Panics if `old` is indexable but `id` is not bound under its prefix, or
    /// if `new` is indexable and `id` is already bound there.
    pub fn rebind(&mut self, id: FragmentId, old: Option<&str>, new: Option<&str>) {
        if let Some(old) = old {
            if self.key(old).is_some() {
                self.remove(id, old);
            }
        }
        if let Some(new) = new {
            if self.key(new).is_some() {
                self.insert(id, new);
            }
        }
    }

    /// Fragment ids bound under `key`, ascending.
    pub fn candidates<'s>(&'s self, key: &str) -> impl Iterator<Item = FragmentId> + 's {
        self.buckets.get(key).into_iter().flatten().copied()
    }

    /// The whole bucket for `key`, if any fragment currently starts with it.
    #[inline]
    pub fn bucket(&self, key: &str) -> Option<&BTreeSet<FragmentId>> {
        self.buckets.get(key)
    }

    /// Whether `id` is bound under the prefix of `sequence`.
    pub fn contains(&self, id: FragmentId, sequence: &str) -> bool {
        self.key(sequence)
            .and_then(|key| self.buckets.get(key))
            .is_some_and(|bucket| bucket.contains(&id))
    }

    /// Number of distinct live prefixes.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of (prefix, id) bindings.
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings == 0
    }

    /// All buckets, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<FragmentId>)> {
        self.buckets.iter().map(|(key, ids)| (key.as_str(), ids))
    }

    fn insert(&mut self, id: FragmentId, sequence: &str) {
        let key = &sequence[..self.k];
        let fresh = self.buckets.entry(key.to_string()).or_default().insert(id);
        assert!(
            fresh,
            "Invariant violation: {} already bound under prefix '{}'",
            id, key
        );
        self.bindings += 1;
    }

    fn remove(&mut self, id: FragmentId, sequence: &str) {
        let key = &sequence[..self.k];
        let bucket = self.buckets.get_mut(key);
        let removed = bucket.map(|ids| ids.remove(&id)).unwrap_or(false);
        assert!(
            removed,
            "Invariant violation: {} not bound under prefix '{}'",
            id, key
        );
        self.bindings -= 1;

        // INVARIANT: NO_EMPTY_BUCKETS
        if self.buckets.get(key).is_some_and(BTreeSet::is_empty) {
            self.buckets.remove(key);
        }
    }
}
