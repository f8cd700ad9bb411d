// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of an assembly run.
//!
//! Fragments live in an arena indexed by `FragmentId`. Nothing is ever removed
//! from the arena: a fragment that gets absorbed flips to `Retired` and keeps
//! its slot, so identifiers stay meaningful in logs and merge records long
//! after the fragment itself stopped mattering.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Fragment**: `Active` sequences are non-empty ASCII. `Retired` has no sequence.
//!
//! - **Lifecycle**: `Active → Retired` happens at most once. There is no way back.
//!
//! - **FragmentId**: assigned sequentially at store construction, never reused.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Stable fragment identifier.
///
/// The numeric order doubles as the tie-break order when two candidates offer
/// the same overlap: the smaller id wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct FragmentId(pub u32);

impl FragmentId {
    /// Create a new FragmentId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, num_fragments: usize) -> Option<Self> {
        if (id as usize) < num_fragments {
            Some(FragmentId(id))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for arena indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for FragmentId {
    fn from(id: u32) -> Self {
        FragmentId(id)
    }
}

impl From<FragmentId> for usize {
    fn from(id: FragmentId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// FRAGMENTS
// =============================================================================

/// Lifecycle state of a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragmentState {
    /// Still eligible for merging. Holds the current (possibly extended) sequence.
    Active(String),
    /// Absorbed into another fragment. The sequence is gone for good.
    Retired { absorbed_by: FragmentId },
}

/// One slot in the fragment arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub id: FragmentId,
    pub state: FragmentState,
}

impl Fragment {
    pub fn active(id: FragmentId, sequence: String) -> Self {
        Fragment {
            id,
            state: FragmentState::Active(sequence),
        }
    }

    /// Current sequence, or `None` once retired.
    #[inline]
    pub fn sequence(&self) -> Option<&str> {
        match &self.state {
            FragmentState::Active(seq) => Some(seq),
            FragmentState::Retired { .. } => None,
        }
    }

    /// Length of the current sequence (0 when retired).
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence().map_or(0, str::len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.state, FragmentState::Active(_))
    }

    /// The fragment that absorbed this one, if any.
    pub fn absorbed_by(&self) -> Option<FragmentId> {
        match self.state {
            FragmentState::Retired { absorbed_by } => Some(absorbed_by),
            FragmentState::Active(_) => None,
        }
    }
}

// =============================================================================
// RUN RECORDS
// =============================================================================

/// One committed merge: `absorber` swallowed `absorbed` across `overlap` bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRecord {
    /// 1-based pass in which the merge happened.
    pub pass: usize,
    pub absorber: FragmentId,
    pub absorbed: FragmentId,
    pub overlap: usize,
    pub absorber_len_before: usize,
    pub absorbed_len: usize,
}

impl MergeRecord {
    /// Length of the absorber after the merge.
    #[inline]
    pub fn merged_len(&self) -> usize {
        self.absorber_len_before + self.absorbed_len - self.overlap
    }
}

/// Summary of one full scan over the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassStats {
    /// 1-based pass number.
    pub pass: usize,
    pub merges: usize,
    /// Active fragments remaining when the pass finished.
    pub active_after: usize,
}

/// A fragment that survived to the fixed point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contig {
    pub id: FragmentId,
    pub sequence: String,
}

impl Contig {
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
