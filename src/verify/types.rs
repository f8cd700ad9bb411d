// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural validation and reconstruction diagnostics.
//!
//! `validate_store` is the non-panicking version of the store contracts: it
//! walks the whole arena and reports the first inconsistency it finds. Tests
//! call it directly; the debug contracts call it and panic on `Err`.
//!
//! `ReconstructionDiagnostics` is what callers get when they have the original
//! sequence on hand (synthetic runs) and want to know how close we got.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assembly::FragmentStore;
use crate::types::{FragmentId, FragmentState};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Slot `slot` holds a fragment with a different id.
    MisplacedFragment { slot: usize, id: FragmentId },
    /// Cached active count disagrees with the arena.
    ActiveCountMismatch { claimed: usize, actual: usize },
    /// An active fragment has an empty sequence.
    EmptyActiveFragment { id: FragmentId },
    /// An indexable active fragment is missing from its prefix bucket.
    MissingBinding { id: FragmentId },
    /// The index holds bindings that no active fragment accounts for.
    StaleBindings { bindings: usize, expected: usize },
    /// A retired fragment points at itself or outside the arena.
    InvalidAbsorber { id: FragmentId, absorbed_by: FragmentId },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::MisplacedFragment { slot, id } => {
                write!(f, "slot {} holds fragment {}", slot, id)
            }
            InvariantError::ActiveCountMismatch { claimed, actual } => {
                write!(f, "active count {} but {} fragments are active", claimed, actual)
            }
            InvariantError::EmptyActiveFragment { id } => {
                write!(f, "active fragment {} is empty", id)
            }
            InvariantError::MissingBinding { id } => {
                write!(f, "fragment {} is not bound under its prefix", id)
            }
            InvariantError::StaleBindings { bindings, expected } => {
                write!(
                    f,
                    "index holds {} bindings, expected {}",
                    bindings, expected
                )
            }
            InvariantError::InvalidAbsorber { id, absorbed_by } => {
                write!(f, "fragment {} retired into invalid {}", id, absorbed_by)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Walk the store and check every structural invariant.
pub fn validate_store(store: &FragmentStore) -> Result<(), InvariantError> {
    let k = store.min_overlap();
    let mut active = 0;
    let mut indexable = 0;

    for (slot, fragment) in store.fragments().iter().enumerate() {
        if fragment.id.as_usize() != slot {
            return Err(InvariantError::MisplacedFragment {
                slot,
                id: fragment.id,
            });
        }
        match &fragment.state {
            FragmentState::Active(sequence) => {
                active += 1;
                if sequence.is_empty() {
                    return Err(InvariantError::EmptyActiveFragment { id: fragment.id });
                }
                if sequence.len() >= k {
                    indexable += 1;
                    if !store.index().contains(fragment.id, sequence) {
                        return Err(InvariantError::MissingBinding { id: fragment.id });
                    }
                }
            }
            FragmentState::Retired { absorbed_by } => {
                if *absorbed_by == fragment.id || absorbed_by.as_usize() >= store.len() {
                    return Err(InvariantError::InvalidAbsorber {
                        id: fragment.id,
                        absorbed_by: *absorbed_by,
                    });
                }
            }
        }
    }

    if active != store.active_count() {
        return Err(InvariantError::ActiveCountMismatch {
            claimed: store.active_count(),
            actual: active,
        });
    }

    // Every indexable fragment was found above, so any surplus is stale.
    if store.index().len() != indexable {
        return Err(InvariantError::StaleBindings {
            bindings: store.index().len(),
            expected: indexable,
        });
    }

    Ok(())
}

/// How an assembled sequence relates to a known original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconstructionDiagnostics {
    pub exact_match: bool,
    /// The assembly is a substring of the original.
    pub assembled_in_reference: bool,
    /// The original is a substring of the assembly.
    pub reference_in_assembled: bool,
}

impl ReconstructionDiagnostics {
    pub fn compare(assembled: &str, reference: &str) -> Self {
        ReconstructionDiagnostics {
            exact_match: assembled == reference,
            assembled_in_reference: reference.contains(assembled),
            reference_in_assembled: assembled.contains(reference),
        }
    }
}
