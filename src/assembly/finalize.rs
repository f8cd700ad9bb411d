// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contig collection at the fixed point.
//!
//! Surviving fragments are ordered by length (longest first, ties by id) and
//! concatenated. The ordering is a heuristic: with more than one contig the
//! output is all surviving material, not a reconstruction.

use serde::{Deserialize, Serialize};

use super::store::FragmentStore;
use crate::types::{Contig, MergeRecord, PassStats};
use crate::verify::ReconstructionDiagnostics;

/// Active fragments as contigs, longest first, ties by ascending id.
pub fn finalize(store: &FragmentStore) -> Vec<Contig> {
    let mut contigs: Vec<Contig> = store
        .fragments()
        .iter()
        .filter_map(|f| {
            f.sequence().map(|seq| Contig {
                id: f.id,
                sequence: seq.to_string(),
            })
        })
        .collect();
    contigs.sort_by(|a, b| b.len().cmp(&a.len()).then(a.id.cmp(&b.id)));
    contigs
}

/// Join contigs in the order given.
pub fn concatenate(contigs: &[Contig]) -> String {
    let mut out = String::with_capacity(contigs.iter().map(Contig::len).sum());
    for contig in contigs {
        out.push_str(&contig.sequence);
    }
    out
}

/// Outcome of a full run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assembly {
    /// Contigs concatenated in finalizer order.
    pub sequence: String,
    pub contigs: Vec<Contig>,
    pub passes: Vec<PassStats>,
    pub merges: Vec<MergeRecord>,
    /// `false` only when a pass cap stopped the loop early.
    pub converged: bool,
    pub input_count: usize,
    pub input_total_len: usize,
    pub min_overlap: usize,
}

impl Assembly {
    #[inline]
    pub fn contig_count(&self) -> usize {
        self.contigs.len()
    }

    pub fn contig_lengths(&self) -> Vec<usize> {
        self.contigs.iter().map(Contig::len).collect()
    }

    /// Whether everything collapsed into one contig.
    #[inline]
    pub fn is_single_contig(&self) -> bool {
        self.contigs.len() == 1
    }

    #[inline]
    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }

    #[inline]
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Compare the assembled sequence against a known original.
    pub fn diagnostics(&self, reference: &str) -> ReconstructionDiagnostics {
        ReconstructionDiagnostics::compare(&self.sequence, reference)
    }
}
