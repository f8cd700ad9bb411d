// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serializable run summary.
//!
//! Everything a caller needs to judge a run without holding on to the full
//! [`Assembly`]: counts, lengths, convergence, and a CRC32 digest of the
//! output so two runs can be compared at a glance.

use serde::{Deserialize, Serialize};

use crate::assembly::Assembly;
use crate::verify::ReconstructionDiagnostics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyReport {
    pub input_count: usize,
    pub input_total_len: usize,
    pub min_overlap: usize,
    pub passes: usize,
    pub merges: usize,
    pub converged: bool,
    pub assembled_len: usize,
    pub contig_count: usize,
    pub contig_lengths: Vec<usize>,
    /// Present only when a reference sequence was supplied.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub diagnostics: Option<ReconstructionDiagnostics>,
    /// CRC32 of the assembled sequence, lowercase hex.
    pub digest: String,
}

impl AssemblyReport {
    pub fn new(assembly: &Assembly, reference: Option<&str>) -> Self {
        AssemblyReport {
            input_count: assembly.input_count,
            input_total_len: assembly.input_total_len,
            min_overlap: assembly.min_overlap,
            passes: assembly.pass_count(),
            merges: assembly.merge_count(),
            converged: assembly.converged,
            assembled_len: assembly.sequence.len(),
            contig_count: assembly.contig_count(),
            contig_lengths: assembly.contig_lengths(),
            diagnostics: reference.map(|r| assembly.diagnostics(r)),
            digest: digest(&assembly.sequence),
        }
    }

    /// Pretty JSON for stdout.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// CRC32 of `sequence` as eight lowercase hex digits.
pub fn digest(sequence: &str) -> String {
    format!("{:08x}", crc32fast::hash(sequence.as_bytes()))
}
