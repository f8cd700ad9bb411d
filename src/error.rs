// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration errors.
//!
//! Everything here is reported before any merging starts. Invariant violations
//! inside the engine are not errors: they panic, because they mean the index
//! and the arena have drifted apart and nothing downstream can be trusted.

use std::path::PathBuf;

use crate::types::FragmentId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum overlap must be at least 1")]
    ZeroMinOverlap,

    #[error(
        "minimum overlap {min_overlap} exceeds the shortest fragment \
         ({id} has length {shortest})"
    )]
    MinOverlapExceedsShortest {
        min_overlap: usize,
        shortest: usize,
        id: FragmentId,
    },

    #[error("too many fragments ({count}); ids are 32-bit")]
    TooManyFragments { count: usize },

    #[error("fragment {id} is empty")]
    EmptyFragment { id: FragmentId },

    #[error("fragment {id} contains non-ASCII characters")]
    NonAsciiFragment { id: FragmentId },

    #[error("invalid read length range {min}..={max}")]
    InvalidLengthRange { min: usize, max: usize },

    #[error("read length upper bound {max} exceeds source length {source_len}")]
    ReadLengthExceedsSource { max: usize, source_len: usize },

    #[error("source sequence is empty after normalization")]
    EmptySource,

    #[error("source sequence contains non-ASCII characters")]
    NonAsciiSource,

    #[error("failed to read config {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON in {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
