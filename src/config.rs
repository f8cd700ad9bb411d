// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run configuration.
//!
//! Loaded from a JSON manifest (every field optional) and then overridden by
//! command-line flags. Validation against the actual fragments happens in
//! [`AssemblyConfig::validate_for`], right before a run starts.
//!
//! ```json
//! {
//!   "minOverlap": 20,
//!   "maxPasses": 500,
//!   "sampler": { "readCount": 2000, "minReadLen": 100, "maxReadLen": 150, "seed": 42 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::assembly::AssemblyOptions;
use crate::error::ConfigError;
use crate::types::FragmentId;

pub const DEFAULT_MIN_OVERLAP: usize = 20;
pub const DEFAULT_READ_COUNT: usize = 2000;
pub const DEFAULT_MIN_READ_LEN: usize = 100;
pub const DEFAULT_MAX_READ_LEN: usize = 150;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AssemblyConfig {
    pub min_overlap: usize,
    pub max_passes: Option<usize>,
    pub sampler: SamplerConfig,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        AssemblyConfig {
            min_overlap: DEFAULT_MIN_OVERLAP,
            max_passes: None,
            sampler: SamplerConfig::default(),
        }
    }
}

/// How synthetic fragments are drawn from a source sequence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SamplerConfig {
    pub read_count: usize,
    /// Inclusive bounds on each read's length.
    pub min_read_len: usize,
    pub max_read_len: usize,
    pub seed: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            read_count: DEFAULT_READ_COUNT,
            min_read_len: DEFAULT_MIN_READ_LEN,
            max_read_len: DEFAULT_MAX_READ_LEN,
            seed: DEFAULT_SEED,
        }
    }
}

impl AssemblyConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn options(&self) -> AssemblyOptions {
        AssemblyOptions {
            max_passes: self.max_passes,
        }
    }

    /// Check the overlap threshold against the fragments it will run on.
    ///
    /// `min_overlap` must be at least 1 and no longer than the shortest
    /// fragment. Empty input passes; there is nothing to be too short.
    pub fn validate_for<S: AsRef<str>>(&self, fragments: &[S]) -> Result<(), ConfigError> {
        if self.min_overlap == 0 {
            return Err(ConfigError::ZeroMinOverlap);
        }

        let shortest = fragments
            .iter()
            .enumerate()
            .map(|(slot, seq)| (slot, seq.as_ref().len()))
            .min_by_key(|&(slot, len)| (len, slot));

        if let Some((slot, shortest)) = shortest {
            if self.min_overlap > shortest {
                let id = u32::try_from(slot)
                    .map(FragmentId)
                    .map_err(|_| ConfigError::TooManyFragments { count: fragments.len() })?;
                return Err(ConfigError::MinOverlapExceedsShortest {
                    min_overlap: self.min_overlap,
                    shortest,
                    id,
                });
            }
        }

        Ok(())
    }
}

impl SamplerConfig {
    /// Length bounds must be non-zero, ordered, and fit inside the source.
    pub fn validate_for(&self, source_len: usize) -> Result<(), ConfigError> {
        if source_len == 0 {
            return Err(ConfigError::EmptySource);
        }
        if self.min_read_len == 0 || self.min_read_len > self.max_read_len {
            return Err(ConfigError::InvalidLengthRange {
                min: self.min_read_len,
                max: self.max_read_len,
            });
        }
        if self.max_read_len > source_len {
            return Err(ConfigError::ReadLengthExceedsSource {
                max: self.max_read_len,
                source_len,
            });
        }
        Ok(())
    }
}
