// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synthetic fragment sampling.
//!
//! Draws random substrings of a known source so the engine can be exercised
//! against a reference. Deterministic for a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::SamplerConfig;
use crate::error::ConfigError;

/// Sample `config.read_count` substrings of `source`.
///
/// Each read draws its length uniformly from
/// `[min_read_len, max_read_len]`, then its start uniformly from every
/// position where a read of that length fits.
pub fn sample_fragments(source: &str, config: &SamplerConfig) -> Result<Vec<String>, ConfigError> {
    config.validate_for(source.len())?;
    if !source.is_ascii() {
        return Err(ConfigError::NonAsciiSource);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut reads = Vec::with_capacity(config.read_count);
    for _ in 0..config.read_count {
        let len = rng.gen_range(config.min_read_len..=config.max_read_len);
        let start = rng.gen_range(0..=source.len() - len);
        reads.push(source[start..start + len].to_string());
    }

    debug!(
        reads = reads.len(),
        source_len = source.len(),
        seed = config.seed,
        "sampled fragments"
    );
    Ok(reads)
}

/// Expected coverage depth: total sampled bases over source length.
pub fn expected_coverage(config: &SamplerConfig, source_len: usize) -> f64 {
    if source_len == 0 {
        return 0.0;
    }
    let mean_len = (config.min_read_len + config.max_read_len) as f64 / 2.0;
    config.read_count as f64 * mean_len / source_len as f64
}
