// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Assembly pipeline: store, merge loop, finalizer.
//!
//! ```text
//! fragments ──► FragmentStore ──► GreedyAssembler ──► finalize ──► Assembly
//!               (arena + index)   (passes to fixed     (contigs,
//!                                  point)               concatenation)
//! ```

mod engine;
mod finalize;
mod store;

pub use engine::*;
pub use finalize::*;
pub use store::*;

use crate::config::AssemblyConfig;
use crate::error::ConfigError;

/// Validate `fragments` against `config` and run them to the fixed point.
pub fn assemble<S: AsRef<str>>(
    fragments: &[S],
    config: &AssemblyConfig,
) -> Result<Assembly, ConfigError> {
    config.validate_for(fragments)?;
    let store = FragmentStore::new(fragments.iter().map(|s| s.as_ref()), config.min_overlap)?;
    Ok(GreedyAssembler::new(store, config.options()).run())
}
