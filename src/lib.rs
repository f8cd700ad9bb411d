//! Greedy overlap assembly of short sequence fragments.
//!
//! Given many short fragments sampled from an unknown sequence, repeatedly
//! merge the pair with the longest suffix/prefix overlap until nothing else
//! merges, then concatenate what is left.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  overlap.rs │     │ index/prefix │     │  assembly/store  │
//! │ (longest_   │     │ (k-prefix →  │────▶│ (arena + index,  │
//! │  overlap)   │     │  fragment ids│     │  absorb commit)  │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                  assembly/engine.rs                     │
//! │      (GreedyAssembler: passes until a fixed point)      │
//! └─────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────┐     ┌──────────────────────────┐
//! │ assembly/finalize.rs │────▶│ report.rs, verify/       │
//! │ (contigs, Assembly)  │     │ (digest, diagnostics)    │
//! └──────────────────────┘     └──────────────────────────┘
//! ```
//!
//! # Properties
//!
//! | Property             | Where it is enforced                              |
//! |----------------------|---------------------------------------------------|
//! | Alphabet preserved   | `verify::contracts::check_alphabet_preserved`     |
//! | Length bound         | `verify::contracts::check_length_bound`           |
//! | Merge correctness    | `verify::contracts::check_merge_correct`          |
//! | Index mirrors arena  | `verify::validate_store`, after every pass        |
//! | Monotonic shrinkage  | `GreedyAssembler::step_pass`                      |
//! | Termination          | zero-merge pass ends the loop                     |
//!
//! # Usage
//!
//! ```
//! use fragasm::{assemble, AssemblyConfig};
//!
//! let config = AssemblyConfig { min_overlap: 4, ..AssemblyConfig::default() };
//! let assembly = assemble(&["ACGTACG", "TACGTTT"], &config).unwrap();
//! assert_eq!(assembly.sequence, "ACGTACGTTT");
//! assert!(assembly.is_single_contig());
//! ```

// Module declarations
pub mod assembly;
pub mod config;
pub mod error;
pub mod index;
mod overlap;
pub mod report;
pub mod sampler;
pub mod testing;
mod types;
mod utils;
pub mod verify;

// Re-exports for public API
pub use assembly::{
    assemble, Assembly, AssemblyOptions, FragmentStore, GreedyAssembler,
    PARALLEL_CANDIDATE_THRESHOLD,
};
pub use config::{AssemblyConfig, SamplerConfig};
pub use error::ConfigError;
pub use index::PrefixIndex;
pub use overlap::{longest_overlap, suffix_matches_prefix};
pub use report::AssemblyReport;
pub use sampler::sample_fragments;
pub use types::{Contig, Fragment, FragmentId, FragmentState, MergeRecord, PassStats};
pub use utils::{
    alphabet_of, fragments_from_lines, normalize_sequence, sequence_from_fasta, NUCLEOTIDES,
};
pub use verify::{validate_store, InvariantError, ReconstructionDiagnostics};
