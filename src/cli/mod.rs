// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fragasm command-line interface.
//!
//! Two subcommands: `assemble` runs the engine on fragments you already have,
//! `simulate` samples fragments from a known source first and reports how
//! close the reassembly got. Flags override values from `--config`.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fragasm",
    about = "Greedy overlap assembly of short sequence fragments",
    version
)]
pub struct Cli {
    /// Only log warnings and errors (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble fragments read from a file (one per line)
    Assemble {
        /// Fragment file, or `-` for stdin. Blank lines and `>` headers are skipped
        #[arg(short, long)]
        fragments: PathBuf,

        /// Minimum suffix/prefix overlap for a merge
        #[arg(short = 'k', long)]
        min_overlap: Option<usize>,

        /// Stop after this many passes even if merges are still happening
        #[arg(long)]
        max_passes: Option<usize>,

        /// JSON config file (camelCase keys)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Known original sequence to compare the result against
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// Print the JSON report instead of the assembled sequence
        #[arg(long)]
        json: bool,
    },

    /// Sample fragments from a source sequence, reassemble, and compare
    Simulate {
        /// Source sequence file (FASTA headers and non-ACGTN characters are dropped)
        #[arg(short, long)]
        source: PathBuf,

        /// Number of fragments to sample
        #[arg(long)]
        reads: Option<usize>,

        /// Shortest fragment length
        #[arg(long)]
        min_len: Option<usize>,

        /// Longest fragment length
        #[arg(long)]
        max_len: Option<usize>,

        /// Sampler seed
        #[arg(long)]
        seed: Option<u64>,

        /// Minimum suffix/prefix overlap for a merge
        #[arg(short = 'k', long)]
        min_overlap: Option<usize>,

        /// JSON config file (camelCase keys)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the JSON report instead of the summary box
        #[arg(long)]
        json: bool,
    },
}
