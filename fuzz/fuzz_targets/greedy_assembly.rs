// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full merge loop.
//!
//! Arbitrary fragment sets go in, the structural checks run after every pass,
//! and the finished assembly must keep every input and never grow.

#![no_main]

use arbitrary::Arbitrary;
use fragasm::{validate_store, AssemblyOptions, GreedyAssembler};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct AssemblyInput {
    fragments: Vec<Vec<u8>>,
    min_overlap: u8,
}

fuzz_target!(|input: AssemblyInput| {
    let fragments: Vec<String> = input
        .fragments
        .iter()
        .take(64)
        .filter(|f| !f.is_empty())
        .map(|f| {
            f.iter()
                .take(40)
                .map(|b| b"ACGTN"[(b % 5) as usize] as char)
                .collect()
        })
        .collect();
    let k = (input.min_overlap as usize % 8) + 1;

    let Ok(mut engine) =
        GreedyAssembler::from_fragments(fragments.iter().cloned(), k, AssemblyOptions::default())
    else {
        return;
    };

    loop {
        let stats = engine.step_pass();
        if let Err(err) = validate_store(engine.store()) {
            panic!("store drifted after pass {}: {}", stats.pass, err);
        }
        if stats.merges == 0 {
            break;
        }
        assert!(stats.pass <= fragments.len(), "too many passes");
    }

    let assembly = engine.run();
    let total: usize = fragments.iter().map(String::len).sum();
    assert!(assembly.sequence.len() <= total);
    for fragment in &fragments {
        assert!(assembly.contigs.iter().any(|c| c.sequence.contains(fragment.as_str())));
    }
});
