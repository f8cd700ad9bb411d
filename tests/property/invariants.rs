//! Engine invariants under random input.

use super::common::{assert_assembly_sound, assert_store_well_formed, run_owned};
use super::{fragment_strategy, repetitive_strategy, sampled_strategy};
use fragasm::{alphabet_of, AssemblyOptions, GreedyAssembler};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_assembly_is_sound(fragments in fragment_strategy(), k in 1usize..8) {
        let assembly = run_owned(&fragments, k);
        assert_assembly_sound(&fragments, &assembly);
    }

    #[test]
    fn prop_repetitive_input_is_sound(fragments in repetitive_strategy(), k in 1usize..4) {
        let assembly = run_owned(&fragments, k);
        assert_assembly_sound(&fragments, &assembly);
        prop_assert!(assembly.pass_count() <= fragments.len());
    }

    #[test]
    fn prop_alphabet_preserved(fragments in fragment_strategy(), k in 1usize..8) {
        let assembly = run_owned(&fragments, k);
        let inputs = alphabet_of(fragments.iter().map(String::as_str));
        prop_assert!(alphabet_of([assembly.sequence.as_str()]).is_subset(&inputs));
    }

    #[test]
    fn prop_length_equality_only_without_merges(fragments in fragment_strategy(), k in 1usize..8) {
        let total: usize = fragments.iter().map(String::len).sum();
        let assembly = run_owned(&fragments, k);
        let saved: usize = assembly.merges.iter().map(|m| m.overlap).sum();
        prop_assert_eq!(assembly.sequence.len(), total - saved);
        prop_assert_eq!(assembly.sequence.len() == total, assembly.merges.is_empty());
    }

    #[test]
    fn prop_every_overlap_clears_threshold(fragments in repetitive_strategy(), k in 1usize..4) {
        let assembly = run_owned(&fragments, k);
        for merge in &assembly.merges {
            prop_assert!(merge.overlap >= k);
            prop_assert_ne!(merge.absorber, merge.absorbed);
        }
    }

    #[test]
    fn prop_passes_shrink_monotonically(fragments in fragment_strategy(), k in 1usize..8) {
        let mut engine = GreedyAssembler::from_fragments(
            fragments.iter().cloned(), k, AssemblyOptions::default()
        ).unwrap();
        let mut active = engine.store().active_count();
        loop {
            let stats = engine.step_pass();
            assert_store_well_formed(engine.store());
            prop_assert!(stats.active_after <= active);
            if stats.merges > 0 {
                prop_assert!(stats.active_after < active);
            }
            active = stats.active_after;
            if stats.merges == 0 {
                break;
            }
            prop_assert!(engine.passes().len() <= fragments.len());
        }
    }

    #[test]
    fn prop_deterministic(fragments in repetitive_strategy(), k in 1usize..4) {
        let a = run_owned(&fragments, k);
        let b = run_owned(&fragments, k);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_sampled_reads_survive((_source, reads) in sampled_strategy()) {
        let assembly = run_owned(&reads, 12);
        assert_assembly_sound(&reads, &assembly);
        prop_assert!(assembly.converged);
    }
}
