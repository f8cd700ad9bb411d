//! Sampler properties.

use super::common::random_sequence;
use fragasm::{sample_fragments, SamplerConfig};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reads_are_substrings_in_range(
        len in 50usize..400,
        min in 1usize..20,
        extra in 0usize..20,
        count in 0usize..100,
        seed in any::<u64>(),
    ) {
        let source = random_sequence(len, seed);
        let config = SamplerConfig {
            read_count: count,
            min_read_len: min,
            max_read_len: min + extra,
            seed,
        };
        let reads = sample_fragments(&source, &config).unwrap();
        prop_assert_eq!(reads.len(), count);
        for read in &reads {
            prop_assert!(read.len() >= min && read.len() <= min + extra);
            prop_assert!(source.contains(read.as_str()));
        }
    }

    #[test]
    fn prop_seed_determines_reads(seed in any::<u64>()) {
        let source = random_sequence(200, 1);
        let config = SamplerConfig {
            read_count: 20,
            min_read_len: 10,
            max_read_len: 30,
            seed,
        };
        prop_assert_eq!(
            sample_fragments(&source, &config).unwrap(),
            sample_fragments(&source, &config).unwrap()
        );
    }

    #[test]
    fn prop_oversized_reads_rejected(len in 1usize..100, over in 1usize..50) {
        let source = random_sequence(len, 7);
        let config = SamplerConfig {
            read_count: 1,
            min_read_len: 1,
            max_read_len: len + over,
            seed: 0,
        };
        prop_assert!(sample_fragments(&source, &config).is_err());
    }
}
