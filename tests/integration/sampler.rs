//! Drawing reads from a source sequence.

use super::common::{random_sequence, reference_sampler, SOURCE_LEN, SOURCE_SEED};
use fragasm::sampler::expected_coverage;
use fragasm::{sample_fragments, sequence_from_fasta, ConfigError, SamplerConfig};

#[test]
fn test_reference_sampling() {
    let source = random_sequence(SOURCE_LEN, SOURCE_SEED);
    let config = reference_sampler();
    let reads = sample_fragments(&source, &config).unwrap();

    assert_eq!(reads.len(), 2000);
    for read in &reads {
        assert!((100..=150).contains(&read.len()), "read length {}", read.len());
        assert!(source.contains(read.as_str()));
    }
    let coverage = expected_coverage(&config, source.len());
    assert!((coverage - 2000.0 * 125.0 / 1200.0).abs() < 1e-9);
}

#[test]
fn test_different_seeds_differ() {
    let source = random_sequence(SOURCE_LEN, SOURCE_SEED);
    let a = sample_fragments(&source, &reference_sampler()).unwrap();
    let b = sample_fragments(
        &source,
        &SamplerConfig {
            seed: 43,
            ..reference_sampler()
        },
    )
    .unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_fasta_source_is_normalized() {
    let source = sequence_from_fasta(">chr1 synthetic\nacgtacgtac\nGTTTNNACGA\n\n");
    assert_eq!(source, "ACGTACGTACGTTTNNACGA");

    let config = SamplerConfig {
        read_count: 5,
        min_read_len: 20,
        max_read_len: 20,
        seed: 0,
    };
    let reads = sample_fragments(&source, &config).unwrap();
    assert!(reads.iter().all(|r| r == &source));
}

#[test]
fn test_invalid_sampler_settings() {
    let source = random_sequence(50, 1);
    let too_long = SamplerConfig {
        max_read_len: 51,
        ..reference_sampler()
    };
    assert!(matches!(
        sample_fragments(&source, &too_long),
        Err(ConfigError::InvalidLengthRange { .. }) | Err(ConfigError::ReadLengthExceedsSource { .. })
    ));

    let inverted = SamplerConfig {
        read_count: 1,
        min_read_len: 30,
        max_read_len: 10,
        seed: 0,
    };
    assert!(matches!(
        sample_fragments(&source, &inverted),
        Err(ConfigError::InvalidLengthRange { min: 30, max: 10 })
    ));

    assert!(matches!(
        sample_fragments("", &reference_sampler()),
        Err(ConfigError::EmptySource)
    ));
}
