//! Worked examples and the synthetic reconstruction run.

use std::collections::HashSet;

use super::common::{
    assert_assembly_sound, fragments, random_sequence, reference_sampler, run, run_owned,
    tiled_fragments, SOURCE_LEN, SOURCE_SEED,
};
use fragasm::{assemble, sample_fragments, AssemblyConfig, FragmentId};

// ============================================================================
// WORKED EXAMPLES
// ============================================================================

#[test]
fn test_simple_overlap_merges() {
    let input = fragments(&["ACGTACG", "TACGTTT"]);
    let assembly = run(&["ACGTACG", "TACGTTT"], 4);
    assert_assembly_sound(&input, &assembly);

    assert_eq!(assembly.sequence, "ACGTACGTTT");
    assert!(assembly.is_single_contig());
    assert_eq!(assembly.merges.len(), 1);
    assert_eq!(assembly.merges[0].absorber, FragmentId(0));
    assert_eq!(assembly.merges[0].absorbed, FragmentId(1));
    assert_eq!(assembly.merges[0].overlap, 4);
    // One merging pass, one quiet pass to confirm the fixed point.
    assert_eq!(assembly.pass_count(), 2);
    assert!(assembly.converged);
}

#[test]
fn test_identical_fragments_collapse() {
    let assembly = run(&["AAAA", "AAAA"], 4);
    assert_eq!(assembly.sequence, "AAAA");
    assert_eq!(assembly.contig_count(), 1);
    assert_eq!(assembly.merges[0].overlap, 4);
}

#[test]
fn test_disjoint_fragments_stay_apart() {
    let assembly = run(&["GGGG", "CCCC"], 4);
    assert!(assembly.merges.is_empty());
    assert_eq!(assembly.contig_count(), 2);
    // Equal lengths, so the lower id goes first.
    assert_eq!(assembly.sequence, "GGGGCCCC");

    let diag = assembly.diagnostics("GGGGTTTTCCCC");
    assert!(!diag.exact_match);
    assert!(!diag.assembled_in_reference);
    assert!(!diag.reference_in_assembled);
}

// ============================================================================
// RECONSTRUCTION
// ============================================================================

#[test]
fn test_tiled_reads_reassemble_exactly() {
    let source = random_sequence(500, 3);
    let tiles = tiled_fragments(&source, 60, 20);
    assert_eq!(tiles.len(), 12);

    let assembly = run_owned(&tiles, 20);
    assert_assembly_sound(&tiles, &assembly);
    assert_eq!(assembly.sequence, source);
    assert_eq!(assembly.merge_count(), 11);
    // Each pass halves the chain: 12 → 6 → 3 → 2 → 1, then a quiet pass.
    assert_eq!(assembly.pass_count(), 5);
    assert!(assembly.diagnostics(&source).exact_match);
}

#[test]
fn test_pass_cap_leaves_partial_chain() {
    let source = random_sequence(500, 3);
    let tiles = tiled_fragments(&source, 60, 20);
    let config = AssemblyConfig {
        min_overlap: 20,
        max_passes: Some(1),
        ..AssemblyConfig::default()
    };

    let assembly = assemble(&tiles, &config).unwrap();
    assert!(!assembly.converged);
    assert_eq!(assembly.contig_count(), 6);
    assert_assembly_sound(&tiles, &assembly);
}

/// 2000 reads of 100-150 bases from a 1200-base source, k = 20.
///
/// Exact reconstruction is not expected: a partner is only found when its
/// first k bases equal the absorber's last k, so most true overlaps are
/// longer than anything the lookup can see.
#[test]
fn test_sampled_source_reconstruction_bounds() {
    let source = random_sequence(SOURCE_LEN, SOURCE_SEED);
    let k = 20;

    // Every k-mer in the source is unique, so every merge must be a true one.
    let kmers: HashSet<&str> = (0..=source.len() - k).map(|i| &source[i..i + k]).collect();
    assert_eq!(kmers.len(), source.len() - k + 1, "source has a repeated {}-mer", k);

    let sampler = reference_sampler();
    let reads = sample_fragments(&source, &sampler).unwrap();
    assert_eq!(reads.len(), sampler.read_count);

    let assembly = run_owned(&reads, k);
    assert_assembly_sound(&reads, &assembly);
    assert!(assembly.converged);

    let total: usize = reads.iter().map(String::len).sum();
    assert!(assembly.sequence.len() <= total);
    let longest_read = reads.iter().map(String::len).max().unwrap();
    assert!(assembly.contigs[0].len() >= longest_read);
    for contig in &assembly.contigs {
        assert!(
            source.contains(contig.sequence.as_str()),
            "contig {} is not a substring of the source",
            contig.id
        );
    }

    let diag = assembly.diagnostics(&source);
    assert_eq!(diag.exact_match, assembly.sequence == source);
    assert_eq!(
        diag.assembled_in_reference,
        source.contains(assembly.sequence.as_str())
    );
    assert_eq!(
        diag.reference_in_assembled,
        assembly.sequence.contains(source.as_str())
    );
}

#[test]
fn test_sampled_run_is_reproducible() {
    let source = random_sequence(SOURCE_LEN, SOURCE_SEED);
    let reads = sample_fragments(&source, &reference_sampler()).unwrap();
    let first = run_owned(&reads, 20);
    let second = run_owned(&reads, 20);
    assert_eq!(first, second);
}
