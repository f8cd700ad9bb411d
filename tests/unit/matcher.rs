//! Overlap matcher edge cases.

use fragasm::{longest_overlap, suffix_matches_prefix};

#[test]
fn test_reference_pair() {
    assert_eq!(longest_overlap("ACGTACG", "TACGTTT", 4), 4);
    assert_eq!(longest_overlap("TACGTTT", "ACGTACG", 4), 0);
}

#[test]
fn test_full_length_overlap() {
    assert_eq!(longest_overlap("AAAA", "AAAA", 4), 4);
    assert_eq!(longest_overlap("ACAGACA", "ACAGACA", 3), 7);
}

#[test]
fn test_prefers_longest_over_minimum() {
    // "GA", "GAGA" and "GAGAGA" all match; the longest wins.
    assert_eq!(longest_overlap("TTGAGAGA", "GAGAGACC", 2), 6);
}

#[test]
fn test_gate_rejects_before_scanning() {
    // A 6-byte overlap exists but the 3-byte gate does not hold.
    assert_eq!(longest_overlap("CCCACGTAC", "ACGTACGGG", 3), 0);
    assert_eq!(longest_overlap("CCCACGTAC", "ACGTACGGG", 2), 6);
}

#[test]
fn test_shorter_than_minimum() {
    assert_eq!(longest_overlap("AC", "ACGT", 3), 0);
    assert_eq!(longest_overlap("ACGT", "GT", 3), 0);
    assert_eq!(longest_overlap("", "", 1), 0);
}

#[test]
fn test_zero_minimum_never_matches() {
    assert_eq!(longest_overlap("ACGT", "GTAA", 0), 0);
}

#[test]
fn test_case_sensitive() {
    assert_eq!(longest_overlap("ACGT", "gtaa", 2), 0);
}

#[test]
fn test_suffix_matches_prefix() {
    assert!(suffix_matches_prefix(b"ACGT", b"GTAA", 2));
    assert!(!suffix_matches_prefix(b"ACGT", b"GTAA", 3));
    assert!(suffix_matches_prefix(b"ACGT", b"ACGT", 4));
}
