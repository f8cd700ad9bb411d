//! Prefix index bookkeeping through the public API.

use fragasm::{FragmentId, PrefixIndex};

fn ids(index: &PrefixIndex, key: &str) -> Vec<FragmentId> {
    index.candidates(key).collect()
}

#[test]
fn test_bucket_and_candidates_agree() {
    let index = PrefixIndex::build(
        [
            (FragmentId(0), "ACGTT"),
            (FragmentId(1), "ACGAA"),
            (FragmentId(2), "GGGCC"),
        ],
        3,
    );
    let bucket = index.bucket("ACG").expect("bucket exists");
    assert_eq!(bucket.iter().copied().collect::<Vec<_>>(), ids(&index, "ACG"));
    assert!(index.bucket("TTT").is_none());
    assert_eq!(index.k(), 3);
}

#[test]
fn test_rebind_sequence_mirrors_merges() {
    // Replays the index side of "ACGTACG" absorbing "TACGTTT" at k = 4.
    let mut index = PrefixIndex::build(
        [(FragmentId(0), "ACGTACG"), (FragmentId(1), "TACGTTT")],
        4,
    );
    index.rebind(FragmentId(0), Some("ACGTACG"), Some("ACGTACGTTT"));
    index.rebind(FragmentId(1), Some("TACGTTT"), None);

    assert_eq!(ids(&index, "ACGT"), vec![FragmentId(0)]);
    assert!(ids(&index, "TACG").is_empty());
    assert_eq!(index.len(), 1);
    assert_eq!(index.bucket_count(), 1);
}

#[test]
fn test_iter_covers_every_binding() {
    let index = PrefixIndex::build(
        [
            (FragmentId(0), "AAAC"),
            (FragmentId(1), "AAAG"),
            (FragmentId(2), "CCCA"),
            (FragmentId(3), "CC"),
        ],
        3,
    );
    let total: usize = index.iter().map(|(_, ids)| ids.len()).sum();
    assert_eq!(total, index.len());
    assert_eq!(total, 3);
    assert!(!index.is_empty());
}

#[test]
fn test_empty_index() {
    let index = PrefixIndex::new(5);
    assert!(index.is_empty());
    assert_eq!(index.bucket_count(), 0);
    assert_eq!(index.key("ACG"), None);
    assert_eq!(index.key("ACGTAC"), Some("ACGTA"));
}

#[test]
#[should_panic(expected = "Invariant violation")]
fn test_stale_rebind_panics() {
    let mut index = PrefixIndex::build([(FragmentId(0), "ACGTACG")], 4);
    // Old sequence does not match what was indexed.
    index.rebind(FragmentId(0), Some("TTTTACG"), Some("ACGTACGTT"));
}
