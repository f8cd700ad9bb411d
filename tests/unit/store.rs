//! Fragment store lifecycle through the public API.

use super::common::{assert_store_well_formed, store};
use fragasm::{ConfigError, FragmentId, FragmentState, FragmentStore};

#[test]
fn test_fresh_store_is_well_formed() {
    let store = store(&["ACGTACG", "TACGTTT", "GG", "CCCCCC"], 4);
    assert_store_well_formed(&store);
    assert_eq!(store.len(), 4);
    assert_eq!(store.active_count(), 4);
    // "GG" is too short to index.
    assert_eq!(store.index().len(), 3);
}

#[test]
fn test_retirement_is_permanent_and_traceable() {
    let mut store = store(&["AAACCC", "CCCGGG", "GGGTTT"], 3);
    store.absorb(FragmentId(0), FragmentId(1), 3, 1);
    store.absorb(FragmentId(0), FragmentId(2), 3, 2);
    assert_store_well_formed(&store);

    assert_eq!(store.sequence(FragmentId(0)), Some("AAACCCGGGTTT"));
    for retired in [FragmentId(1), FragmentId(2)] {
        let fragment = store.get(retired).expect("slot kept");
        assert_eq!(
            fragment.state,
            FragmentState::Retired {
                absorbed_by: FragmentId(0)
            }
        );
        assert_eq!(fragment.sequence(), None);
    }
    assert_eq!(store.active_ids().collect::<Vec<_>>(), vec![FragmentId(0)]);
}

#[test]
fn test_merge_record_describes_commit() {
    let mut store = store(&["ACGTACG", "TACGTTT"], 4);
    let record = store.absorb(FragmentId(0), FragmentId(1), 4, 3);
    assert_eq!(record.pass, 3);
    assert_eq!(record.absorber_len_before, 7);
    assert_eq!(record.absorbed_len, 7);
    assert_eq!(record.merged_len(), 10);
}

#[test]
fn test_get_out_of_range() {
    let store = store(&["ACGT"], 2);
    assert!(store.get(FragmentId(1)).is_none());
    assert_eq!(store.sequence(FragmentId(9)), None);
}

#[test]
fn test_rejects_zero_overlap() {
    assert!(matches!(
        FragmentStore::new(["ACGT"], 0),
        Err(ConfigError::ZeroMinOverlap)
    ));
}

#[test]
fn test_empty_store() {
    let store = FragmentStore::new(Vec::<String>::new(), 3).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.active_count(), 0);
    assert_store_well_formed(&store);
}
