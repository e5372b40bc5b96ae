use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wortgenerator::{sample, validate_count, WortError};

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn draws_subset_of_three_nouns() {
    let list = words(&["Haus", "Baum", "Auto"]);
    let mut rng = StdRng::seed_from_u64(7);
    let drawn = sample(&list, 2, &mut rng).unwrap();
    assert_eq!(drawn.len(), 2);
    assert_ne!(drawn[0], drawn[1]);
    assert!(drawn.iter().all(|w| list.contains(w)));
}

#[test]
fn whole_list_is_a_permutation() {
    let list = words(&["Haus", "Baum", "Auto"]);
    let mut rng = StdRng::seed_from_u64(1);
    let drawn: HashSet<_> = sample(&list, 3, &mut rng).unwrap().into_iter().collect();
    let expected: HashSet<_> = list.into_iter().collect();
    assert_eq!(drawn, expected);
}

#[test]
fn too_many_requested() {
    let list = words(&["Haus", "Baum"]);
    let mut rng = StdRng::seed_from_u64(1);
    match sample(&list, 3, &mut rng) {
        Err(WortError::InsufficientCandidates {
            requested,
            available,
        }) => {
            assert_eq!(requested, 3);
            assert_eq!(available, 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn same_seed_same_draw() {
    let list: Vec<String> = (0..100).map(|i| format!("Wort{i}")).collect();
    let a = sample(&list, 10, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = sample(&list, 10, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn count_bounds() {
    assert_eq!(validate_count(1, 25).unwrap(), 1);
    assert_eq!(validate_count(25, 25).unwrap(), 25);
    assert!(matches!(
        validate_count(0, 25),
        Err(WortError::InvalidCount { requested: 0, max: 25 })
    ));
    assert!(matches!(
        validate_count(26, 25),
        Err(WortError::InvalidCount { requested: 26, max: 25 })
    ));
}

proptest! {
    #[test]
    fn sample_returns_n_distinct_members(
        size in 1usize..60,
        pick in 0usize..60,
        seed in any::<u64>(),
    ) {
        let list: Vec<String> = (0..size).map(|i| format!("Nomen{i}")).collect();
        let n = pick % (size + 1);
        let drawn = sample(&list, n, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(drawn.len(), n);
        let distinct: HashSet<_> = drawn.iter().collect();
        prop_assert_eq!(distinct.len(), n);
        prop_assert!(drawn.iter().all(|w| list.contains(w)));
    }

    #[test]
    fn oversized_request_fails(size in 0usize..30, extra in 1usize..10) {
        let list: Vec<String> = (0..size).map(|i| format!("Nomen{i}")).collect();
        let result = sample(&list, size + extra, &mut StdRng::seed_from_u64(0));
        let is_insufficient = matches!(result, Err(WortError::InsufficientCandidates { .. }));
        prop_assert!(is_insufficient);
    }
}
