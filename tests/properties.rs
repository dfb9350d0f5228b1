//! Property tests and randomized workloads.

use digestbloom::hash::reduce_be;
use digestbloom::prelude::*;
use proptest::prelude::*;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// `count` distinct random 10-character alphanumeric strings not in `exclude`.
fn random_words(rng: &mut StdRng, count: usize, exclude: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(count);
    let mut words = Vec::with_capacity(count);
    while words.len() < count {
        let word: String = (0..10)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect();
        if !exclude.contains(&word) && seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}

proptest! {
    #[test]
    fn no_false_negatives(items in prop::collection::vec(any::<Vec<u8>>(), 0..100)) {
        let mut bitset = BitsetFilter::new(1000, 0.01).unwrap();
        let mut counter = CounterFilter::new(1000, 0.01).unwrap();

        for item in &items {
            bitset.add(item);
            counter.add(item);
        }

        for item in &items {
            prop_assert!(bitset.query(item));
            prop_assert!(counter.query(item));
        }
    }

    #[test]
    fn bitset_add_idempotent(item in any::<Vec<u8>>(), others in prop::collection::vec(".*", 0..20)) {
        let mut filter = BitsetFilter::new(200, 0.05).unwrap();
        filter.add_all(&others);
        filter.add(&item);
        let snapshot = filter.as_bytes().to_vec();

        filter.add(&item);
        prop_assert_eq!(filter.as_bytes(), &snapshot[..]);
    }

    #[test]
    fn counter_sum_tracks_adds_and_deletes(items in prop::collection::vec(".{0,16}", 1..60)) {
        let mut filter = CounterFilter::new(1000, 0.01).unwrap();
        let k = filter.hash_count() as u64;

        for (added, item) in items.iter().enumerate() {
            filter.add(item);
            prop_assert_eq!(filter.counter_sum(), (added as u64 + 1) * k);
        }

        for item in &items {
            let before = filter.counter_sum();
            prop_assert!(filter.delete(item));
            prop_assert_eq!(filter.counter_sum(), before - k);
        }

        prop_assert_eq!(filter.counter_sum(), 0);
        prop_assert!(filter.is_empty());
    }

    #[test]
    fn rejected_delete_changes_nothing(present in ".{1,12}", absent in ".{1,12}") {
        prop_assume!(present != absent);

        let mut filter = CounterFilter::new(500, 0.01).unwrap();
        filter.add(&present);
        let before = filter.counters().to_vec();

        prop_assert!(!filter.delete(&absent));
        prop_assert_eq!(filter.counters(), &before[..]);
        prop_assert!(filter.query(&present));
    }

    #[test]
    fn slot_index_in_range(bytes in any::<Vec<u8>>(), modulus in 1usize..1_000_000, seed in 0usize..5) {
        let family = HashFamily::standard();
        prop_assert!(family.slot_index(&bytes, seed, modulus) < modulus);
    }

    #[test]
    fn reduce_be_matches_native(value in any::<u128>(), modulus in 1usize..usize::MAX) {
        let expected = (value % modulus as u128) as usize;
        prop_assert_eq!(reduce_be(&value.to_be_bytes(), modulus), expected);
    }
}

#[test]
fn test_false_positive_rate_near_target() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let added = random_words(&mut rng, 1000, &HashSet::new());
    let added_set: HashSet<String> = added.iter().cloned().collect();
    let absent = random_words(&mut rng, 1000, &added_set);

    let mut bitset = BitsetFilter::new(1000, 0.07).unwrap();
    let mut counter = CounterFilter::new(1000, 0.07).unwrap();
    bitset.add_all(&added);
    counter.add_all(&added);

    assert!(added.iter().all(|w| bitset.query(w) && counter.query(w)));

    let bitset_fp = absent.iter().filter(|w| bitset.query(w)).count();
    let counter_fp = absent.iter().filter(|w| counter.query(w)).count();

    // Same parameters and hashes, so the same slots are occupied.
    assert_eq!(bitset_fp, counter_fp);
    assert!(bitset_fp <= 210, "{} false positives, expected about 70", bitset_fp);
}

#[test]
fn test_delete_everything_in_insertion_order() {
    let mut rng = StdRng::seed_from_u64(1);
    let words = random_words(&mut rng, 1000, &HashSet::new());

    let mut filter = CounterFilter::new(1000, 0.07).unwrap();
    let k = filter.hash_count() as u64;
    filter.add_all(&words);
    assert_eq!(filter.counter_sum(), 1000 * k);

    for word in &words {
        let before = filter.counter_sum();
        assert!(filter.delete(word));
        assert_eq!(filter.counter_sum(), before - k);
    }

    assert_eq!(filter.counter_sum(), 0);
    assert_eq!(filter.count_nonzero(), 0);
}

#[test]
fn test_deletes_keep_remaining_items() {
    let mut rng = StdRng::seed_from_u64(2);
    let words = random_words(&mut rng, 500, &HashSet::new());
    let (gone, kept) = words.split_at(250);

    let mut filter = CounterFilter::new(500, 0.01).unwrap();
    filter.add_all(&words);
    assert_eq!(filter.delete_all(gone), 250);

    assert!(kept.iter().all(|w| filter.query(w)));
}
