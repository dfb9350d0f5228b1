//! Basic tests - both filters end to end through the public API

use digestbloom::prelude::*;
use digestbloom::hash::FnHasher;

#[test]
fn test_basic_add_and_find() {
    let mut filter = BitsetFilter::new(100, 0.01).unwrap();

    filter.add("test-item");

    assert!(filter.query("test-item"), "Should find the item we just added");
}

#[test]
fn test_batch_operations() {
    let mut filter = CounterFilter::new(1000, 0.01).unwrap();

    let items: Vec<String> = vec!["apple", "banana", "cherry"]
        .into_iter()
        .map(String::from)
        .collect();

    filter.add_all(&items);

    for item in &items {
        assert!(filter.query(item), "Should find {}", item);
    }

    assert_eq!(filter.delete_all(&items), 3);
    assert_eq!(filter.counter_sum(), 0);
}

#[test]
fn test_no_false_negatives() {
    let mut bitset = BitsetFilter::new(1000, 0.01).unwrap();
    let mut counter = CounterFilter::new(1000, 0.01).unwrap();

    for i in 0..100u64 {
        bitset.add(i.to_be_bytes());
        counter.add(i.to_be_bytes());
    }

    for i in 0..100u64 {
        assert!(bitset.query(i.to_be_bytes()), "False negative for {}", i);
        assert!(counter.query(i.to_be_bytes()), "False negative for {}", i);
    }
}

#[test]
fn test_text_and_bytes_hash_alike() {
    let mut filter = BitsetFilter::new(100, 0.01).unwrap();
    filter.add("héllo");

    assert!(filter.query("héllo".as_bytes()));
    assert!(filter.query(String::from("héllo")));
    assert!(filter.query(vec![0x68, 0xc3, 0xa9, 0x6c, 0x6c, 0x6f]));
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        BitsetFilter::new(0, 0.01),
        Err(FilterError::InvalidItemCount { count: 0 })
    ));
    assert!(matches!(
        CounterFilter::new(10, 1.0),
        Err(FilterError::FalsePositiveRateOutOfBounds { .. })
    ));
    assert!(matches!(
        HashFamily::new(Vec::new()),
        Err(FilterError::EmptyHashFamily)
    ));
}

#[test]
fn test_shared_behind_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let filter = Arc::new(Mutex::new(CounterFilter::new(1000, 0.01).unwrap()));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let filter = Arc::clone(&filter);
            thread::spawn(move || {
                for i in 0..50 {
                    filter.lock().unwrap().add(format!("{}-{}", t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let filter = filter.lock().unwrap();
    assert_eq!(filter.counter_sum(), 200 * filter.hash_count() as u64);
    assert!((0..4).all(|t| (0..50).all(|i| filter.query(format!("{}-{}", t, i)))));
}

#[test]
fn test_stub_family_is_deterministic() {
    fn last_byte(bytes: &[u8]) -> u64 {
        bytes.last().copied().map_or(0, u64::from)
    }

    let family = HashFamily::new(vec![Box::new(FnHasher::new("last_byte", last_byte))]).unwrap();
    let mut filter = BitsetFilterBuilder::new()
        .expected_items(10)
        .false_positive_rate(0.1)
        .hash_family(family)
        .build()
        .unwrap();

    filter.add("ab");
    assert!(filter.query("xb"));
    assert!(!filter.query("xc"));
    assert_eq!(filter.count_ones(), 1);
}
