//! Measure false positives of both filters and drain a counter filter.
//!
//! Run with: cargo run --example false_positives
//!
//! Set `RUST_LOG=digestbloom=debug` to see filter construction events.

use digestbloom::{BitsetFilter, BloomFilter, CounterFilter, DeletableBloomFilter};
use rand::Rng;
use std::collections::HashSet;
use std::error::Error;
use tracing_subscriber::EnvFilter;

const NR_ITEMS: usize = 1000;
const CHARS_PER_ITEM: usize = 10;
const MAX_FP_RATE: f64 = 0.001;

/// Random string of lowercase ASCII letters.
fn random_lowercase(rng: &mut impl Rng, len: usize) -> String {
    (0..len).map(|_| char::from(rng.gen_range(b'a'..=b'z'))).collect()
}

fn print_filter(filter: &BitsetFilter) {
    let hex: Vec<String> = filter
        .as_bytes()
        .iter()
        .map(|b| format!("0x{:02x}", b))
        .collect();
    println!("{}", hex.join(","));
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mut rng = rand::thread_rng();

    let mut seen = HashSet::new();
    let items: Vec<String> = std::iter::repeat_with(|| random_lowercase(&mut rng, CHARS_PER_ITEM))
        .filter(|s| seen.insert(s.clone()))
        .take(NR_ITEMS)
        .collect();
    let probably_not_items: Vec<String> =
        std::iter::repeat_with(|| random_lowercase(&mut rng, CHARS_PER_ITEM))
            .filter(|s| !seen.contains(s))
            .take(NR_ITEMS)
            .collect();

    let mut bitset = BitsetFilter::new(NR_ITEMS, MAX_FP_RATE)?;
    let mut counter = CounterFilter::new(NR_ITEMS, MAX_FP_RATE)?;

    bitset.add_all(&items);
    counter.add_all(&items);

    for item in &items {
        assert!(bitset.query(item), "false negative in bitset filter: {}", item);
        assert!(counter.query(item), "false negative in counter filter: {}", item);
    }

    let bitset_fp = probably_not_items.iter().filter(|s| bitset.query(s)).count();
    let counter_fp = probably_not_items.iter().filter(|s| counter.query(s)).count();

    let expected_fp = items.len() as f64 * MAX_FP_RATE;
    println!(
        "hash_count={}, bit_count={}, target fp rate={:.2}%, achievable={:.3}%",
        bitset.hash_count(),
        bitset.bit_count(),
        MAX_FP_RATE * 100.0,
        bitset.params().expected_fp_rate() * 100.0,
    );
    println!(
        "bitset fp ({}) / expected fp ({:.0}): {:.1}",
        bitset_fp,
        expected_fp,
        bitset_fp as f64 / expected_fp
    );
    println!(
        "counter fp ({}) / expected fp ({:.0}): {:.1}",
        counter_fp,
        expected_fp,
        counter_fp as f64 / expected_fp
    );

    println!("bit vector:");
    print_filter(&bitset);

    let k = counter.hash_count() as u64;
    let mut false_positives_during_deletion = 0;
    for (i, item) in items.iter().enumerate() {
        let sum_before = counter.counter_sum();
        if !counter.delete(item) {
            return Err(format!("delete rejected for added item {}", item).into());
        }
        if counter.query(item) {
            false_positives_during_deletion += 1;
        }
        assert_eq!(sum_before - counter.counter_sum(), k);

        for remaining in &items[i + 1..] {
            assert!(counter.query(remaining), "{} lost after deleting {}", remaining, item);
        }
    }

    assert_eq!(counter.counter_sum(), 0);
    println!("false_positives_during_deletion={}", false_positives_during_deletion);

    Ok(())
}
