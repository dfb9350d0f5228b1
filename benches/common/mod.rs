//! Shared utilities and data generators for all benchmarks
//!
//! This module provides:
//! - Random and sequential string generators
//! - Common benchmark constants (sizes, FPRs, item lengths)
//! - Helpers that build pre-populated filters
#![allow(dead_code)]
use digestbloom::{BitsetFilter, BloomFilter, CounterFilter};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

// CONSTANTS

/// Filter capacities exercised by size-scaling benchmarks.
pub const SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Target false positive rates. Below ~0.05 the standard family clamps k at 5.
pub const FP_RATES: &[f64] = &[0.3, 0.1, 0.07, 0.01, 0.001];

/// Item lengths in bytes for hashing-cost benchmarks.
pub const ITEM_LENGTHS: &[usize] = &[10, 64, 1024];

// DATA GENERATORS

/// Generate random alphanumeric string of specified length
#[inline]
pub fn random_string(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generate batch of random strings with specified length
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    (0..count).map(|_| random_string(len)).collect()
}

/// Generate sequential strings with predictable format
///
/// Format: "item_00000001", "item_00000002", ...
pub fn generate_sequential_strings(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item_{:08}", i)).collect()
}

// FILTER SETUP

/// Bitset filter sized for `items.len()` and holding all of them.
pub fn populated_bitset(items: &[String], fp_rate: f64) -> BitsetFilter {
    let mut filter = BitsetFilter::new(items.len(), fp_rate).unwrap();
    filter.add_all(items);
    filter
}

/// Counter filter sized for `items.len()` and holding all of them.
pub fn populated_counter(items: &[String], fp_rate: f64) -> CounterFilter {
    let mut filter = CounterFilter::new(items.len(), fp_rate).unwrap();
    filter.add_all(items);
    filter
}
