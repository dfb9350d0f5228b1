//! Bloom filter implementations.
//!
//! # Available Filters
//!
//! - [`BitsetFilter`] - Classic filter over a packed bit array
//! - [`CounterFilter`] - Supports deletion using `u8` counters instead of bits
//!
//! The two types share the sizing rules in [`crate::core::params`] and the
//! indexing in [`crate::hash`], and nothing else.
//!
//! # Choosing a Filter
//!
//! | Filter | Use Case | Memory | Operations |
//! |--------|----------|--------|------------|
//! | [`BitsetFilter`] | No deletion | m bits | Add, Query |
//! | [`CounterFilter`] | Need deletion | 8 × m bits | Add, Delete, Query |
//!
//! # Examples
//!
//! ## Bitset Filter
//!
//! ```
//! use digestbloom::filters::BitsetFilter;
//! use digestbloom::BloomFilter;
//!
//! let mut filter = BitsetFilter::new(10_000, 0.01).unwrap();
//! filter.add("hello");
//! assert!(filter.query("hello"));
//! ```
//!
//! ## Counter Filter (with deletion)
//!
//! ```
//! use digestbloom::filters::CounterFilter;
//! use digestbloom::{BloomFilter, DeletableBloomFilter};
//!
//! let mut filter = CounterFilter::new(10_000, 0.01).unwrap();
//! filter.add("temporary");
//! assert!(filter.query("temporary"));
//!
//! filter.delete("temporary");
//! assert!(!filter.query("temporary"));
//! ```

pub mod bitset;
pub use bitset::BitsetFilter;

pub mod counter;
pub use counter::CounterFilter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{BloomFilter, DeletableBloomFilter};

    fn exercise<F: BloomFilter>(filter: &mut F) {
        filter.add_all(["alpha", "beta", "gamma"]);
        assert!(filter.query("alpha"));
        assert!(filter.query("beta"));
        assert!(filter.query("gamma"));
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_filters_share_sizing() {
        let bitset = BitsetFilter::new(500, 0.02).unwrap();
        let counter = CounterFilter::new(500, 0.02).unwrap();
        assert_eq!(bitset.params(), counter.params());
    }

    #[test]
    fn test_filters_set_same_slots() {
        let mut bitset = BitsetFilter::new(1000, 0.07).unwrap();
        let mut counter = CounterFilter::new(1000, 0.07).unwrap();
        exercise(&mut bitset);
        exercise(&mut counter);

        for (slot, &count) in counter.counters().iter().enumerate() {
            let bit = bitset.as_bytes()[slot / 8] & (1 << (slot % 8)) != 0;
            assert_eq!(bit, count > 0, "slot {}", slot);
        }
    }

    #[test]
    fn test_generic_delete() {
        fn drain<F: DeletableBloomFilter>(filter: &mut F, items: &[&str]) -> usize {
            filter.delete_all(items.iter())
        }

        let mut counter = CounterFilter::new(100, 0.01).unwrap();
        exercise(&mut counter);
        assert_eq!(drain(&mut counter, &["alpha", "beta", "gamma"]), 3);
        assert!(counter.is_empty());
    }
}
