//! Classic Bloom filter over a packed bit array.
//!
//! # Algorithm
//!
//! ```text
//! add(x):    for i in 0..k: bits[h_i(x) mod m] = 1
//! query(x):  for i in 0..k: if bits[h_i(x) mod m] == 0 { return false }
//!            return true
//! ```
//!
//! `h_i` is the `i`-th member of the filter's [`HashFamily`]. Adding is
//! idempotent: a second `add` of the same item leaves the bit array unchanged.
//! There is no delete; clearing a bit could erase other items.
//!
//! # Examples
//!
//! ```
//! use digestbloom::{BitsetFilter, BloomFilter};
//!
//! let mut filter = BitsetFilter::new(1000, 0.01)?;
//! filter.add("hello");
//! filter.add(b"raw bytes");
//!
//! assert!(filter.query("hello"));
//! assert!(filter.query(b"raw bytes".to_vec()));
//! assert!(!filter.query("world"));
//! # Ok::<(), digestbloom::FilterError>(())
//! ```

#![allow(clippy::module_name_repetitions)]

use crate::core::bitvec::BitVec;
use crate::core::filter::BloomFilter;
use crate::core::params::FilterParams;
use crate::error::Result;
use crate::hash::HashFamily;
use tracing::debug;

/// Bloom filter supporting `add` and `query`.
#[derive(Debug, Clone)]
pub struct BitsetFilter {
    params: FilterParams,
    family: HashFamily,
    bits: BitVec,
}

impl BitsetFilter {
    /// Create a filter for `expected_items` items at `target_fp_rate`, hashed
    /// with [`HashFamily::standard`].
    ///
    /// # Errors
    ///
    /// Returns an error if `expected_items == 0` or `target_fp_rate` is not in
    /// (0, 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use digestbloom::{BitsetFilter, BloomFilter};
    ///
    /// let filter = BitsetFilter::new(1000, 0.07).unwrap();
    /// assert_eq!(filter.bit_count(), 5535);
    /// assert_eq!(filter.hash_count(), 4);
    /// assert_eq!(filter.as_bytes().len(), 692);
    /// ```
    pub fn new(expected_items: usize, target_fp_rate: f64) -> Result<Self> {
        Self::with_hash_family(expected_items, target_fp_rate, HashFamily::standard())
    }

    /// Create a filter hashed with `family`.
    ///
    /// The hash count is clamped to `family.len()`.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_hash_family(
        expected_items: usize,
        target_fp_rate: f64,
        family: HashFamily,
    ) -> Result<Self> {
        let params = FilterParams::new(expected_items, target_fp_rate, family.len())?;
        let bits = BitVec::new(params.bit_count)?;

        debug!(
            expected_items,
            target_fp_rate,
            bit_count = params.bit_count,
            hash_count = params.hash_count,
            hashers = ?family,
            "created bitset filter"
        );

        Ok(Self {
            params,
            family,
            bits,
        })
    }

    /// Packed bit array, slot `i` at bit `i % 8` of byte `i / 8`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Hash family indexing this filter.
    #[must_use]
    pub fn hash_family(&self) -> &HashFamily {
        &self.family
    }

    /// Approximate memory footprint of the bit array in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage()
    }
}

impl BloomFilter for BitsetFilter {
    fn add<I: AsRef<[u8]>>(&mut self, item: I) {
        let bytes = item.as_ref();
        let m = self.params.bit_count;
        for seed in 0..self.params.hash_count {
            let idx = self.family.slot_index(bytes, seed, m);
            self.bits.set(idx);
        }
    }

    fn query<I: AsRef<[u8]>>(&self, item: I) -> bool {
        let bytes = item.as_ref();
        self.family
            .slot_indices(bytes, self.params.hash_count, self.params.bit_count)
            .all(|idx| self.bits.get(idx))
    }

    fn params(&self) -> &FilterParams {
        &self.params
    }

    fn occupied_slots(&self) -> usize {
        self.bits.count_ones()
    }
}

impl<I: AsRef<[u8]>> Extend<I> for BitsetFilter {
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        self.add_all(iter);
    }
}
