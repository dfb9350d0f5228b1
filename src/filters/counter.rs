//! Counting Bloom filter with deletion support.
//!
//! Each slot holds a `u8` counter instead of a bit:
//! - Add: increment k counters
//! - Delete: decrement k counters
//! - Query: check that all k counters are above zero
//!
//! # Deletion
//!
//! `delete` is all-or-nothing. It first checks every target counter and only
//! decrements when the item could be present; otherwise nothing changes and
//! it returns `false`. When two seeds land on the same slot that counter must
//! cover both decrements, so a counter never drops below zero.
//!
//! The check cannot tell a real member from a false positive. Deleting an
//! item that was never added, but whose slots happen to be occupied, removes
//! counts belonging to other items and can make them disappear:
//!
//! ```text
//! add("ax")  -> slots {1, 2}
//! add("bxx") -> slots {2, 3}
//! delete("b")   slots {2, 1} both nonzero, accepted
//! query("ax")   slot 1 is now 0: false negative
//! ```
//!
//! Only delete items you know were added.
//!
//! # Counter Overflow
//!
//! Counters saturate at [`COUNTER_MAX`] rather than wrapping, and a saturated
//! counter stays there: deletes no longer lower it, since it has lost track of
//! how many items it covers. Saturation can only add false positives. Once
//! [`CounterFilter::has_overflowed`] is `true`, a successful delete may lower
//! [`CounterFilter::counter_sum`] by less than `hash_count`.
//! Saturations are counted in [`CounterFilter::overflow_count`] and the first
//! one per filter is logged at `warn` level.
//!
//! # Examples
//!
//! ```
//! use digestbloom::{BloomFilter, CounterFilter, DeletableBloomFilter};
//!
//! let mut filter = CounterFilter::new(1000, 0.01).unwrap();
//! filter.add("hello");
//! filter.add("world");
//!
//! assert!(filter.delete("hello"));
//! assert!(!filter.query("hello"));
//! assert!(filter.query("world"));
//!
//! assert!(!filter.delete("never added"));
//! ```

#![allow(clippy::module_name_repetitions)]

use crate::core::counters::{CounterVec, COUNTER_MAX};
use crate::core::filter::{BloomFilter, DeletableBloomFilter};
use crate::core::params::FilterParams;
use crate::error::Result;
use crate::hash::HashFamily;
use tracing::{debug, trace, warn};

/// Counting Bloom filter supporting `add`, `query` and `delete`.
#[derive(Debug, Clone)]
pub struct CounterFilter {
    params: FilterParams,
    family: HashFamily,
    counters: CounterVec,
    overflow_count: usize,
}

impl CounterFilter {
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
    /// use digestbloom::{BloomFilter, CounterFilter};
    ///
    /// let filter = CounterFilter::new(1000, 0.01).unwrap();
    /// assert_eq!(filter.bit_count(), 9586);
    /// assert_eq!(filter.hash_count(), 5);
    /// assert_eq!(filter.counters().len(), 9586);
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
        let counters = CounterVec::new(params.bit_count)?;

        debug!(
            expected_items,
            target_fp_rate,
            bit_count = params.bit_count,
            hash_count = params.hash_count,
            hashers = ?family,
            "created counter filter"
        );

        Ok(Self {
            params,
            family,
            counters,
            overflow_count: 0,
        })
    }

    fn slots(&self, bytes: &[u8]) -> Vec<usize> {
        self.family
            .slot_indices(bytes, self.params.hash_count, self.params.bit_count)
            .collect()
    }

    /// Raw counter values, one per slot.
    #[must_use]
    pub fn counters(&self) -> &[u8] {
        self.counters.as_slice()
    }

    /// Sum of all counters.
    ///
    /// Grows by `hash_count` per unsaturated `add` and shrinks by
    /// `hash_count` per successful `delete`, except that saturated counters
    /// never change.
    #[must_use]
    pub fn counter_sum(&self) -> u64 {
        self.counters.sum()
    }

    /// Number of counters above zero.
    #[must_use]
    pub fn count_nonzero(&self) -> usize {
        self.counters.count_nonzero()
    }

    /// Largest counter value.
    #[must_use]
    pub fn max_counter_value(&self) -> u8 {
        self.counters.max_value()
    }

    /// Increments dropped because the counter was already at [`COUNTER_MAX`].
    #[must_use]
    pub fn overflow_count(&self) -> usize {
        self.overflow_count
    }

    /// `true` if any increment has been dropped.
    #[must_use]
    pub fn has_overflowed(&self) -> bool {
        self.overflow_count > 0
    }

    /// Hash family indexing this filter.
    #[must_use]
    pub fn hash_family(&self) -> &HashFamily {
        &self.family
    }

    /// Approximate memory footprint of the counters in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.counters.memory_usage()
    }
}

impl BloomFilter for CounterFilter {
    fn add<I: AsRef<[u8]>>(&mut self, item: I) {
        for idx in self.slots(item.as_ref()) {
            if self.counters.increment(idx) {
                continue;
            }
            if self.overflow_count == 0 {
                warn!(
                    slot = idx,
                    max = COUNTER_MAX,
                    "counter saturated; false positive rate will rise"
                );
            }
            self.overflow_count += 1;
        }
    }

    fn query<I: AsRef<[u8]>>(&self, item: I) -> bool {
        self.family
            .slot_indices(item.as_ref(), self.params.hash_count, self.params.bit_count)
            .all(|idx| self.counters.get(idx) > 0)
    }

    fn params(&self) -> &FilterParams {
        &self.params
    }

    fn occupied_slots(&self) -> usize {
        self.counters.count_nonzero()
    }
}

impl DeletableBloomFilter for CounterFilter {
    fn delete<I: AsRef<[u8]>>(&mut self, item: I) -> bool {
        let slots = self.slots(item.as_ref());

        let removable = slots.iter().all(|&idx| {
            let hits = slots.iter().filter(|&&other| other == idx).count();
            usize::from(self.counters.get(idx)) >= hits
        });

        if !removable {
            trace!(hash_count = slots.len(), "delete rejected, item not present");
            return false;
        }

        // Saturated counters refuse the decrement and stay put.
        for idx in slots {
            self.counters.decrement(idx);
        }
        true
    }
}

impl<I: AsRef<[u8]>> Extend<I> for CounterFilter {
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        self.add_all(iter);
    }
}
