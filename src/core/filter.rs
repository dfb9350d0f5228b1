//! Traits shared by the filter variants.
//!
//! ```text
//! BloomFilter (add, query, sizing accessors)
//!     └── DeletableBloomFilter (delete)
//! ```
//!
//! Items are anything that can be viewed as bytes (`&str`, `String`,
//! `&[u8]`, `Vec<u8>`, byte arrays). Text is hashed through its UTF-8 bytes;
//! hashing never looks at the item's original type.
//!
//! # Guarantees
//!
//! ## No False Negatives
//! ```text
//! filter.add(x);
//! assert!(filter.query(x)); // MUST be true, unless x was deleted since
//! ```
//!
//! ## Bounded False Positives
//! With at most `expected_items` distinct items added, `query` returns `true`
//! for an absent item with probability close to the configured rate. The rate
//! can exceed the target when the hash family is too small for the optimal
//! hash count, see [`FilterParams::expected_fp_rate`].
//!
//! # Concurrency
//!
//! Mutating methods take `&mut self`. Implementations are `Send + Sync`; to
//! share one across threads wrap the whole instance in a `Mutex` or `RwLock`
//! so that no query observes a half-applied add or delete.
//!
//! ```
//! use digestbloom::{BloomFilter, CounterFilter};
//! use std::sync::{Arc, Mutex};
//!
//! let filter = Arc::new(Mutex::new(CounterFilter::new(1000, 0.01).unwrap()));
//!
//! let shared = Arc::clone(&filter);
//! std::thread::spawn(move || {
//!     shared.lock().unwrap().add("item");
//! })
//! .join()
//! .unwrap();
//!
//! assert!(filter.lock().unwrap().query("item"));
//! ```

use crate::core::params::{fp_rate_from_fill_ratio, FilterParams};

/// Probabilistic set membership.
pub trait BloomFilter: Send + Sync {
    /// Record `item` in the filter.
    ///
    /// After this call `query(item)` returns `true`.
    fn add<I: AsRef<[u8]>>(&mut self, item: I);

    /// Test whether `item` may have been added.
    ///
    /// `false` is certain; `true` is probable.
    fn query<I: AsRef<[u8]>>(&self, item: I) -> bool;

    /// Sizing the filter was built with.
    fn params(&self) -> &FilterParams;

    /// Number of occupied slots (set bits or nonzero counters).
    fn occupied_slots(&self) -> usize;

    /// Number of slots (m).
    fn bit_count(&self) -> usize {
        self.params().bit_count
    }

    /// Slots touched per operation (k).
    fn hash_count(&self) -> usize {
        self.params().hash_count
    }

    /// Capacity the filter was sized for (n).
    fn expected_items(&self) -> usize {
        self.params().expected_items
    }

    /// False positive rate requested at construction (p).
    fn target_fp_rate(&self) -> f64 {
        self.params().target_fp_rate
    }

    /// `true` if no slot is occupied.
    fn is_empty(&self) -> bool {
        self.occupied_slots() == 0
    }

    /// Share of occupied slots, in `[0, 1]`.
    fn fill_ratio(&self) -> f64 {
        self.occupied_slots() as f64 / self.bit_count() as f64
    }

    /// Current false positive rate estimated from the fill ratio.
    fn estimated_fp_rate(&self) -> f64 {
        fp_rate_from_fill_ratio(self.fill_ratio(), self.hash_count())
    }

    /// Add every item of an iterator.
    fn add_all<I, It>(&mut self, items: It)
    where
        I: AsRef<[u8]>,
        It: IntoIterator<Item = I>,
    {
        for item in items {
            self.add(item);
        }
    }
}

/// Bloom filter that can also forget items.
pub trait DeletableBloomFilter: BloomFilter {
    /// Remove one prior `add` of `item`.
    ///
    /// All-or-nothing: returns `true` when every slot of `item` was
    /// decremented, `false` when nothing changed because `item` cannot be
    /// present.
    fn delete<I: AsRef<[u8]>>(&mut self, item: I) -> bool;

    /// Delete every item of an iterator, returning how many deletes took effect.
    fn delete_all<I, It>(&mut self, items: It) -> usize
    where
        I: AsRef<[u8]>,
        It: IntoIterator<Item = I>,
    {
        items.into_iter().filter(|item| self.delete(item)).count()
    }
}
