//! Builder for bitset filters.
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use digestbloom::builder::BitsetFilterBuilder;
//! use digestbloom::BloomFilter;
//!
//! let filter = BitsetFilterBuilder::new()
//!     .expected_items(1000)
//!     .false_positive_rate(0.07)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.bit_count(), 5535);
//! ```
//!
//! ## Custom Hash Family
//!
//! ```
//! use digestbloom::builder::BitsetFilterBuilder;
//! use digestbloom::hash::{FnHasher, HashFamily};
//! use digestbloom::BloomFilter;
//!
//! fn length(bytes: &[u8]) -> u64 {
//!     bytes.len() as u64
//! }
//!
//! let family = HashFamily::new(vec![Box::new(FnHasher::new("length", length))]).unwrap();
//! let filter = BitsetFilterBuilder::new()
//!     .hash_family(family)
//!     .expected_items(100)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.hash_count(), 1);
//! ```

use super::{Complete, Initial, WithItems};
use crate::error::Result;
use crate::filters::BitsetFilter;
use crate::hash::HashFamily;

/// Builder for [`BitsetFilter`] with type-state guarantees.
#[derive(Debug, Clone)]
pub struct BitsetFilterBuilder<State = Initial> {
    state: State,
    family: Option<HashFamily>,
}

impl BitsetFilterBuilder<Initial> {
    /// Create a new builder using the standard hash family.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Initial,
            family: None,
        }
    }

    /// Set the expected number of items to add.
    ///
    /// Required parameter. Transitions to `WithItems` state.
    #[must_use]
    pub fn expected_items(self, items: usize) -> BitsetFilterBuilder<WithItems> {
        BitsetFilterBuilder {
            state: WithItems {
                expected_items: items,
            },
            family: self.family,
        }
    }
}

impl Default for BitsetFilterBuilder<Initial> {
    fn default() -> Self {
        Self::new()
    }
}

impl BitsetFilterBuilder<WithItems> {
    /// Set the target false positive rate.
    ///
    /// Required parameter. Transitions to `Complete` state.
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> BitsetFilterBuilder<Complete> {
        BitsetFilterBuilder {
            state: Complete {
                expected_items: self.state.expected_items,
                fp_rate,
            },
            family: self.family,
        }
    }
}

impl<State> BitsetFilterBuilder<State> {
    /// Index slots with `family` instead of the standard digests (optional).
    #[must_use]
    pub fn hash_family(mut self, family: HashFamily) -> Self {
        self.family = Some(family);
        self
    }
}

impl BitsetFilterBuilder<Complete> {
    /// Build the filter.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `expected_items == 0`
    /// - `fp_rate` not in (0, 1)
    /// - The derived size does not fit in memory
    pub fn build(self) -> Result<BitsetFilter> {
        let Complete {
            expected_items,
            fp_rate,
        } = self.state;

        BitsetFilter::with_hash_family(expected_items, fp_rate, self.family.unwrap_or_default())
    }
}
