//! Builder for counter filters.
//!
//! ```text
//! Initial → WithItems → Complete → CounterFilter
//!     ↓         ↓           ↓
//!   .expected_items()  .false_positive_rate()  .build()
//! ```
//!
//! # Examples
//!
//! ```
//! use digestbloom::builder::CounterFilterBuilder;
//! use digestbloom::{BloomFilter, DeletableBloomFilter};
//!
//! let mut filter = CounterFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! filter.add("hello");
//! assert!(filter.query("hello"));
//!
//! filter.delete("hello");
//! assert!(!filter.query("hello"));
//! ```

use super::{Complete, Initial, WithItems};
use crate::error::Result;
use crate::filters::CounterFilter;
use crate::hash::HashFamily;

/// Builder for [`CounterFilter`] with type-state guarantees.
///
/// # Memory Overhead
///
/// Counter filters use one byte per slot, 8x the memory of a bitset filter
/// with the same parameters.
#[derive(Debug, Clone)]
pub struct CounterFilterBuilder<State = Initial> {
    state: State,
    family: Option<HashFamily>,
}

impl CounterFilterBuilder<Initial> {
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
    pub fn expected_items(self, items: usize) -> CounterFilterBuilder<WithItems> {
        CounterFilterBuilder {
            state: WithItems {
                expected_items: items,
            },
            family: self.family,
        }
    }
}

impl Default for CounterFilterBuilder<Initial> {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterFilterBuilder<WithItems> {
    /// Set the target false positive rate.
    ///
    /// Required parameter. Transitions to `Complete` state.
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> CounterFilterBuilder<Complete> {
        CounterFilterBuilder {
            state: Complete {
                expected_items: self.state.expected_items,
                fp_rate,
            },
            family: self.family,
        }
    }
}

impl<State> CounterFilterBuilder<State> {
    /// Index slots with `family` instead of the standard digests (optional).
    #[must_use]
    pub fn hash_family(mut self, family: HashFamily) -> Self {
        self.family = Some(family);
        self
    }
}

impl CounterFilterBuilder<Complete> {
    /// Build the filter.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `expected_items == 0`
    /// - `fp_rate` not in (0, 1)
    /// - The derived size does not fit in memory
    pub fn build(self) -> Result<CounterFilter> {
        let Complete {
            expected_items,
            fp_rate,
        } = self.state;

        CounterFilter::with_hash_family(expected_items, fp_rate, self.family.unwrap_or_default())
    }
}
