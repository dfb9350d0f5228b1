//! Builder pattern for filter construction.
//!
//! Fluent, type-safe builders for both filter variants with compile-time
//! guarantees that required parameters are provided.
//!
//! # Type-State Pattern
//!
//! ```text
//! Initial ──.expected_items(n)──> WithItems ──.false_positive_rate(p)──> Complete ──.build()──> filter
//! ```
//!
//! Each state carries the values collected so far, so `build()` can only be
//! called once both are set. The hash family is optional in every state and
//! defaults to [`HashFamily::standard`](crate::hash::HashFamily::standard).
//!
//! ## Error Handling
//!
//! - **Compile-time errors**: Missing required parameters
//! - **Runtime errors**: Invalid parameter values (out of range)
//!
//! # Examples
//!
//! ```
//! use digestbloom::builder::{BitsetFilterBuilder, CounterFilterBuilder};
//! use digestbloom::BloomFilter;
//!
//! let bitset = BitsetFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! let counter = CounterFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(bitset.params(), counter.params());
//! ```
//!
//! Forgetting a required parameter does not compile:
//!
//! ```compile_fail
//! use digestbloom::builder::BitsetFilterBuilder;
//!
//! let filter = BitsetFilterBuilder::new().expected_items(10_000).build();
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod bitset;
pub mod counter;

pub use bitset::BitsetFilterBuilder;
pub use counter::CounterFilterBuilder;

/// Type-state marker: nothing set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Initial;

/// Type-state marker: expected item count is set.
#[derive(Debug, Clone, Copy)]
pub struct WithItems {
    expected_items: usize,
}

/// Type-state marker: all required parameters set.
#[derive(Debug, Clone, Copy)]
pub struct Complete {
    expected_items: usize,
    fp_rate: f64,
}
