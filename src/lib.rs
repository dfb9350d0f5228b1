//! digestbloom: Bloom filters indexed by cryptographic digests.
//!
//! Two filter variants built on one indexing scheme:
//!
//! - [`BitsetFilter`]: classic Bloom filter over a packed bit array
//! - [`CounterFilter`]: counting Bloom filter over `u8` counters, with delete
//!
//! # What are Bloom Filters?
//!
//! A Bloom filter is a space-efficient probabilistic data structure that tests whether
//! an element is a member of a set. It can produce:
//! - **False positives**: May indicate an element is in the set when it isn't
//! - **Zero false negatives**: If it says an element isn't in the set, it definitely isn't
//!
//! # Quick Start
//!
//! ```
//! use digestbloom::prelude::*;
//!
//! // 10,000 items at a 1% false positive rate
//! let mut filter = BitsetFilter::new(10_000, 0.01).unwrap();
//!
//! filter.add("hello");
//! filter.add("world");
//!
//! assert!(filter.query("hello"));   // true - probably in set
//! assert!(!filter.query("goodbye")); // false - definitely not in set
//! ```
//!
//! # Indexing
//!
//! Slot `i` of an item is `digest_i(item) mod m`, with the digest output read
//! as one big-endian integer. The standard family is SHA-256, SHA-1, MD5,
//! SHA-384 and SHA-512, so a filter uses at most five hash functions. When the
//! optimal count is higher, the filter still works but its false positive rate
//! ends up above the target; [`FilterParams::expected_fp_rate`] reports the
//! real figure.
//!
//! Families are swappable per filter, see [`hash::HashFamily`].
//!
//! # Deletion
//!
//! ```
//! use digestbloom::prelude::*;
//!
//! let mut filter = CounterFilter::new(1000, 0.01).unwrap();
//! filter.add("session-1");
//! filter.add("session-2");
//!
//! assert!(filter.delete("session-1"));
//! assert!(!filter.query("session-1"));
//! assert!(filter.query("session-2"));
//! ```
//!
//! Deleting an item that was never added can remove other items, see
//! [`filters::counter`].
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber: filter
//! construction at `debug`, rejected deletes at `trace`, and the first counter
//! saturation of a filter at `warn`.
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`FilterParams`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Core data structures, traits and sizing
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementations
pub mod filters;

/// Slot hashers and hash families
pub mod hash;

/// Type-safe builders for both filter types
pub mod builder;

pub use error::{FilterError, Result};

pub use crate::core::filter::{BloomFilter, DeletableBloomFilter};
pub use crate::core::params::FilterParams;

pub use filters::{BitsetFilter, CounterFilter};

pub use builder::{BitsetFilterBuilder, CounterFilterBuilder};

pub use hash::{BloomHasher, HashFamily};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use digestbloom::prelude::*;
///
/// let mut filter = CounterFilterBuilder::new()
///     .expected_items(1000)
///     .false_positive_rate(0.01)
///     .build()
///     .unwrap();
/// filter.add("hello");
/// assert!(filter.query("hello"));
/// ```
pub mod prelude {
    pub use crate::builder::{BitsetFilterBuilder, CounterFilterBuilder};
    pub use crate::core::filter::{BloomFilter, DeletableBloomFilter};
    pub use crate::core::params::FilterParams;
    pub use crate::error::{FilterError, Result};
    pub use crate::filters::{BitsetFilter, CounterFilter};
    pub use crate::hash::{BloomHasher, HashFamily};
}
