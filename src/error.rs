//! Error types for filter construction.
//!
//! Only constructors can fail. Once a filter exists, `add`, `query` and
//! `delete` are total.
//!
//! # Error Propagation
//!
//! ```
//! use digestbloom::{FilterError, Result};
//! use digestbloom::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! fn sizing(n: usize, fp: f64) -> Result<(usize, usize)> {
//!     let m = optimal_bit_count(n, fp)?;
//!     let k = optimal_hash_count(m, n, 5)?;
//!     Ok((m, k))
//! }
//! # assert!(sizing(1000, 0.01).is_ok());
//! # assert!(matches!(sizing(0, 0.01), Err(FilterError::InvalidItemCount { .. })));
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors raised while sizing or constructing a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Expected item count must be positive.
    InvalidItemCount {
        /// The rejected count.
        count: usize,
    },

    /// Target false positive rate must lie strictly between 0 and 1.
    ///
    /// NaN is rejected through this variant as well.
    FalsePositiveRateOutOfBounds {
        /// The rejected rate.
        fp_rate: f64,
    },

    /// A filter needs at least one hash function to index slots.
    EmptyHashFamily,

    /// Derived slot count is zero or does not fit in memory.
    InvalidFilterSize {
        /// The rejected size in slots.
        size: usize,
    },

    /// Parameters are individually valid but unusable together.
    InvalidParameters {
        /// Human-readable description of the problem.
        message: String,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidItemCount { count } => {
                write!(
                    f,
                    "Invalid item count: {}. Expected items must be greater than 0.",
                    count
                )
            }
            Self::FalsePositiveRateOutOfBounds { fp_rate } => {
                write!(
                    f,
                    "False positive rate {} is out of bounds. Must be in range (0, 1).",
                    fp_rate
                )
            }
            Self::EmptyHashFamily => {
                write!(f, "Hash family is empty. At least one hash function is required.")
            }
            Self::InvalidFilterSize { size } => {
                write!(
                    f,
                    "Invalid filter size: {} slots. Must be positive and within memory limits.",
                    size
                )
            }
            Self::InvalidParameters { message } => {
                write!(f, "Invalid filter parameters: {}.", message)
            }
        }
    }
}

impl std::error::Error for FilterError {}

impl FilterError {
    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: usize) -> Self {
        Self::InvalidFilterSize { size }
    }

    /// Create an `InvalidParameters` error with a formatted message.
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }
}
