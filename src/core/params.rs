//! Filter sizing formulas.
//!
//! Given:
//! - `n`: expected number of items
//! - `p`: target false positive rate
//!
//! The filter uses:
//! - `m = ceil(-n × ln(p) / (ln 2)²)` slots
//! - `k = ceil((m / n) × ln 2)` hash functions, clamped to `[1, available]`
//!
//! `available` is the size of the hash family backing the filter, five for
//! [`HashFamily::standard`](crate::hash::HashFamily::standard). Rounding `k`
//! up (rather than to nearest) keeps the clamp the only source of deviation
//! from the optimum.
//!
//! The expected false positive rate after `n` insertions is
//! `p' = (1 - e^(-kn/m))^k`.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{FilterError, Result};
use std::f64::consts::LN_2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Hash functions offered by the standard digest family.
pub const MAX_HASH_FUNCTIONS: usize = 5;

/// Every filter touches at least one slot per operation.
pub const MIN_HASH_FUNCTIONS: usize = 1;

/// Calculate the number of slots for `n` items at false positive rate `fp_rate`.
///
/// Implements `m = ceil(-n × ln(p) / (ln 2)²)`. The result is never below 1.
///
/// # Errors
///
/// - [`FilterError::InvalidItemCount`] if `n == 0`
/// - [`FilterError::FalsePositiveRateOutOfBounds`] if `fp_rate` is not in (0, 1)
/// - [`FilterError::InvalidParameters`] if the result does not fit in memory
///
/// # Examples
///
/// ```
/// use digestbloom::core::params::optimal_bit_count;
///
/// assert_eq!(optimal_bit_count(1000, 0.07).unwrap(), 5535);
/// assert_eq!(optimal_bit_count(1000, 0.01).unwrap(), 9586);
/// ```
pub fn optimal_bit_count(n: usize, fp_rate: f64) -> Result<usize> {
    if n == 0 {
        return Err(FilterError::invalid_item_count(n));
    }

    // Written this way round so NaN fails the check too.
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(FilterError::fp_rate_out_of_bounds(fp_rate));
    }

    let m = (-(n as f64) * fp_rate.ln() / LN2_SQUARED).ceil();

    if !m.is_finite() || m > (usize::MAX / 2) as f64 {
        return Err(FilterError::invalid_parameters(format!(
            "calculated filter size {:.0} exceeds reasonable bounds; \
             increase the false positive rate or reduce the item count",
            m
        )));
    }

    Ok((m as usize).max(1))
}

/// Calculate the number of hash functions for `m` slots and `n` items.
///
/// Implements `k = ceil((m / n) × ln 2)`, clamped to `[1, max_hashes]`.
///
/// # Errors
///
/// - [`FilterError::InvalidFilterSize`] if `m == 0`
/// - [`FilterError::InvalidItemCount`] if `n == 0`
/// - [`FilterError::EmptyHashFamily`] if `max_hashes == 0`
///
/// # Examples
///
/// ```
/// use digestbloom::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(5535, 1000, 5).unwrap(), 4);
/// // The optimum for 1% is 7, more than the digest family offers.
/// assert_eq!(optimal_hash_count(9586, 1000, 5).unwrap(), 5);
/// ```
pub fn optimal_hash_count(m: usize, n: usize, max_hashes: usize) -> Result<usize> {
    if m == 0 {
        return Err(FilterError::invalid_filter_size(m));
    }
    if n == 0 {
        return Err(FilterError::invalid_item_count(n));
    }
    if max_hashes == 0 {
        return Err(FilterError::EmptyHashFamily);
    }

    let k = ((m as f64 / n as f64) * LN_2).ceil() as usize;
    Ok(k.clamp(MIN_HASH_FUNCTIONS, max_hashes))
}

/// Expected false positive rate after inserting `n` items.
///
/// Implements `p = (1 - e^(-kn/m))^k`, assuming independent uniform hashes.
///
/// # Errors
///
/// - [`FilterError::InvalidFilterSize`] if `m == 0`
/// - [`FilterError::EmptyHashFamily`] if `k == 0`
///
/// # Examples
///
/// ```
/// use digestbloom::core::params::expected_fp_rate;
///
/// let fp = expected_fp_rate(5535, 1000, 4).unwrap();
/// assert!((fp - 0.07).abs() < 0.005);
/// ```
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> Result<f64> {
    if m == 0 {
        return Err(FilterError::invalid_filter_size(m));
    }
    if k == 0 {
        return Err(FilterError::EmptyHashFamily);
    }
    if n == 0 {
        return Ok(0.0);
    }

    let k_f64 = k as f64;
    let prob_bit_one = 1.0 - (-(k_f64 * n as f64) / m as f64).exp();
    Ok(prob_bit_one.powf(k_f64).clamp(0.0, 1.0))
}

/// False positive rate implied by the share of occupied slots.
///
/// A query for an absent item succeeds when all `k` indexed slots are
/// occupied, so the rate is `fill_ratio^k`. Used to estimate the current
/// rate of a live filter without knowing how many items it holds.
#[must_use]
pub fn fp_rate_from_fill_ratio(fill_ratio: f64, k: usize) -> f64 {
    fill_ratio.clamp(0.0, 1.0).powi(k as i32)
}

/// Slots needed per item for a target false positive rate: `-ln(p) / (ln 2)²`.
///
/// # Errors
///
/// Returns [`FilterError::FalsePositiveRateOutOfBounds`] if `fp_rate` is not in (0, 1).
pub fn bits_per_element(fp_rate: f64) -> Result<f64> {
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(FilterError::fp_rate_out_of_bounds(fp_rate));
    }
    Ok(-fp_rate.ln() / LN2_SQUARED)
}

/// Immutable sizing of one filter instance.
///
/// Computed once at construction and never changed afterwards.
///
/// # Examples
///
/// ```
/// use digestbloom::core::params::FilterParams;
///
/// let params = FilterParams::new(1000, 0.07, 5).unwrap();
/// assert_eq!(params.bit_count, 5535);
/// assert_eq!(params.hash_count, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterParams {
    /// Anticipated number of distinct items (n).
    pub expected_items: usize,
    /// Target false positive rate at `expected_items` (p).
    pub target_fp_rate: f64,
    /// Number of slots (m).
    pub bit_count: usize,
    /// Slots touched per operation (k).
    pub hash_count: usize,
}

impl FilterParams {
    /// Derive `bit_count` and `hash_count` for a filter backed by
    /// `available_hashes` hash functions.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`optimal_bit_count`] and [`optimal_hash_count`].
    pub fn new(expected_items: usize, target_fp_rate: f64, available_hashes: usize) -> Result<Self> {
        let bit_count = optimal_bit_count(expected_items, target_fp_rate)?;
        let hash_count = optimal_hash_count(bit_count, expected_items, available_hashes)?;

        Ok(Self {
            expected_items,
            target_fp_rate,
            bit_count,
            hash_count,
        })
    }

    /// False positive rate these parameters deliver at full capacity.
    ///
    /// Exceeds `target_fp_rate` when `hash_count` was clamped.
    #[must_use]
    pub fn expected_fp_rate(&self) -> f64 {
        expected_fp_rate(self.bit_count, self.expected_items, self.hash_count).unwrap_or(1.0)
    }
}
