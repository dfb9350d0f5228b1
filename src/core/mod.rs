//! Core types, traits, and sizing utilities.
//!
//! ```text
//! core/
//! ├── filter.rs    - BloomFilter / DeletableBloomFilter traits
//! ├── bitvec.rs    - Byte-packed bit vector (BitsetFilter storage)
//! ├── counters.rs  - Saturating u8 counters (CounterFilter storage)
//! ├── params.rs    - Sizing formulas and FilterParams
//! └── mod.rs       - This file
//! ```
//!
//! # Examples
//!
//! ```
//! use digestbloom::core::params::{optimal_bit_count, optimal_hash_count, MAX_HASH_FUNCTIONS};
//!
//! let m = optimal_bit_count(10_000, 0.01).unwrap();
//! let k = optimal_hash_count(m, 10_000, MAX_HASH_FUNCTIONS).unwrap();
//! assert_eq!((m, k), (95851, 5));
//! ```

pub mod bitvec;
pub mod counters;
pub mod filter;
pub mod params;

pub use bitvec::BitVec;
pub use counters::{CounterVec, COUNTER_MAX};
pub use filter::{BloomFilter, DeletableBloomFilter};
pub use params::{
    bits_per_element, expected_fp_rate, optimal_bit_count, optimal_hash_count, FilterParams,
    MAX_HASH_FUNCTIONS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_size_storage() {
        let params = FilterParams::new(1000, 0.07, MAX_HASH_FUNCTIONS).unwrap();

        let bits = BitVec::new(params.bit_count).unwrap();
        let counters = CounterVec::new(params.bit_count).unwrap();

        assert_eq!(bits.len(), params.bit_count);
        assert_eq!(bits.as_bytes().len(), (params.bit_count + 7) / 8);
        assert_eq!(counters.len(), params.bit_count);
    }
}
