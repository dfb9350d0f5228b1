//! Byte-packed bit vector.
//!
//! `BitVec` stores `n` bits in `⌈n / 8⌉` bytes. Slot `i` lives in byte `i / 8`
//! at bit `i % 8`, least significant bit first:
//!
//! ```text
//! Byte 0: [bit 0][bit 1]...[bit 7]
//! Byte 1: [bit 8][bit 9]...[bit 15]
//! ```
//!
//! Mutation takes `&mut self`; there is no interior mutability.
//!
//! # Examples
//!
//! ```
//! use digestbloom::core::BitVec;
//!
//! let mut bv = BitVec::new(100).unwrap();
//! bv.set(42);
//! assert!(bv.get(42));
//! assert!(!bv.get(43));
//! assert_eq!(bv.count_ones(), 1);
//! assert_eq!(bv.as_bytes().len(), 13);
//! ```

use crate::error::{FilterError, Result};

/// Fixed-size bit array packed into bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Box<[u8]>,
    len: usize,
}

impl BitVec {
    /// Create a zeroed bit vector of `num_bits` bits.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidFilterSize`] if `num_bits == 0`.
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(FilterError::invalid_filter_size(num_bits));
        }

        let num_bytes = (num_bits + 7) / 8;
        Ok(Self {
            bytes: vec![0u8; num_bytes].into_boxed_slice(),
            len: num_bits,
        })
    }

    /// Number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed vector; present for API completeness.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn locate(&self, index: usize) -> (usize, u8) {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );
        (index / 8, 1u8 << (index % 8))
    }

    /// Set a bit to 1.
    ///
    /// Returns `true` if the bit was previously 0. Setting an already-set
    /// bit changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize) -> bool {
        let (byte, mask) = self.locate(index);
        let was_clear = self.bytes[byte] & mask == 0;
        self.bytes[byte] |= mask;
        was_clear
    }

    /// Read a bit.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        let (byte, mask) = self.locate(index);
        self.bytes[byte] & mask != 0
    }

    /// Number of bits set to 1.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Raw packed bytes. Padding bits past `len` in the last byte are always 0.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Heap plus inline size in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bytes.len() + std::mem::size_of::<Self>()
    }
}
