//! Hash function trait and its implementations.
//!
//! A [`BloomHasher`] maps bytes to a slot index in `[0, modulus)`. Two kinds
//! are provided:
//!
//! - [`DigestHasher`]: any RustCrypto [`Digest`]. The full digest is read as
//!   one big-endian unsigned integer and reduced modulo the slot count, so
//!   every output byte contributes to the index.
//! - [`FnHasher`]: a plain `fn(&[u8]) -> u64`, reduced modulo the slot count.
//!   Intended for deterministic stub hashes in tests.
//!
//! # Examples
//!
//! ```
//! use digestbloom::hash::hasher::{BloomHasher, DigestHasher};
//! use sha2::Sha256;
//!
//! let hasher = DigestHasher::<Sha256>::new("sha256");
//! let index = hasher.slot_index(b"hello", 5535);
//! assert_eq!(index, 2040);
//! assert_eq!(index, hasher.slot_index(b"hello", 5535)); // Deterministic
//! ```

#![allow(clippy::module_name_repetitions)]

use digest::Digest;
use std::fmt;
use std::marker::PhantomData;

/// Maps an item's bytes to a slot index.
///
/// # Requirements
///
/// - **Total**: defined for every byte string, including the empty one.
/// - **Deterministic**: the same `(bytes, modulus)` always yields the same
///   index for the lifetime of the program.
/// - **In range**: the result is always `< modulus`.
///
/// Stability across processes or crate versions is not promised.
pub trait BloomHasher: Send + Sync {
    /// Slot index of `bytes` in a filter of `modulus` slots.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `modulus == 0`. Filters never pass zero.
    fn slot_index(&self, bytes: &[u8], modulus: usize) -> usize;

    /// Human-readable name for debugging.
    fn name(&self) -> &'static str;
}

/// Reduce a big-endian unsigned integer modulo `modulus`.
///
/// Horner's rule one byte at a time; the accumulator stays below
/// `modulus × 256`, which fits in `u128` for any `usize` modulus.
///
/// # Panics
///
/// Panics if `modulus == 0`.
///
/// # Examples
///
/// ```
/// use digestbloom::hash::hasher::reduce_be;
///
/// assert_eq!(reduce_be(&[0x01, 0x00], 7), 256 % 7);
/// assert_eq!(reduce_be(&[], 7), 0);
/// ```
#[must_use]
pub fn reduce_be(bytes: &[u8], modulus: usize) -> usize {
    assert!(modulus > 0, "modulus must be > 0");
    let m = modulus as u128;
    let rem = bytes
        .iter()
        .fold(0u128, |acc, &b| ((acc << 8) | u128::from(b)) % m);
    rem as usize
}

/// Slot hasher backed by a cryptographic digest.
pub struct DigestHasher<D> {
    name: &'static str,
    _digest: PhantomData<fn() -> D>,
}

impl<D: Digest> DigestHasher<D> {
    /// Wrap digest `D` under `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _digest: PhantomData,
        }
    }
}

impl<D> Clone for DigestHasher<D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            _digest: PhantomData,
        }
    }
}

impl<D> fmt::Debug for DigestHasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestHasher").field("name", &self.name).finish()
    }
}

impl<D: Digest> BloomHasher for DigestHasher<D> {
    #[inline]
    fn slot_index(&self, bytes: &[u8], modulus: usize) -> usize {
        reduce_be(&D::digest(bytes), modulus)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Slot hasher backed by a plain function pointer.
///
/// # Examples
///
/// ```
/// use digestbloom::hash::hasher::{BloomHasher, FnHasher};
///
/// fn length(bytes: &[u8]) -> u64 {
///     bytes.len() as u64
/// }
///
/// let hasher = FnHasher::new("length", length);
/// assert_eq!(hasher.slot_index(b"abcdefghij", 4), 2);
/// ```
#[derive(Clone, Copy)]
pub struct FnHasher {
    name: &'static str,
    hash: fn(&[u8]) -> u64,
}

impl FnHasher {
    /// Wrap `hash` under `name`.
    #[must_use]
    pub const fn new(name: &'static str, hash: fn(&[u8]) -> u64) -> Self {
        Self { name, hash }
    }
}

impl fmt::Debug for FnHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHasher").field("name", &self.name).finish()
    }
}

impl BloomHasher for FnHasher {
    #[inline]
    fn slot_index(&self, bytes: &[u8], modulus: usize) -> usize {
        assert!(modulus > 0, "modulus must be > 0");
        (u128::from((self.hash)(bytes)) % modulus as u128) as usize
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
