//! Ordered, immutable sets of independent slot hashers.
//!
//! Seed `i` selects the `i`-th hasher, so `slot_index(item, i)` is simply
//! `hashers[i].slot_index(item, m)`. Using structurally different digests
//! instead of one salted digest gives independent indices without any
//! reasoning about avalanche behavior; the cost is that a family of `N`
//! hashers supports at most `N` hash functions per filter.

use super::hasher::{BloomHasher, DigestHasher};
use crate::error::{FilterError, Result};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use std::fmt;
use std::sync::Arc;

/// An ordered list of hashers shared by reference between filters.
///
/// Cloning is cheap and every clone sees the same hashers; the list cannot be
/// modified after construction.
///
/// # Examples
///
/// ```
/// use digestbloom::hash::HashFamily;
///
/// let family = HashFamily::standard();
/// assert_eq!(family.len(), 5);
/// assert_eq!(family.names(), vec!["sha256", "sha1", "md5", "sha384", "sha512"]);
///
/// let first = family.slot_index(b"hello", 0, 5535);
/// assert_eq!(first, 2040);
/// ```
#[derive(Clone)]
pub struct HashFamily {
    hashers: Arc<[Box<dyn BloomHasher>]>,
}

impl HashFamily {
    /// Build a family from hashers in seed order.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::EmptyHashFamily`] if `hashers` is empty.
    pub fn new(hashers: Vec<Box<dyn BloomHasher>>) -> Result<Self> {
        if hashers.is_empty() {
            return Err(FilterError::EmptyHashFamily);
        }
        Ok(Self {
            hashers: hashers.into(),
        })
    }

    /// The five-digest family: SHA-256, SHA-1, MD5, SHA-384, SHA-512.
    #[must_use]
    pub fn standard() -> Self {
        let hashers: Vec<Box<dyn BloomHasher>> = vec![
            Box::new(DigestHasher::<Sha256>::new("sha256")),
            Box::new(DigestHasher::<Sha1>::new("sha1")),
            Box::new(DigestHasher::<Md5>::new("md5")),
            Box::new(DigestHasher::<Sha384>::new("sha384")),
            Box::new(DigestHasher::<Sha512>::new("sha512")),
        ];
        Self {
            hashers: hashers.into(),
        }
    }

    /// Number of hashers, the ceiling on a filter's hash count.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.hashers.len()
    }

    /// Always `false`: empty families are rejected at construction.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hashers.is_empty()
    }

    /// Hasher names in seed order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.hashers.iter().map(|h| h.name()).collect()
    }

    /// Slot of `bytes` under seed `seed` in a filter of `modulus` slots.
    ///
    /// Seeds past the end of the family wrap around.
    #[must_use]
    #[inline]
    pub fn slot_index(&self, bytes: &[u8], seed: usize, modulus: usize) -> usize {
        self.hashers[seed % self.hashers.len()].slot_index(bytes, modulus)
    }

    /// Slots of `bytes` for seeds `0..count`, in seed order.
    pub fn slot_indices<'a>(
        &'a self,
        bytes: &'a [u8],
        count: usize,
        modulus: usize,
    ) -> impl Iterator<Item = usize> + 'a {
        (0..count).map(move |seed| self.slot_index(bytes, seed, modulus))
    }
}

impl Default for HashFamily {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
