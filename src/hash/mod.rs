//! Slot index derivation.
//!
//! ```text
//! hash/
//! ├── hasher.rs  - BloomHasher trait, DigestHasher, FnHasher
//! ├── family.rs  - HashFamily: ordered hashers, one per seed
//! └── mod.rs     - This file
//! ```
//!
//! `slot_index(item, i) = digest_i(item) mod bit_count`, where `digest_i` is
//! the `i`-th member of the filter's [`HashFamily`].
//!
//! | Seed | Digest  | Output bits |
//! |------|---------|-------------|
//! | 0    | SHA-256 | 256         |
//! | 1    | SHA-1   | 160         |
//! | 2    | MD5     | 128         |
//! | 3    | SHA-384 | 384         |
//! | 4    | SHA-512 | 512         |
//!
//! # Substituting Hashers
//!
//! ```
//! use digestbloom::hash::{FnHasher, HashFamily};
//! use digestbloom::{BloomFilter, BitsetFilter};
//!
//! fn first_byte(bytes: &[u8]) -> u64 {
//!     bytes.first().copied().map_or(0, u64::from)
//! }
//!
//! let family = HashFamily::new(vec![Box::new(FnHasher::new("first_byte", first_byte))]).unwrap();
//! let mut filter = BitsetFilter::with_hash_family(100, 0.01, family).unwrap();
//! filter.add("apple");
//! assert!(filter.query("avocado")); // Same first byte, same slot
//! ```

pub mod family;
pub mod hasher;

pub use family::HashFamily;
pub use hasher::{reduce_be, BloomHasher, DigestHasher, FnHasher};
