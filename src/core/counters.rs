//! Byte-wide saturating counter array.
//!
//! One `u8` per slot. Increments stop at [`COUNTER_MAX`] instead of wrapping.
//! A counter that reaches the maximum no longer knows how many increments it
//! absorbed, so it stays saturated: decrements leave it at the maximum. An
//! overflowed slot can therefore only over-report membership, never
//! under-report it. Decrements stop at zero.

/// Largest value a counter can hold.
pub const COUNTER_MAX: u8 = u8::MAX;

/// Fixed-size array of saturating `u8` counters.
///
/// # Examples
///
/// ```
/// use digestbloom::core::CounterVec;
///
/// let mut counters = CounterVec::new(4).unwrap();
/// counters.increment(1);
/// counters.increment(1);
/// assert_eq!(counters.get(1), 2);
/// assert!(counters.decrement(1));
/// assert_eq!(counters.sum(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterVec {
    counters: Box<[u8]>,
}

impl CounterVec {
    /// Create `len` zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidFilterSize`](crate::FilterError::InvalidFilterSize)
    /// if `len == 0`.
    pub fn new(len: usize) -> crate::Result<Self> {
        if len == 0 {
            return Err(crate::FilterError::invalid_filter_size(len));
        }
        Ok(Self {
            counters: vec![0u8; len].into_boxed_slice(),
        })
    }

    /// Number of counters.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Always `false` for a constructed array.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Counter value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.counters[index]
    }

    /// Add one to the counter at `index`.
    ///
    /// Returns `false`, leaving the counter untouched, if it was already at
    /// [`COUNTER_MAX`].
    #[inline]
    pub fn increment(&mut self, index: usize) -> bool {
        let counter = &mut self.counters[index];
        match counter.checked_add(1) {
            Some(next) => {
                *counter = next;
                true
            }
            None => false,
        }
    }

    /// Subtract one from the counter at `index`.
    ///
    /// Returns `false`, leaving the counter untouched, if it was already zero
    /// or is saturated at [`COUNTER_MAX`].
    #[inline]
    pub fn decrement(&mut self, index: usize) -> bool {
        let counter = &mut self.counters[index];
        match *counter {
            0 | COUNTER_MAX => false,
            value => {
                *counter = value - 1;
                true
            }
        }
    }

    /// Sum of all counters.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.counters.iter().map(|&c| u64::from(c)).sum()
    }

    /// Number of counters above zero.
    #[must_use]
    pub fn count_nonzero(&self) -> usize {
        self.counters.iter().filter(|&&c| c > 0).count()
    }

    /// Largest counter value, 0 when all counters are zero.
    #[must_use]
    pub fn max_value(&self) -> u8 {
        self.counters.iter().copied().max().unwrap_or(0)
    }

    /// Raw counter values, one byte per slot.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.counters
    }

    /// Heap plus inline size in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.counters.len() + std::mem::size_of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let counters = CounterVec::new(100).unwrap();
        assert_eq!(counters.len(), 100);
        assert_eq!(counters.sum(), 0);
        assert_eq!(counters.count_nonzero(), 0);
        assert_eq!(counters.max_value(), 0);
    }

    #[test]
    fn test_new_zero_len_error() {
        assert!(CounterVec::new(0).is_err());
    }

    #[test]
    fn test_increment_saturates() {
        let mut counters = CounterVec::new(1).unwrap();
        for _ in 0..COUNTER_MAX {
            assert!(counters.increment(0));
        }
        assert!(!counters.increment(0));
        assert_eq!(counters.get(0), COUNTER_MAX);
    }

    #[test]
    fn test_decrement_stops_at_zero() {
        let mut counters = CounterVec::new(2).unwrap();
        assert!(!counters.decrement(0));
        assert_eq!(counters.get(0), 0);

        counters.increment(1);
        assert!(counters.decrement(1));
        assert!(!counters.decrement(1));
    }

    #[test]
    fn test_saturated_counter_is_sticky() {
        let mut counters = CounterVec::new(1).unwrap();
        for _ in 0..300 {
            counters.increment(0);
        }
        assert!(!counters.decrement(0));
        assert_eq!(counters.get(0), COUNTER_MAX);
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let mut counters = CounterVec::new(1000).unwrap();
        for i in 0..1000 {
            for _ in 0..COUNTER_MAX {
                counters.increment(i);
            }
        }
        assert_eq!(counters.sum(), 1000 * u64::from(COUNTER_MAX));
    }
}
