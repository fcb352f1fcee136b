//! Xoroshiro128+ random number generator
//!
//! The generator every level of the spawn pipeline is seeded with. A fresh
//! generator holds `(seed, XOROSHIRO_CONST)`, so its first output is
//! `seed + XOROSHIRO_CONST`.

use crate::constants::XOROSHIRO_CONST;

/// Xoroshiro128+ generator state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Xoroshiro128Plus {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128Plus {
    /// Create a generator seeded with a single 64-bit value
    pub fn new(seed: u64) -> Self {
        Self {
            s0: seed,
            s1: XOROSHIRO_CONST,
        }
    }

    /// Create a generator from an explicit `(s0, s1)` state
    pub fn from_state(s0: u64, s1: u64) -> Self {
        Self { s0, s1 }
    }

    /// Current `(s0, s1)` state
    pub fn state(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }

    /// Generate the next 64-bit output and advance the state
    #[inline]
    pub fn next(&mut self) -> u64 {
        let s0 = self.s0;
        let mut s1 = self.s1;
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.s0 = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.s1 = s1.rotate_left(37);

        result
    }

    /// Generate a value in `0..max` by masked rejection sampling
    ///
    /// # Arguments
    /// * `max` - Exclusive upper bound; must be non-zero
    ///
    /// # Returns
    /// `next() & mask` for the first draw below `max`, where `mask` is the
    /// smallest all-ones value covering `max - 1`
    #[inline]
    pub fn next_int(&mut self, max: u64) -> u64 {
        let mask = bitmask(max);
        loop {
            let value = self.next() & mask;
            if value < max {
                return value;
            }
        }
    }

    /// Discard `count` outputs
    pub fn advance(&mut self, count: usize) {
        for _ in 0..count {
            self.next();
        }
    }
}

/// Smallest all-ones mask covering `max - 1`
#[inline]
fn bitmask(max: u64) -> u64 {
    let mut x = max.wrapping_sub(1);
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    x
}
