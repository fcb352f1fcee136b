//! Symbolic Xoroshiro128+ over GF(2)
//!
//! Every bit of the generator state is an affine function (xor of seed bits
//! plus a constant) of one unknown 64-bit seed. The state transition only
//! uses xor, rotations and shifts, so it keeps that form forever; only the
//! output addition leaves GF(2), which is why outputs are exposed as the
//! pair of words that get added.

use crate::constants::XOROSHIRO_CONST;

// =============================================================================
// AffineWord
// =============================================================================

/// A 64-bit word whose bits are affine functions of an unknown seed
///
/// Bit `i` of the word equals `parity(masks[i] & seed) ^ constant_bit(i)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffineWord {
    masks: [u64; 64],
    constant: u64,
}

impl AffineWord {
    /// The unknown seed itself
    pub fn seed() -> Self {
        let mut masks = [0u64; 64];
        for (i, mask) in masks.iter_mut().enumerate() {
            *mask = 1 << i;
        }
        Self { masks, constant: 0 }
    }

    /// A word that does not depend on the seed
    pub fn constant(value: u64) -> Self {
        Self {
            masks: [0u64; 64],
            constant: value,
        }
    }

    /// Coefficient mask and constant of bit `index`
    #[inline]
    pub fn bit(&self, index: usize) -> (u64, bool) {
        (self.masks[index], (self.constant >> index) & 1 == 1)
    }

    /// Evaluate the word at a concrete seed
    pub fn evaluate(&self, seed: u64) -> u64 {
        self.masks
            .iter()
            .enumerate()
            .fold(self.constant, |acc, (i, mask)| {
                acc ^ (u64::from((mask & seed).count_ones() & 1) << i)
            })
    }

    /// Bitwise xor of two words
    pub fn xor(&self, other: &Self) -> Self {
        let mut masks = self.masks;
        for (mask, rhs) in masks.iter_mut().zip(other.masks.iter()) {
            *mask ^= rhs;
        }
        Self {
            masks,
            constant: self.constant ^ other.constant,
        }
    }

    /// Rotate left by `amount` bits
    pub fn rotate_left(&self, amount: u32) -> Self {
        let mut masks = self.masks;
        masks.rotate_right(amount as usize % 64);
        Self {
            masks,
            constant: self.constant.rotate_left(amount),
        }
    }

    /// Shift left by `amount` bits (`amount < 64`)
    pub fn shift_left(&self, amount: u32) -> Self {
        let amount = amount as usize;
        let mut masks = [0u64; 64];
        masks[amount..].copy_from_slice(&self.masks[..64 - amount]);
        Self {
            masks,
            constant: self.constant << amount,
        }
    }
}

// =============================================================================
// SymbolicXoroshiro
// =============================================================================

/// Xoroshiro128+ seeded with an unknown value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolicXoroshiro {
    s0: AffineWord,
    s1: AffineWord,
}

impl SymbolicXoroshiro {
    /// Generator freshly seeded with the unknown: `(seed, XOROSHIRO_CONST)`
    pub fn new() -> Self {
        Self {
            s0: AffineWord::seed(),
            s1: AffineWord::constant(XOROSHIRO_CONST),
        }
    }

    /// The two words whose wrapping sum is the next output
    pub fn addends(&self) -> (&AffineWord, &AffineWord) {
        (&self.s0, &self.s1)
    }

    /// Apply one state transition (the state change of one `next()` call)
    pub fn step(&mut self) {
        let s1 = self.s1.xor(&self.s0);
        self.s0 = self.s0.rotate_left(24).xor(&s1).xor(&s1.shift_left(16));
        self.s1 = s1.rotate_left(37);
    }

    /// Apply `count` state transitions
    pub fn advance(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    /// Copy of this generator advanced by `count` transitions
    pub fn advanced(&self, count: usize) -> Self {
        let mut copy = *self;
        copy.advance(count);
        copy
    }
}

impl Default for SymbolicXoroshiro {
    fn default() -> Self {
        Self::new()
    }
}
