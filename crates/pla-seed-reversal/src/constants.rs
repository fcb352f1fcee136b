//! Seed reversal constants
//!
//! Note: the GF(2) search limits live here so that callers can reason about
//! worst-case work without reading the solver.

// =============================================================================
// Xoroshiro128+ parameters
// =============================================================================

/// Initial `s1` word of a freshly seeded generator
///
/// Also the offset between a group seed and the gen seed it produces first.
pub const XOROSHIRO_CONST: u64 = 0x82A2_B175_229D_6A5B;

/// Bound passed to `next_int` for 32-bit draws (encryption constant, PID)
pub const U32_BOUND: u64 = 0xFFFF_FFFF;

// =============================================================================
// Shininess
// =============================================================================

/// Shiny xor below this value marks a shiny PID
pub const SHINY_XOR_LIMIT: u32 = 16;

/// Bit flipped by the anti-shiny PID rewrite
pub const ANTI_SHINY_MASK: u32 = 0x1000_0000;

// =============================================================================
// Entity generation
// =============================================================================

/// Number of IVs per entity (HP, Atk, Def, SpA, SpD, Spe)
pub const IV_COUNT: usize = 6;

/// IV value assigned to flawless slots
pub const MAX_IV: u8 = 31;

/// Low bits of a PRNG output that carry a random IV
pub const IV_BITS: u32 = 5;

/// Height and weight scalar of an alpha
pub const ALPHA_SCALAR: u8 = 255;

/// Flawless IV count of an alpha
pub const ALPHA_FLAWLESS_IVS: u8 = 3;

/// Number of natures
pub const NATURE_COUNT: u8 = 25;

/// Gender ratio of an always-male species
pub const RATIO_MALE_ONLY: u8 = 0;

/// Gender ratio of an always-female species
pub const RATIO_FEMALE_ONLY: u8 = 254;

/// Gender ratio of a genderless species
pub const RATIO_GENDERLESS: u8 = 255;

// =============================================================================
// Search limits
// =============================================================================

/// Default PID reroll positions examined per entity
pub const DEFAULT_ROLL_COUNT: u32 = 17;

/// Highest PID roll position a reversal will examine
pub const MAX_ROLL_POSITION: u32 = 256;

/// Default number of spawns past the first one checked by the group finder
pub const DEFAULT_SPAWN_LOOKAHEAD: usize = 16;

/// Largest affine solution space enumerated point by point (2^20 points)
#[cfg(not(test))]
pub const MAX_FREE_DIMENSIONS: u32 = 20;

/// Largest affine solution space enumerated point by point - reduced for unit tests
#[cfg(test)]
pub const MAX_FREE_DIMENSIONS: u32 = 12;

/// Carry branches deep enough that forking onto the rayon pool no longer pays
pub const PARALLEL_SPLIT_DEPTH: u32 = 8;
