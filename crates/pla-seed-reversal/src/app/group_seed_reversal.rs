//! Group seed ↔ gen seed conversion
//!
//! The first output of a generator seeded with the group seed is
//! `group + XOROSHIRO_CONST`, which is the gen seed of the first spawn. The
//! map is a bijection on `u64`, so it inverts exactly.

use crate::constants::XOROSHIRO_CONST;
use crate::domain::seed::{GenSeed, GroupSeed};

/// Gen seed of the first spawn of `group`
#[inline]
pub fn get_gen_seed(group: GroupSeed) -> GenSeed {
    GenSeed(group.value().wrapping_add(XOROSHIRO_CONST))
}

/// Group seed whose first spawn has gen seed `gen_seed`
#[inline]
pub fn get_group_seed(gen_seed: GenSeed) -> GroupSeed {
    GroupSeed(gen_seed.value().wrapping_sub(XOROSHIRO_CONST))
}
