//! Application layer - Reversal workflows
//!
//! This module walks the spawn pipeline backwards one level at a time and
//! cross-references entities to recover the group seed.

pub mod error;
pub mod gen_seed_reversal;
pub mod group_seed_finder;
pub mod group_seed_reversal;
pub mod iterative_reversal;
mod poke_search;
pub mod runtime_reversal;
