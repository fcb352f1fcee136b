//! Gen seed reversal
//!
//! A slot generator discards its first output (the slot roll) and hands its
//! second output to the entity as the poke seed. That output is the sum of
//! two words that are GF(2)-affine in the gen seed, so the carry search
//! proposes every gen seed consistent with the sum and a forward replay
//! confirms each one. Zero, one or several gen seeds may map to the same
//! poke seed.
//!
//! The 64 sum bits fix 63 independent equations, so every leaf of the search
//! has at most one free dimension and the enumeration is always complete.

use crate::domain::carry::CarrySolver;
use crate::domain::seed::{GenSeed, PokeSeed};
use crate::domain::spawner::gen_to_poke;
use crate::domain::symbolic::SymbolicXoroshiro;

/// Poke seed produced by a slot seeded with `gen_seed`
#[inline]
pub fn get_poke_seed(gen_seed: GenSeed) -> PokeSeed {
    gen_to_poke(gen_seed)
}

/// Find every gen seed whose slot produces `poke`
///
/// # Arguments
/// * `poke` - Observed poke seed
///
/// # Returns
/// Sorted gen seeds `g` with `get_poke_seed(g) == poke`; empty when none exist
pub fn find_potential_gen_seeds(poke: PokeSeed) -> Vec<GenSeed> {
    let mut slot = SymbolicXoroshiro::new();
    slot.step();
    let (lhs, rhs) = slot.addends();

    let mut solver = CarrySolver::new();
    solver.require_sum(lhs, rhs, poke.value(), 64);

    let solutions = solver.solve(|candidate| gen_to_poke(GenSeed(candidate)) == poke);
    debug_assert!(solutions.is_complete());
    let seeds: Vec<GenSeed> = solutions.values.into_iter().map(GenSeed).collect();

    tracing::debug!(poke = %poke, found = seeds.len(), "gen seed reversal");
    seeds
}
