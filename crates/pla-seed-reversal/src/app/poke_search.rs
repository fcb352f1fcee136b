//! Poke seed search for a single PID roll position
//!
//! Shared by the iterative and runtime reversals. Output 1 of the poke
//! generator is the encryption constant, output 2 is the fake trainer ID,
//! and the PID drawn by roll `r` is output `2 + r`. Without flawless IVs the
//! six IVs are the low five bits of the outputs right after the last PID.
//!
//! Each constraint is a truncated addition, so the carry solver proposes
//! seeds and [`EntityTarget::matches`] confirms them with a full replay.

use rayon::prelude::*;

use crate::app::error::SearchError;
use crate::app::gen_seed_reversal::find_potential_gen_seeds;
use crate::constants::{ANTI_SHINY_MASK, IV_BITS};
use crate::domain::carry::CarrySolver;
use crate::domain::generation::EntityTarget;
use crate::domain::seed::{GenSeed, PokeSeed};
use crate::domain::shiny::{is_potential_anti_shiny, is_shiny, trainer_id32};
use crate::domain::symbolic::SymbolicXoroshiro;

/// Low bits of a PID kept by the shiny rewrite
const SHINY_PID_BITS: u32 = 16;

/// Find poke seeds whose roll `roll` produced the target's PID
///
/// # Arguments
/// * `target` - Observed entity
/// * `roll` - 1-based PID roll position
/// * `pid_draw` - Symbolic poke generator positioned at the PID draw of `roll`
///
/// # Returns
/// Poke seeds that regenerate the target with `roll` PID rolls, or
/// [`SearchError::Truncated`] when part of the candidate space was too large
/// to enumerate
pub(crate) fn search_roll(
    target: &EntityTarget,
    roll: u32,
    pid_draw: &SymbolicXoroshiro,
) -> Result<Vec<PokeSeed>, SearchError> {
    let profile = &target.profile;
    let shiny = is_shiny(trainer_id32(profile.tid, profile.sid), target.pid);

    // The shiny rewrite only keeps the low half; anti-shiny may have flipped bit 28
    let (pid_bits, rolled_pids) = if shiny {
        (SHINY_PID_BITS, vec![target.pid])
    } else if is_potential_anti_shiny(profile.tid, profile.sid, target.pid) {
        (32, vec![target.pid, target.pid ^ ANTI_SHINY_MASK])
    } else {
        (32, vec![target.pid])
    };

    let start = SymbolicXoroshiro::new();
    let (ec_lhs, ec_rhs) = start.addends();
    let (pid_lhs, pid_rhs) = pid_draw.addends();

    let mut found = Vec::new();
    let mut skipped_spaces = 0;
    for rolled_pid in rolled_pids {
        let mut solver = CarrySolver::new();
        solver.require_sum(ec_lhs, ec_rhs, u64::from(target.encryption_constant), 32);
        solver.require_sum(pid_lhs, pid_rhs, u64::from(rolled_pid), pid_bits);

        if profile.flawless_ivs == 0 {
            let mut iv_draw = *pid_draw;
            for iv in target.ivs {
                iv_draw.step();
                let (lhs, rhs) = iv_draw.addends();
                solver.require_sum(lhs, rhs, u64::from(iv), IV_BITS);
            }
        }

        let solutions = solver.solve(|candidate| target.matches(PokeSeed(candidate), roll));
        skipped_spaces += solutions.skipped_spaces;
        found.extend(solutions.values.into_iter().map(PokeSeed));
    }

    if skipped_spaces > 0 {
        return Err(SearchError::Truncated {
            roll,
            skipped_spaces,
        });
    }

    // Both PID variants can reach full rank early and propose the same seed
    let found = normalize(found);
    if !found.is_empty() {
        tracing::trace!(roll, found = found.len(), "poke seeds at roll");
    }
    Ok(found)
}

/// Symbolic poke generator positioned at the PID draw of `roll`
pub(crate) fn pid_draw(roll: u32) -> SymbolicXoroshiro {
    // Encryption constant and fake trainer ID come first
    SymbolicXoroshiro::new().advanced(1 + roll as usize)
}

/// Gen seeds of every poke seed, sorted and de-duplicated
pub(crate) fn gen_seeds_of(poke_seeds: &[PokeSeed]) -> Vec<GenSeed> {
    let mut seeds: Vec<GenSeed> = poke_seeds
        .par_iter()
        .flat_map_iter(|&poke| find_potential_gen_seeds(poke))
        .collect();
    seeds.sort_unstable();
    seeds.dedup();
    seeds
}

/// Sort and de-duplicate poke seeds found across roll positions
pub(crate) fn normalize(mut seeds: Vec<PokeSeed>) -> Vec<PokeSeed> {
    seeds.sort_unstable();
    seeds.dedup();
    seeds
}
