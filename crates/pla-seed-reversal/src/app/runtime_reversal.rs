//! Runtime reversal
//!
//! Same search as the iterative reversal, but it walks the roll positions in
//! order with one symbolic generator that is advanced in place. The walk can
//! start after an origin, for spawns whose PID roll count is only known to
//! exceed some value.

use crate::app::error::{SearchError, last_roll};
use crate::app::poke_search::{gen_seeds_of, normalize, search_roll};
use crate::domain::entity::EntityRecord;
use crate::domain::generation::EntityTarget;
use crate::domain::seed::{GenSeed, PokeSeed};
use crate::domain::symbolic::SymbolicXoroshiro;

pub use crate::domain::shiny::is_potential_anti_shiny;

/// Find poke seeds whose PID came from roll positions `origin + 1 ..= origin + roll_count`
///
/// # Arguments
/// * `entity` - Observed entity
/// * `origin` - Roll positions at or below this are skipped
/// * `roll_count` - Number of positions to examine after `origin`
///
/// # Errors
/// [`SearchError::RollWindow`] when `origin + roll_count` is past
/// `MAX_ROLL_POSITION`; otherwise as [`find_poke_seeds`](crate::app::iterative_reversal::find_poke_seeds)
pub fn find_poke_seeds_from<R: EntityRecord + ?Sized>(
    entity: &R,
    origin: u32,
    roll_count: u32,
) -> Result<Vec<PokeSeed>, SearchError> {
    let target = EntityTarget::from_record(entity)?;
    let last = last_roll(origin, roll_count)?;

    // Positioned one step before the PID draw of roll `origin + 1`
    let mut generator = SymbolicXoroshiro::new();
    generator.advance(origin as usize + 1);

    let mut seeds = Vec::new();
    for roll in origin + 1..=last {
        generator.step();
        seeds.extend(search_roll(&target, roll, &generator)?);
    }

    let seeds = normalize(seeds);
    tracing::debug!(origin, roll_count, found = seeds.len(), "runtime poke seed search");
    Ok(seeds)
}

/// Find gen seeds for `entity`, searching roll positions after `origin`
pub fn get_seeds_from<R: EntityRecord + ?Sized>(
    entity: &R,
    origin: u32,
    roll_count: u32,
) -> Result<Vec<GenSeed>, SearchError> {
    let poke_seeds = find_poke_seeds_from(entity, origin, roll_count)?;
    Ok(gen_seeds_of(&poke_seeds))
}

/// Find gen seeds for `entity` over roll positions `1..=roll_count`
pub fn get_seeds<R: EntityRecord + ?Sized>(
    entity: &R,
    roll_count: u32,
) -> Result<Vec<GenSeed>, SearchError> {
    get_seeds_from(entity, 0, roll_count)
}
