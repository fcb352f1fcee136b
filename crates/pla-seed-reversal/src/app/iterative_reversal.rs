//! Iterative reversal
//!
//! Searches every PID roll position of an entity independently, rebuilding
//! the symbolic generator for each position so the positions can run in
//! parallel. Recovered poke seeds are then walked back to gen seeds.

use rayon::prelude::*;

use crate::app::error::{SearchError, last_roll};
use crate::app::poke_search::{gen_seeds_of, normalize, pid_draw, search_roll};
use crate::domain::entity::EntityRecord;
use crate::domain::generation::EntityTarget;
use crate::domain::seed::{GenSeed, PokeSeed};

/// Find poke seeds that generate `entity` within `roll_count` PID rolls
///
/// # Arguments
/// * `entity` - Observed entity
/// * `roll_count` - Number of PID roll positions to examine (1..=roll_count)
///
/// # Returns
/// Sorted, verified poke seeds; empty when none generate the entity
///
/// # Errors
/// [`SearchError::Attribute`] for unpackable attributes,
/// [`SearchError::RollWindow`] past `MAX_ROLL_POSITION` and
/// [`SearchError::Truncated`] when some candidates could not be enumerated
pub fn find_poke_seeds<R: EntityRecord + ?Sized>(
    entity: &R,
    roll_count: u32,
) -> Result<Vec<PokeSeed>, SearchError> {
    let target = EntityTarget::from_record(entity)?;
    let last = last_roll(0, roll_count)?;

    let per_roll = (1..=last)
        .into_par_iter()
        .map(|roll| search_roll(&target, roll, &pid_draw(roll)))
        .collect::<Result<Vec<_>, _>>()?;

    let seeds = normalize(per_roll.into_iter().flatten().collect());
    tracing::debug!(roll_count, found = seeds.len(), "iterative poke seed search");
    Ok(seeds)
}

/// Find gen seeds of every spawn slot that could have produced `entity`
///
/// # Arguments
/// * `entity` - Observed entity
/// * `roll_count` - Number of PID roll positions to examine
///
/// # Returns
/// Sorted gen seeds; empty when the entity cannot be explained
pub fn get_seeds<R: EntityRecord + ?Sized>(
    entity: &R,
    roll_count: u32,
) -> Result<Vec<GenSeed>, SearchError> {
    let poke_seeds = find_poke_seeds(entity, roll_count)?;
    Ok(gen_seeds_of(&poke_seeds))
}
