//! Group seed search
//!
//! A single entity usually admits several gen seeds, and so several group
//! seeds. Entities from the same spawner pin the group seed down: the true
//! group seed has to produce every one of them at some position of its spawn
//! sequence. For each entity in turn the search assumes it spawned first,
//! turns each of its gen seeds into a group seed, and replays the spawner to
//! look for the other entities' poke seeds. The poke seeds of the assumed
//! first entity are reversed in parallel.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::app::error::SearchError;
use crate::app::gen_seed_reversal::find_potential_gen_seeds;
use crate::app::group_seed_reversal::get_group_seed;
use crate::app::iterative_reversal::find_poke_seeds;
use crate::constants::{DEFAULT_ROLL_COUNT, DEFAULT_SPAWN_LOOKAHEAD};
use crate::domain::entity::EntityRecord;
use crate::domain::seed::{GroupSeed, PokeSeed};
use crate::domain::spawner::{SpawnerType, poke_seeds};

/// Search limits for [`find_seed_with_options`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupSearchOptions {
    /// PID roll positions examined per entity
    pub roll_count: u32,
    /// Spawns after the first one that other entities may occupy
    pub spawn_lookahead: usize,
}

impl GroupSearchOptions {
    /// Options with the given roll count and the default lookahead
    pub fn new(roll_count: u32) -> Self {
        Self {
            roll_count,
            spawn_lookahead: DEFAULT_SPAWN_LOOKAHEAD,
        }
    }

    /// Options for entities spawned together from one multi spawner
    ///
    /// Every other entity must be among the next `slots - 1` spawns.
    pub fn for_multi_spawn(roll_count: u32, slots: usize) -> Self {
        Self {
            roll_count,
            spawn_lookahead: slots.saturating_sub(1),
        }
    }

    /// Replace the lookahead
    pub fn with_spawn_lookahead(mut self, spawn_lookahead: usize) -> Self {
        self.spawn_lookahead = spawn_lookahead;
        self
    }
}

impl Default for GroupSearchOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ROLL_COUNT)
    }
}

/// Group seed explaining every supplied entity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupMatch {
    /// Recovered group seed
    pub seed: GroupSeed,
    /// Index (into the supplied entities) of the entity spawned first
    pub first_index: usize,
    /// Spawn position of each entity relative to the first one
    pub offsets: Vec<usize>,
}

/// Recover the group seed shared by `entities`
///
/// # Arguments
/// * `entities` - Entities observed from one spawner
/// * `roll_count` - PID roll positions examined per entity
/// * `spawner` - How the spawner derives gen seeds
///
/// # Returns
/// The first group seed (in input order, then ascending seed order) that
/// produces every entity, or `None`
pub fn find_seed<R: EntityRecord + Sync>(
    entities: &[R],
    roll_count: u32,
    spawner: SpawnerType,
) -> Result<Option<GroupMatch>, SearchError> {
    find_seed_with_options(entities, spawner, &GroupSearchOptions::new(roll_count))
}

/// Recover the group seed shared by `entities` with explicit search limits
pub fn find_seed_with_options<R: EntityRecord + Sync>(
    entities: &[R],
    spawner: SpawnerType,
    options: &GroupSearchOptions,
) -> Result<Option<GroupMatch>, SearchError> {
    if entities.is_empty() {
        return Ok(None);
    }

    let candidates = entities
        .par_iter()
        .map(|entity| {
            find_poke_seeds(entity, options.roll_count)
                .map(|seeds| seeds.into_iter().collect::<FxHashSet<PokeSeed>>())
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(index) = candidates.iter().position(|seeds| seeds.is_empty()) {
        tracing::debug!(index, "entity has no poke seed candidates");
        return Ok(None);
    }

    let found = (0..candidates.len()).find_map(|first_index| {
        match_first(first_index, &candidates, spawner, options.spawn_lookahead)
    });
    if let Some(found) = found {
        tracing::debug!(
            seed = %found.seed,
            first_index = found.first_index,
            offsets = ?found.offsets,
            "group seed found"
        );
        return Ok(Some(found));
    }

    tracing::debug!(entities = entities.len(), "no group seed explains every entity");
    Ok(None)
}

/// First group seed, in ascending poke then gen seed order, that places
/// every entity when `first_index` spawned first
fn match_first(
    first_index: usize,
    candidates: &[FxHashSet<PokeSeed>],
    spawner: SpawnerType,
    lookahead: usize,
) -> Option<GroupMatch> {
    let mut first_seeds: Vec<PokeSeed> = candidates[first_index].iter().copied().collect();
    first_seeds.sort_unstable();

    first_seeds.par_iter().find_map_first(|&poke| {
        find_potential_gen_seeds(poke).into_iter().find_map(|gen_seed| {
            let seed = get_group_seed(gen_seed);
            align(seed, first_index, candidates, spawner, lookahead).map(|offsets| GroupMatch {
                seed,
                first_index,
                offsets,
            })
        })
    })
}

/// Spawn position of every entity, assuming `first_index` spawned first from `group`
fn align(
    group: GroupSeed,
    first_index: usize,
    candidates: &[FxHashSet<PokeSeed>],
    spawner: SpawnerType,
    lookahead: usize,
) -> Option<Vec<usize>> {
    let spawned = poke_seeds(group, spawner, lookahead + 1);

    candidates
        .iter()
        .enumerate()
        .map(|(index, seeds)| {
            if index == first_index {
                Some(0)
            } else {
                (1..spawned.len()).find(|&offset| seeds.contains(&spawned[offset]))
            }
        })
        .collect()
}
