//! Spawner topologies
//!
//! A spawner turns its group seed into a sequence of gen seeds, one per
//! spawn, and each gen seed into the poke seed its entity is rolled from.
//!
//! - **Single spawn**: one entity at a time. Each respawn reseeds the group
//!   generator with its third output.
//! - **Multi spawn**: several slots filled from one group generator, two
//!   outputs per slot.

use crate::domain::seed::{GenSeed, GroupSeed, PokeSeed};
use crate::domain::xoroshiro::Xoroshiro128Plus;

/// How a spawner derives gen seeds from its group seed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpawnerType {
    SingleSpawn,
    MultiSpawn,
}

/// Poke seed of the entity spawned from `gen_seed`
///
/// The first output of the slot generator is the slot roll; the second is
/// the poke seed.
pub fn gen_to_poke(gen_seed: GenSeed) -> PokeSeed {
    let mut rng = Xoroshiro128Plus::new(gen_seed.value());
    rng.next();
    PokeSeed(rng.next())
}

/// Infinite iterator over the gen seeds a spawner produces, in spawn order
#[derive(Clone, Debug)]
pub struct SpawnSequence {
    spawner: SpawnerType,
    rng: Xoroshiro128Plus,
}

impl SpawnSequence {
    /// Sequence starting from the first spawn of `group`
    pub fn new(group: GroupSeed, spawner: SpawnerType) -> Self {
        Self {
            spawner,
            rng: Xoroshiro128Plus::new(group.value()),
        }
    }
}

impl Iterator for SpawnSequence {
    type Item = GenSeed;

    fn next(&mut self) -> Option<GenSeed> {
        let gen_seed = GenSeed(self.rng.next());
        self.rng.next();
        if self.spawner == SpawnerType::SingleSpawn {
            self.rng = Xoroshiro128Plus::new(self.rng.next());
        }
        Some(gen_seed)
    }
}

/// First `count` gen seeds of a spawner
pub fn gen_seeds(group: GroupSeed, spawner: SpawnerType, count: usize) -> Vec<GenSeed> {
    SpawnSequence::new(group, spawner).take(count).collect()
}

/// First `count` poke seeds of a spawner
pub fn poke_seeds(group: GroupSeed, spawner: SpawnerType, count: usize) -> Vec<PokeSeed> {
    SpawnSequence::new(group, spawner)
        .take(count)
        .map(gen_to_poke)
        .collect()
}
