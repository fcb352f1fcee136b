//! pla-seed-reversal - Seed reversal for Pokemon Legends: Arceus overworld spawns
//!
//! This crate provides functionality to:
//! - Replay Xoroshiro128+ and the entity generation of a spawn
//! - Recover the poke seeds that generate an observed entity
//! - Walk poke seeds back to gen seeds and group seeds
//! - Find the group seed shared by several entities of one spawner

pub mod constants;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use app::error::SearchError;
pub use app::group_seed_finder::{GroupMatch, GroupSearchOptions, find_seed, find_seed_with_options};
pub use constants::*;
pub use domain::attributes::{AttributeError, FixedAttributes, PackedAttributes};
pub use domain::entity::{Entity, EntityRecord};
pub use domain::seed::{GenSeed, GroupSeed, PokeSeed};
pub use domain::spawner::SpawnerType;
pub use domain::xoroshiro::Xoroshiro128Plus;
