//! End-to-end reversal tests
//!
//! Recovers known seeds from entities generated by single and multi spawners.
//!
//! ## Fixtures
//!
//! - **Single spawn**: two consecutive spawns of one spawner (4 PID rolls),
//!   supplied in reverse spawn order
//! - **Multi spawn**: four slots of one spawner (13 PID rolls), the last one
//!   an alpha with three flawless IVs
//!
//! Poke seed candidates are shared between tests via `OnceLock`, since gen
//! seed reversal dominates the run time.

use std::sync::OnceLock;
use std::time::Instant;

use pla_seed_reversal::app::gen_seed_reversal::{find_potential_gen_seeds, get_poke_seed};
use pla_seed_reversal::app::group_seed_reversal::{get_gen_seed, get_group_seed};
use pla_seed_reversal::app::{iterative_reversal, runtime_reversal};
use pla_seed_reversal::domain::generation::{GenerationProfile, generate};
use pla_seed_reversal::domain::spawner::{gen_seeds, poke_seeds};
use pla_seed_reversal::{
    Entity, GenSeed, GroupSearchOptions, GroupSeed, PokeSeed, SpawnerType, Xoroshiro128Plus,
    find_seed, find_seed_with_options,
};
use rand::RngCore;

// =============================================================================
// Fixtures
// =============================================================================

const SINGLE_GROUP_SEED: u64 = 0x38dd_6076_47e5_b2b5;
const SINGLE_ROLL_COUNT: u32 = 5;

const MULTI_GROUP_SEED: u64 = 0x9a4b_d55e_3c2f_8e61;
const MULTI_ROLL_COUNT: u32 = 17;

fn single_spawn_entity(ec: u32, pid: u32, ivs: [u8; 6], attrs: [u8; 5]) -> Entity {
    let [ability_slot, gender, nature, height_scalar, weight_scalar] = attrs;
    Entity {
        encryption_constant: ec,
        pid,
        tid: 15156,
        sid: 10217,
        ivs,
        ability_slot,
        gender,
        nature,
        height_scalar,
        weight_scalar,
        gender_ratio: 31,
        ..Default::default()
    }
}

fn multi_spawn_entity(ec: u32, pid: u32, ivs: [u8; 6], attrs: [u8; 5], is_alpha: bool) -> Entity {
    let [ability_slot, gender, nature, height_scalar, weight_scalar] = attrs;
    Entity {
        encryption_constant: ec,
        pid,
        tid: 48301,
        sid: 2219,
        ivs,
        ability_slot,
        gender,
        nature,
        is_alpha,
        height_scalar,
        weight_scalar,
        gender_ratio: 127,
        ..Default::default()
    }
}

/// Second spawn first, then the first spawn
fn single_spawn_entities() -> &'static [Entity] {
    static ENTITIES: OnceLock<Vec<Entity>> = OnceLock::new();
    ENTITIES.get_or_init(|| {
        vec![
            single_spawn_entity(0xc417_f0c7, 0xe6c6_3768, [20, 21, 10, 2, 14, 7], [1, 0, 12, 106, 191]),
            single_spawn_entity(0x76e0_757e, 0x37a4_fb14, [4, 13, 26, 28, 28, 13], [0, 1, 16, 86, 161]),
        ]
    })
}

/// Slots 0 to 3 in spawn order
fn multi_spawn_entities() -> &'static [Entity] {
    static ENTITIES: OnceLock<Vec<Entity>> = OnceLock::new();
    ENTITIES.get_or_init(|| {
        vec![
            multi_spawn_entity(0x3ece_db8b, 0x6260_0ccf, [9, 22, 4, 23, 25, 8], [0, 0, 16, 191, 177], false),
            multi_spawn_entity(0x7e5f_d4e3, 0x257d_2a32, [25, 10, 25, 26, 17, 20], [0, 0, 23, 168, 101], false),
            multi_spawn_entity(0xf57f_d12a, 0xe9d9_3091, [16, 24, 17, 23, 28, 1], [0, 0, 1, 196, 40], false),
            multi_spawn_entity(0x4595_0c94, 0x8fcf_f6ee, [21, 31, 31, 8, 31, 16], [1, 1, 1, 255, 255], true),
        ]
    })
}

/// Poke seeds recovered for each multi spawn slot
fn multi_spawn_poke_seeds() -> &'static [Vec<PokeSeed>] {
    static SEEDS: OnceLock<Vec<Vec<PokeSeed>>> = OnceLock::new();
    SEEDS.get_or_init(|| {
        multi_spawn_entities()
            .iter()
            .map(|entity| {
                iterative_reversal::find_poke_seeds(entity, MULTI_ROLL_COUNT).expect("valid entity")
            })
            .collect()
    })
}

fn seeds(values: &[u64]) -> Vec<GenSeed> {
    let mut seeds: Vec<GenSeed> = values.iter().copied().map(GenSeed).collect();
    seeds.sort();
    seeds
}

// =============================================================================
// Level inversion
// =============================================================================

#[test]
fn test_group_seed_from_first_output() {
    let mut rng = Xoroshiro128Plus::new(0xce66_2cc3_0520_1801);
    let gen_seed = GenSeed(rng.next());
    assert_eq!(gen_seed, GenSeed(0x5108_de38_27bd_825c));
    assert_eq!(get_group_seed(gen_seed), GroupSeed(0xce66_2cc3_0520_1801));
}

#[test]
fn test_gen_seed_reversal_none() {
    assert!(find_potential_gen_seeds(PokeSeed(5)).is_empty());
}

#[test]
fn test_gen_seed_reversal_one() {
    assert_eq!(
        find_potential_gen_seeds(PokeSeed(0xfcca_2321_c7d6_55ed)),
        seeds(&[0xad81_9080_a1ef_fcf6])
    );
}

#[test]
fn test_gen_seed_reversal_two() {
    assert_eq!(
        find_potential_gen_seeds(PokeSeed(0x366a_1a7e_d65e_146c)),
        seeds(&[0x041b_4ef9_172f_53f3, 0xd9d1_e54d_f500_36ec])
    );
}

#[test]
fn test_gen_seed_reversal_three() {
    let start = Instant::now();
    let found = find_potential_gen_seeds(PokeSeed(0xa69d_3c25_666a_8c6a));
    eprintln!("three-candidate gen seed reversal: {:?}", start.elapsed());

    assert_eq!(
        found,
        seeds(&[0x323f_f4f7_1fb9_898c, 0x3d8d_7e99_5f75_69fe, 0x0eec_4cff_d259_5d1b])
    );
    for gen_seed in found {
        assert_eq!(get_poke_seed(gen_seed), PokeSeed(0xa69d_3c25_666a_8c6a));
    }
}

#[test]
fn test_gen_seed_reversal_recovers_random_slot() {
    let mut rng = rand::thread_rng();
    let gen_seed = GenSeed(rng.next_u64());
    let poke = get_poke_seed(gen_seed);

    let found = find_potential_gen_seeds(poke);
    assert!(found.contains(&gen_seed), "{gen_seed} not recovered from {poke}");
    assert!(found.iter().all(|&candidate| get_poke_seed(candidate) == poke));
}

// =============================================================================
// Entity reversal
// =============================================================================

#[test]
fn test_anti_shiny_entity() {
    let entity = Entity {
        encryption_constant: 0x86b2_b1f7,
        pid: 0x79d2_7501,
        tid: 15156,
        sid: 10217,
        ivs: [25, 11, 11, 19, 13, 21],
        ability_slot: 1,
        gender: 1,
        nature: 2,
        height_scalar: 143,
        weight_scalar: 173,
        gender_ratio: 127,
        ..Default::default()
    };
    assert!(runtime_reversal::is_potential_anti_shiny(entity.tid, entity.sid, entity.pid));

    let found = iterative_reversal::find_poke_seeds(&entity, 4).expect("valid entity");
    assert_eq!(found, vec![PokeSeed(0xeab4_77d2_6415_479c)]);
}

#[test]
fn test_shiny_entity() {
    let entity = Entity {
        encryption_constant: 0x696f_06fe,
        pid: 0x88a1_947d,
        tid: 15156,
        sid: 10217,
        ivs: [15, 25, 18, 16, 7, 25],
        ability_slot: 0,
        gender: 0,
        nature: 16,
        height_scalar: 93,
        weight_scalar: 114,
        gender_ratio: 127,
        ..Default::default()
    };

    let found = iterative_reversal::find_poke_seeds(&entity, 4).expect("valid entity");
    assert_eq!(found, vec![PokeSeed(0xe063_2057_46d1_9ca3)]);
}

#[test]
fn test_shiny_alpha_entity() {
    // Flawless IVs and a shiny PID leave only the encryption constant and
    // the low PID half to constrain the search
    let seed = PokeSeed(0x0bd6_1bb3_0640_de0c);
    let profile = GenerationProfile {
        tid: 48301,
        sid: 2219,
        gender_ratio: 127,
        flawless_ivs: 3,
        is_alpha: true,
    };
    let generated = generate(seed, 8, &profile);
    assert!(generated.rolled_shiny);

    let entity = Entity {
        encryption_constant: generated.encryption_constant,
        pid: generated.pid,
        tid: profile.tid,
        sid: profile.sid,
        ivs: generated.ivs,
        ability_slot: generated.ability_slot,
        gender: generated.gender,
        nature: generated.nature,
        is_alpha: true,
        height_scalar: generated.height,
        weight_scalar: generated.weight,
        gender_ratio: profile.gender_ratio,
        ..Default::default()
    };
    assert_eq!(entity.encryption_constant, 0x28de_4867);
    assert_eq!(entity.pid, 0x8159_355e);

    let start = Instant::now();
    let found = iterative_reversal::find_poke_seeds(&entity, 8).expect("complete search");
    eprintln!("shiny alpha poke seed search: {:?}", start.elapsed());
    assert_eq!(found, vec![seed]);

    let runtime = runtime_reversal::find_poke_seeds_from(&entity, 7, 1).expect("complete search");
    assert_eq!(runtime, vec![seed]);
}

#[test]
fn test_entity_without_size_scalars() {
    let first_spawn = single_spawn_entities()[1];
    let expected = gen_seeds(GroupSeed(SINGLE_GROUP_SEED), SpawnerType::SingleSpawn, 1)[0];

    // Whatever the record holds in its size fields is ignored
    for scalar in [0, 200] {
        let entity = Entity {
            height_scalar: scalar,
            weight_scalar: scalar,
            has_size_scalars: false,
            ..first_spawn
        };
        let found = iterative_reversal::get_seeds(&entity, SINGLE_ROLL_COUNT).expect("valid entity");
        assert!(found.contains(&expected), "size scalar {scalar}");
        assert!(found.iter().all(|&gen_seed| get_poke_seed(gen_seed) == PokeSeed(0x76a5_5504_5443_0b23)));
    }
}

#[test]
fn test_random_entities_reverse() {
    let mut rng = rand::thread_rng();
    let profile = GenerationProfile {
        tid: 48301,
        sid: 2219,
        gender_ratio: 127,
        flawless_ivs: 0,
        is_alpha: false,
    };

    for _ in 0..8 {
        let seed = PokeSeed(rng.next_u64());
        let generated = generate(seed, 3, &profile);
        let entity = Entity {
            encryption_constant: generated.encryption_constant,
            pid: generated.pid,
            tid: profile.tid,
            sid: profile.sid,
            ivs: generated.ivs,
            ability_slot: generated.ability_slot,
            gender: generated.gender,
            nature: generated.nature,
            height_scalar: generated.height,
            weight_scalar: generated.weight,
            gender_ratio: profile.gender_ratio,
            ..Default::default()
        };

        let found = runtime_reversal::find_poke_seeds_from(&entity, 0, 3).expect("valid entity");
        assert!(found.contains(&seed), "{seed} not recovered");
    }
}

#[test]
fn test_multi_spawn_slots_reverse() {
    let expected = poke_seeds(GroupSeed(MULTI_GROUP_SEED), SpawnerType::MultiSpawn, 4);
    for (slot, found) in multi_spawn_poke_seeds().iter().enumerate() {
        assert_eq!(found, &vec![expected[slot]], "slot {slot}");
    }
}

#[test]
fn test_multi_spawn_get_seeds() {
    let expected = gen_seeds(GroupSeed(MULTI_GROUP_SEED), SpawnerType::MultiSpawn, 4);
    for (slot, entity) in multi_spawn_entities().iter().enumerate() {
        let found = iterative_reversal::get_seeds(entity, MULTI_ROLL_COUNT).expect("valid entity");
        assert!(!found.is_empty(), "slot {slot}");
        assert!(found.contains(&expected[slot]), "slot {slot}");
    }
}

#[test]
fn test_runtime_matches_iterative() {
    let entity = &multi_spawn_entities()[0];
    let runtime = runtime_reversal::get_seeds(entity, MULTI_ROLL_COUNT).expect("valid entity");
    let iterative = iterative_reversal::get_seeds(entity, MULTI_ROLL_COUNT).expect("valid entity");
    assert_eq!(runtime, iterative);
    assert_eq!(runtime, seeds(&[0x1cee_86d3_5ecc_f8bc]));
}

// =============================================================================
// Group seed search
// =============================================================================

#[test]
fn test_single_spawn_group_seed() {
    let start = Instant::now();
    let found = find_seed(single_spawn_entities(), SINGLE_ROLL_COUNT, SpawnerType::SingleSpawn)
        .expect("valid entities")
        .expect("group seed found");
    eprintln!("single spawn group seed search: {:?}", start.elapsed());

    assert_eq!(found.seed, GroupSeed(SINGLE_GROUP_SEED));
    assert_eq!(found.first_index, 1);
    assert_eq!(found.offsets, vec![1, 0]);
}

#[test]
fn test_multi_spawn_group_seed() {
    let found = find_seed(multi_spawn_entities(), MULTI_ROLL_COUNT, SpawnerType::MultiSpawn)
        .expect("valid entities")
        .expect("group seed found");

    assert_eq!(found.seed, GroupSeed(MULTI_GROUP_SEED));
    assert_eq!(found.first_index, 0);
    assert_eq!(found.offsets, vec![0, 1, 2, 3]);
    assert_eq!(get_gen_seed(found.seed), GenSeed(0x1cee_86d3_5ecc_f8bc));
}

#[test]
fn test_multi_spawn_wrong_topology() {
    let entities = &multi_spawn_entities()[..2];
    let found = find_seed(entities, MULTI_ROLL_COUNT, SpawnerType::SingleSpawn)
        .expect("valid entities");
    assert!(found.is_none());
}

#[test]
fn test_multi_spawn_lookahead_too_short() {
    // Slot 3 is three spawns after slot 0
    let entities = [multi_spawn_entities()[0], multi_spawn_entities()[3]];
    let options = GroupSearchOptions::for_multi_spawn(MULTI_ROLL_COUNT, 3);
    let found = find_seed_with_options(&entities, SpawnerType::MultiSpawn, &options)
        .expect("valid entities");
    assert!(found.is_none());

    let options = options.with_spawn_lookahead(3);
    let found = find_seed_with_options(&entities, SpawnerType::MultiSpawn, &options)
        .expect("valid entities")
        .expect("group seed found");
    assert_eq!(found.offsets, vec![0, 3]);
}
