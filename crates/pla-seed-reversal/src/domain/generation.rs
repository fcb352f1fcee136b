//! Entity generation from a poke seed
//!
//! Replays the attribute rolls of one spawn. The reversal uses this as the
//! final check for every candidate seed, so it must match the game's draw
//! order exactly:
//!
//! 1. encryption constant, fake trainer ID
//! 2. up to `rolls` PIDs, stopping early on one that is shiny for the fake ID
//! 3. shiny fix-up against the real trainer
//! 4. flawless IV slots, then the remaining IVs
//! 5. ability slot, gender, nature, height, weight

use crate::constants::{
    ALPHA_SCALAR, ANTI_SHINY_MASK, IV_COUNT, MAX_IV, NATURE_COUNT, RATIO_FEMALE_ONLY,
    RATIO_GENDERLESS, RATIO_MALE_ONLY, U32_BOUND,
};
use crate::domain::attributes::{AttributeError, FixedAttributes, PackedAttributes};
use crate::domain::entity::EntityRecord;
use crate::domain::seed::PokeSeed;
use crate::domain::shiny::{is_shiny, shiny_xor, trainer_id32};
use crate::domain::xoroshiro::Xoroshiro128Plus;

/// Trainer and species parameters that shape generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationProfile {
    pub tid: u16,
    pub sid: u16,
    pub gender_ratio: u8,
    pub flawless_ivs: u8,
    pub is_alpha: bool,
}

impl GenerationProfile {
    /// Profile of the spawn that produced `record`
    pub fn from_record<R: EntityRecord + ?Sized>(record: &R) -> Self {
        Self {
            tid: record.tid(),
            sid: record.sid(),
            gender_ratio: record.gender_ratio(),
            flawless_ivs: record.flawless_ivs(),
            is_alpha: record.is_alpha(),
        }
    }

    /// Combined 32-bit trainer ID
    pub fn id32(&self) -> u32 {
        trainer_id32(self.tid, self.sid)
    }
}

/// Attributes rolled from a poke seed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratedEntity {
    pub encryption_constant: u32,
    pub pid: u32,
    pub ivs: [u8; IV_COUNT],
    pub ability_slot: u8,
    pub gender: u8,
    pub nature: u8,
    pub height: u8,
    pub weight: u8,
    /// Whether the PID rolls stopped on a fake-shiny PID
    pub rolled_shiny: bool,
}

/// Generate the entity a poke seed produces
///
/// # Arguments
/// * `seed` - Poke seed
/// * `rolls` - Maximum number of PID rolls (at least one is always made)
/// * `profile` - Trainer and species parameters
pub fn generate(seed: PokeSeed, rolls: u32, profile: &GenerationProfile) -> GeneratedEntity {
    let mut rng = Xoroshiro128Plus::new(seed.value());

    let encryption_constant = rng.next_int(U32_BOUND) as u32;
    let fake_tid = rng.next_int(U32_BOUND) as u32;

    let mut pid = 0u32;
    let mut rolled_shiny = false;
    for _ in 0..rolls.max(1) {
        pid = rng.next_int(U32_BOUND) as u32;
        rolled_shiny = is_shiny(fake_tid, pid);
        if rolled_shiny {
            break;
        }
    }

    let id32 = profile.id32();
    if rolled_shiny {
        if !is_shiny(id32, pid) {
            // Square when the fake xor was zero, star otherwise
            let xor_type = u32::from(shiny_xor(fake_tid, pid) != 0);
            let low = pid & 0xFFFF;
            let high = (u32::from(profile.tid) ^ u32::from(profile.sid) ^ low ^ xor_type) & 0xFFFF;
            pid = (high << 16) | low;
        }
    } else if is_shiny(id32, pid) {
        pid ^= ANTI_SHINY_MASK;
    }

    let ivs = roll_ivs(&mut rng, profile.flawless_ivs);
    let ability_slot = rng.next_int(2) as u8;
    let gender = roll_gender(&mut rng, profile.gender_ratio);
    let nature = rng.next_int(u64::from(NATURE_COUNT)) as u8;

    let (height, weight) = if profile.is_alpha {
        (ALPHA_SCALAR, ALPHA_SCALAR)
    } else {
        let height = rng.next_int(0x81) + rng.next_int(0x80);
        let weight = rng.next_int(0x81) + rng.next_int(0x80);
        (height as u8, weight as u8)
    };

    GeneratedEntity {
        encryption_constant,
        pid,
        ivs,
        ability_slot,
        gender,
        nature,
        height,
        weight,
        rolled_shiny,
    }
}

fn roll_ivs(rng: &mut Xoroshiro128Plus, flawless: u8) -> [u8; IV_COUNT] {
    let mut ivs = [0u8; IV_COUNT];
    let mut fixed = [false; IV_COUNT];

    let flawless = usize::from(flawless).min(IV_COUNT);
    let mut placed = 0;
    while placed < flawless {
        let index = rng.next_int(IV_COUNT as u64) as usize;
        if !fixed[index] {
            fixed[index] = true;
            ivs[index] = MAX_IV;
            placed += 1;
        }
    }

    for (iv, is_fixed) in ivs.iter_mut().zip(fixed) {
        if !is_fixed {
            *iv = rng.next_int(u64::from(MAX_IV) + 1) as u8;
        }
    }
    ivs
}

fn roll_gender(rng: &mut Xoroshiro128Plus, ratio: u8) -> u8 {
    match ratio {
        RATIO_MALE_ONLY => 0,
        RATIO_FEMALE_ONLY => 1,
        RATIO_GENDERLESS => 2,
        _ => u8::from(rng.next_int(253) + 1 < u64::from(ratio)),
    }
}

impl GeneratedEntity {
    /// Fixed attributes, with size scalars zeroed when the record has none
    pub fn attributes(&self, is_alpha: bool, has_size_scalars: bool) -> FixedAttributes {
        let (height, weight) = if has_size_scalars {
            (self.height, self.weight)
        } else {
            (0, 0)
        };
        FixedAttributes {
            ability_slot: self.ability_slot,
            gender: self.gender,
            nature: self.nature,
            is_alpha,
            height,
            weight,
        }
    }
}

/// Observable fields of a record, prepared once for repeated comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityTarget {
    pub encryption_constant: u32,
    pub pid: u32,
    pub ivs: [u8; IV_COUNT],
    pub attributes: PackedAttributes,
    pub profile: GenerationProfile,
    pub has_size_scalars: bool,
}

impl EntityTarget {
    /// Capture the observable fields of `record`
    pub fn from_record<R: EntityRecord + ?Sized>(record: &R) -> Result<Self, AttributeError> {
        Ok(Self {
            encryption_constant: record.encryption_constant(),
            pid: record.pid(),
            ivs: record.ivs(),
            attributes: FixedAttributes::from_record(record).encode()?,
            profile: GenerationProfile::from_record(record),
            has_size_scalars: record.has_size_scalars(),
        })
    }

    /// Whether `seed` generates this entity with `rolls` PID rolls
    pub fn matches(&self, seed: PokeSeed, rolls: u32) -> bool {
        let generated = generate(seed, rolls, &self.profile);
        generated.encryption_constant == self.encryption_constant
            && generated.pid == self.pid
            && generated.ivs == self.ivs
            && generated
                .attributes(self.profile.is_alpha, self.has_size_scalars)
                .encode()
                .is_ok_and(|packed| packed == self.attributes)
    }
}
