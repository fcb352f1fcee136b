//! Entity record accessors
//!
//! The reversal only reads a handful of fields from an entity. Callers expose
//! whatever record type they parsed through [`EntityRecord`]; [`Entity`] is a
//! plain owned implementation used by tests and simple callers.

use crate::constants::{ALPHA_FLAWLESS_IVS, IV_COUNT};
use crate::domain::shiny::trainer_id32;

/// Read-only view of an observed entity
pub trait EntityRecord {
    /// Encryption constant
    fn encryption_constant(&self) -> u32;
    /// Personality value
    fn pid(&self) -> u32;
    /// Trainer ID (low 16 bits of the trainer's 32-bit ID)
    fn tid(&self) -> u16;
    /// Secret ID (high 16 bits of the trainer's 32-bit ID)
    fn sid(&self) -> u16;
    /// IVs in HP, Atk, Def, SpA, SpD, Spe order
    fn ivs(&self) -> [u8; IV_COUNT];
    /// Ability slot (0, 1, or 2 for the hidden ability)
    fn ability_slot(&self) -> u8;
    /// Gender (0 male, 1 female, 2 genderless)
    fn gender(&self) -> u8;
    /// Nature index (0-24)
    fn nature(&self) -> u8;
    /// Alpha flag
    fn is_alpha(&self) -> bool;
    /// Height scalar
    fn height_scalar(&self) -> u8;
    /// Weight scalar
    fn weight_scalar(&self) -> u8;
    /// Species gender ratio (0 male only, 254 female only, 255 genderless)
    fn gender_ratio(&self) -> u8;

    /// Whether the record carries size scalars
    fn has_size_scalars(&self) -> bool {
        true
    }

    /// Number of IVs guaranteed to be 31
    fn flawless_ivs(&self) -> u8 {
        if self.is_alpha() { ALPHA_FLAWLESS_IVS } else { 0 }
    }

    /// Combined 32-bit trainer ID
    fn id32(&self) -> u32 {
        trainer_id32(self.tid(), self.sid())
    }
}

/// Owned entity record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    pub encryption_constant: u32,
    pub pid: u32,
    pub tid: u16,
    pub sid: u16,
    pub ivs: [u8; IV_COUNT],
    pub ability_slot: u8,
    pub gender: u8,
    pub nature: u8,
    pub is_alpha: bool,
    pub height_scalar: u8,
    pub weight_scalar: u8,
    pub gender_ratio: u8,
    /// `None` uses the alpha default (3 for alphas, 0 otherwise)
    pub flawless_ivs: Option<u8>,
    pub has_size_scalars: bool,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            encryption_constant: 0,
            pid: 0,
            tid: 0,
            sid: 0,
            ivs: [0; IV_COUNT],
            ability_slot: 0,
            gender: 0,
            nature: 0,
            is_alpha: false,
            height_scalar: 0,
            weight_scalar: 0,
            gender_ratio: 0,
            flawless_ivs: None,
            has_size_scalars: true,
        }
    }
}

impl EntityRecord for Entity {
    fn encryption_constant(&self) -> u32 {
        self.encryption_constant
    }

    fn pid(&self) -> u32 {
        self.pid
    }

    fn tid(&self) -> u16 {
        self.tid
    }

    fn sid(&self) -> u16 {
        self.sid
    }

    fn ivs(&self) -> [u8; IV_COUNT] {
        self.ivs
    }

    fn ability_slot(&self) -> u8 {
        self.ability_slot
    }

    fn gender(&self) -> u8 {
        self.gender
    }

    fn nature(&self) -> u8 {
        self.nature
    }

    fn is_alpha(&self) -> bool {
        self.is_alpha
    }

    fn height_scalar(&self) -> u8 {
        self.height_scalar
    }

    fn weight_scalar(&self) -> u8 {
        self.weight_scalar
    }

    fn gender_ratio(&self) -> u8 {
        self.gender_ratio
    }

    fn has_size_scalars(&self) -> bool {
        self.has_size_scalars
    }

    fn flawless_ivs(&self) -> u8 {
        match self.flawless_ivs {
            Some(count) => count,
            None if self.is_alpha => ALPHA_FLAWLESS_IVS,
            None => 0,
        }
    }
}

impl<T: EntityRecord + ?Sized> EntityRecord for &T {
    fn encryption_constant(&self) -> u32 {
        (**self).encryption_constant()
    }

    fn pid(&self) -> u32 {
        (**self).pid()
    }

    fn tid(&self) -> u16 {
        (**self).tid()
    }

    fn sid(&self) -> u16 {
        (**self).sid()
    }

    fn ivs(&self) -> [u8; IV_COUNT] {
        (**self).ivs()
    }

    fn ability_slot(&self) -> u8 {
        (**self).ability_slot()
    }

    fn gender(&self) -> u8 {
        (**self).gender()
    }

    fn nature(&self) -> u8 {
        (**self).nature()
    }

    fn is_alpha(&self) -> bool {
        (**self).is_alpha()
    }

    fn height_scalar(&self) -> u8 {
        (**self).height_scalar()
    }

    fn weight_scalar(&self) -> u8 {
        (**self).weight_scalar()
    }

    fn gender_ratio(&self) -> u8 {
        (**self).gender_ratio()
    }

    fn has_size_scalars(&self) -> bool {
        (**self).has_size_scalars()
    }

    fn flawless_ivs(&self) -> u8 {
        (**self).flawless_ivs()
    }

    fn id32(&self) -> u32 {
        (**self).id32()
    }
}
