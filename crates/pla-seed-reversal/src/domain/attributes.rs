//! Fixed attribute packing
//!
//! Ability slot, gender, nature, alpha flag and size scalars are packed into
//! one 32-bit word so a generated entity can be compared against an observed
//! one with a single equality check.
//!
//! ## Layout (bit 0 = least significant)
//!
//! | Bits    | Field        |
//! |---------|--------------|
//! | 0..8    | weight       |
//! | 8..16   | height       |
//! | 16      | alpha        |
//! | 17..25  | nature       |
//! | 25..27  | gender       |
//! | 27..30  | ability slot |

use thiserror::Error;

use crate::constants::NATURE_COUNT;
use crate::domain::entity::EntityRecord;

const WEIGHT_SHIFT: u32 = 0;
const HEIGHT_SHIFT: u32 = 8;
const ALPHA_SHIFT: u32 = 16;
const NATURE_SHIFT: u32 = 17;
const GENDER_SHIFT: u32 = 25;
const ABILITY_SHIFT: u32 = 27;

/// Highest ability slot (hidden ability)
const MAX_ABILITY_SLOT: u8 = 2;
/// Highest gender value that fits in the gender field
const MAX_GENDER: u8 = 3;

/// Attribute values that cannot be packed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("ability slot {0} out of range (0-2)")]
    AbilityOutOfRange(u8),
    #[error("gender {0} out of range (0-3)")]
    GenderOutOfRange(u8),
    #[error("nature {0} out of range (0-24)")]
    NatureOutOfRange(u8),
}

/// Unpacked fixed attributes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FixedAttributes {
    pub ability_slot: u8,
    pub gender: u8,
    pub nature: u8,
    pub is_alpha: bool,
    pub height: u8,
    pub weight: u8,
}

/// Packed fixed attributes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PackedAttributes(pub u32);

impl FixedAttributes {
    /// Read the fixed attributes of an entity record
    ///
    /// Records without size scalars contribute 0 for height and weight.
    pub fn from_record<R: EntityRecord + ?Sized>(record: &R) -> Self {
        let (height, weight) = if record.has_size_scalars() {
            (record.height_scalar(), record.weight_scalar())
        } else {
            (0, 0)
        };
        Self {
            ability_slot: record.ability_slot(),
            gender: record.gender(),
            nature: record.nature(),
            is_alpha: record.is_alpha(),
            height,
            weight,
        }
    }

    /// Pack into the 32-bit layout, rejecting out-of-range fields
    pub fn encode(&self) -> Result<PackedAttributes, AttributeError> {
        if self.ability_slot > MAX_ABILITY_SLOT {
            return Err(AttributeError::AbilityOutOfRange(self.ability_slot));
        }
        if self.gender > MAX_GENDER {
            return Err(AttributeError::GenderOutOfRange(self.gender));
        }
        if self.nature >= NATURE_COUNT {
            return Err(AttributeError::NatureOutOfRange(self.nature));
        }

        Ok(PackedAttributes(
            (u32::from(self.ability_slot) << ABILITY_SHIFT)
                | (u32::from(self.gender) << GENDER_SHIFT)
                | (u32::from(self.nature) << NATURE_SHIFT)
                | (u32::from(self.is_alpha) << ALPHA_SHIFT)
                | (u32::from(self.height) << HEIGHT_SHIFT)
                | (u32::from(self.weight) << WEIGHT_SHIFT),
        ))
    }
}

impl PackedAttributes {
    /// Extract the individual fields
    pub fn decode(self) -> FixedAttributes {
        let bits = self.0;
        FixedAttributes {
            ability_slot: ((bits >> ABILITY_SHIFT) & 0x7) as u8,
            gender: ((bits >> GENDER_SHIFT) & 0x3) as u8,
            nature: ((bits >> NATURE_SHIFT) & 0xFF) as u8,
            is_alpha: (bits >> ALPHA_SHIFT) & 1 == 1,
            height: ((bits >> HEIGHT_SHIFT) & 0xFF) as u8,
            weight: ((bits >> WEIGHT_SHIFT) & 0xFF) as u8,
        }
    }
}
