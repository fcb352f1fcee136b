//! Seed types for each level of the spawn pipeline
//!
//! A group seed drives a spawner, a gen seed drives one spawn slot, and a
//! poke seed drives the generation of one entity. The levels are distinct
//! types so that a value from one level is never compared against another.

use std::fmt;

macro_rules! seed_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw 64-bit value
            #[inline]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(seed: $name) -> Self {
                seed.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:016X}", self.0)
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(&self.0, f)
            }
        }
    };
}

seed_type!(
    /// Seed of a spawner's group generator
    GroupSeed
);

seed_type!(
    /// Seed of a single spawn slot
    GenSeed
);

seed_type!(
    /// Seed the entity attributes are rolled from
    PokeSeed
);
