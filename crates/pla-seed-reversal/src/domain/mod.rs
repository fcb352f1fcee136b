//! Domain layer - Pure computational logic
//!
//! The concrete generator and entity model, plus the GF(2) machinery the
//! reversal searches are built on.

pub mod attributes;
pub mod carry;
pub mod entity;
pub mod generation;
pub mod linear;
pub mod seed;
pub mod shiny;
pub mod spawner;
pub mod symbolic;
pub mod xoroshiro;
