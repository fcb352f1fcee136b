//! Shininess checks
//!
//! A PID is shiny for a trainer when the xor of the four 16-bit halves of the
//! trainer ID and the PID is below 16. When a rolled PID would be shiny for the
//! real trainer without having been drawn shiny, generation flips bit 28 of
//! the PID (the anti-shiny rewrite), so an observed PID may have been rolled
//! as a different value.

use crate::constants::{ANTI_SHINY_MASK, SHINY_XOR_LIMIT};

/// Xor of the trainer ID and PID halves
#[inline]
pub fn shiny_xor(id32: u32, pid: u32) -> u32 {
    let mixed = id32 ^ pid;
    (mixed >> 16) ^ (mixed & 0xFFFF)
}

/// Whether `pid` is shiny for the 32-bit trainer ID
#[inline]
pub fn is_shiny(id32: u32, pid: u32) -> bool {
    shiny_xor(id32, pid) < SHINY_XOR_LIMIT
}

/// Trainer ID and secret ID combined as `(sid << 16) | tid`
#[inline]
pub fn trainer_id32(tid: u16, sid: u16) -> u32 {
    (u32::from(sid) << 16) | u32::from(tid)
}

/// Whether `pid` could be the anti-shiny rewrite of a rolled PID
///
/// # Arguments
/// * `tid` - Trainer ID
/// * `sid` - Secret ID
/// * `pid` - Observed PID
///
/// # Returns
/// `true` if `pid ^ 0x10000000` is shiny for the trainer
pub fn is_potential_anti_shiny(tid: u16, sid: u16, pid: u32) -> bool {
    is_shiny(trainer_id32(tid, sid), pid ^ ANTI_SHINY_MASK)
}
