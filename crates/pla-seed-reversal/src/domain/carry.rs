//! Carry search for additions of affine words
//!
//! Solves systems of constraints `lhs(x) + rhs(x) ≡ target (mod 2^bits)`
//! where both addends are GF(2)-affine in the unknown `x`. Walking the sum
//! from bit 0 upward, bit `i` gives the linear equation
//! `lhs_i ^ rhs_i = target_i ^ carry_i`. When that forces `lhs_i == rhs_i`
//! the carry out equals their common value, so the search branches on it and
//! records `lhs_i = v`; otherwise the carry passes through unchanged. Every
//! path therefore describes an affine set of `x` whose members all satisfy
//! the constraints seen so far, and contradictory paths are pruned as soon as
//! the linear system rejects them.
//!
//! The solver only proposes candidates. A caller-supplied check decides what
//! is returned, so every result is confirmed by concrete simulation. Leftover
//! spaces too large to enumerate are counted in [`Solutions::skipped_spaces`]
//! so callers can tell an incomplete answer from an empty one.

use crate::constants::{MAX_FREE_DIMENSIONS, PARALLEL_SPLIT_DEPTH};
use crate::domain::linear::{Insertion, LinearSystem};
use crate::domain::symbolic::AffineWord;

/// One bit of one addition constraint, flattened for the search
#[derive(Clone, Copy, Debug)]
struct BitStep {
    /// Coefficients of `lhs_i ^ rhs_i`
    sum_mask: u64,
    /// Constant part of `lhs_i ^ rhs_i`
    sum_constant: bool,
    /// Coefficients of `lhs_i`
    addend_mask: u64,
    /// Constant part of `lhs_i`
    addend_constant: bool,
    /// Bit `i` of the target sum
    target: bool,
    /// First bit of a constraint (carry in is zero)
    first: bool,
    /// Last bit of a constraint (carry out is irrelevant)
    last: bool,
}

/// Outcome of [`CarrySolver::solve`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solutions {
    /// Accepted values, sorted and de-duplicated
    pub values: Vec<u64>,
    /// Affine spaces left unexamined because they exceeded `MAX_FREE_DIMENSIONS`
    pub skipped_spaces: u32,
}

impl Solutions {
    /// Whether every candidate space was examined
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.skipped_spaces == 0
    }

    fn merge(&mut self, other: Solutions) {
        self.values.extend(other.values);
        self.skipped_spaces += other.skipped_spaces;
    }
}

/// Builder and solver for a set of addition constraints
#[derive(Clone, Debug, Default)]
pub struct CarrySolver {
    steps: Vec<BitStep>,
}

impl CarrySolver {
    /// Create a solver with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `lhs(x) + rhs(x)` to agree with `target` on its low `bits` bits
    ///
    /// Constraints are searched in insertion order; put the most selective
    /// first. `bits` is clamped to 64 and a zero width is ignored.
    pub fn require_sum(&mut self, lhs: &AffineWord, rhs: &AffineWord, target: u64, bits: u32) {
        let bits = bits.min(64) as usize;
        for i in 0..bits {
            let (lhs_mask, lhs_constant) = lhs.bit(i);
            let (rhs_mask, rhs_constant) = rhs.bit(i);
            self.steps.push(BitStep {
                sum_mask: lhs_mask ^ rhs_mask,
                sum_constant: lhs_constant ^ rhs_constant,
                addend_mask: lhs_mask,
                addend_constant: lhs_constant,
                target: (target >> i) & 1 == 1,
                first: i == 0,
                last: i + 1 == bits,
            });
        }
    }

    /// Total number of constrained sum bits
    #[cfg(test)]
    pub fn constrained_bits(&self) -> usize {
        self.steps.len()
    }

    /// Enumerate every `x` that satisfies the constraints and passes `verify`
    ///
    /// # Arguments
    /// * `verify` - Concrete check applied to every proposed `x`
    ///
    /// # Returns
    /// Accepted values, sorted and de-duplicated, with the number of spaces
    /// that were too large to enumerate
    pub fn solve<F>(&self, verify: F) -> Solutions
    where
        F: Fn(u64) -> bool + Sync,
    {
        let search = Search {
            steps: &self.steps,
            verify: &verify,
        };
        let mut system = LinearSystem::new();
        let mut found = Solutions::default();
        search.descend(&mut system, 0, false, 0, &mut found);

        found.values.sort_unstable();
        found.values.dedup();
        found
    }
}

// =============================================================================
// Depth-first search
// =============================================================================

struct Search<'a, F> {
    steps: &'a [BitStep],
    verify: &'a F,
}

impl<F> Search<'_, F>
where
    F: Fn(u64) -> bool + Sync,
{
    fn descend(
        &self,
        system: &mut LinearSystem,
        index: usize,
        carry: bool,
        depth: u32,
        found: &mut Solutions,
    ) {
        if system.is_full_rank() {
            let x = system.particular_solution();
            if (self.verify)(x) {
                found.values.push(x);
            }
            return;
        }

        let Some(step) = self.steps.get(index) else {
            self.enumerate(system, found);
            return;
        };

        let carry = carry && !step.first;
        // Value of lhs_i ^ rhs_i that yields the target bit
        let differs = step.target ^ carry;
        let sum = system.insert(step.sum_mask, step.sum_constant ^ differs);
        if sum == Insertion::Conflict {
            return;
        }

        if differs || step.last {
            self.descend(system, index + 1, carry, depth, found);
        } else if depth < PARALLEL_SPLIT_DEPTH {
            let mut low = *system;
            let mut high = *system;
            let (mut from_low, from_high) = rayon::join(
                || self.branch_owned(&mut low, step, index, false, depth),
                || self.branch_owned(&mut high, step, index, true, depth),
            );
            from_low.merge(from_high);
            found.merge(from_low);
        } else {
            self.branch(system, step, index, false, depth, found);
            self.branch(system, step, index, true, depth, found);
        }

        system.undo(sum);
    }

    /// Fix `lhs_i = value` (and so the carry out) and continue
    fn branch(
        &self,
        system: &mut LinearSystem,
        step: &BitStep,
        index: usize,
        value: bool,
        depth: u32,
        found: &mut Solutions,
    ) {
        let addend = system.insert(step.addend_mask, step.addend_constant ^ value);
        if addend == Insertion::Conflict {
            return;
        }
        self.descend(system, index + 1, value, depth + 1, found);
        system.undo(addend);
    }

    fn branch_owned(
        &self,
        system: &mut LinearSystem,
        step: &BitStep,
        index: usize,
        value: bool,
        depth: u32,
    ) -> Solutions {
        let mut found = Solutions::default();
        self.branch(system, step, index, value, depth, &mut found);
        found
    }

    /// Walk every point of an under-determined system in Gray-code order
    fn enumerate(&self, system: &LinearSystem, found: &mut Solutions) {
        let free = system.free_dimensions();
        if free > MAX_FREE_DIMENSIONS {
            found.skipped_spaces += 1;
            tracing::warn!(
                free,
                limit = MAX_FREE_DIMENSIONS,
                "solution space too large to enumerate, skipping"
            );
            return;
        }

        let basis = system.null_space();
        let mut x = system.particular_solution();
        let points = 1u64 << free;
        let mut index = 0u64;
        loop {
            if (self.verify)(x) {
                found.values.push(x);
            }
            index += 1;
            if index == points {
                break;
            }
            x ^= basis[index.trailing_zeros() as usize];
        }
    }
}
