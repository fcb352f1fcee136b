//! Linear system over GF(2) in 64 unknowns
//!
//! Rows are kept in echelon form indexed by their highest set bit (the
//! pivot), so inserting an equation is a single reduction pass and removing
//! the most recent insertion is clearing one pivot bit. The carry search
//! relies on this to backtrack without copying the system.

/// Result of inserting one equation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// New independent row stored under this pivot
    Added(u32),
    /// Already implied by the system
    Redundant,
    /// Contradicts the system
    Conflict,
}

/// Echelon-form GF(2) system `row · x = value`
#[derive(Clone, Copy, Debug)]
pub struct LinearSystem {
    /// `rows[p]` has highest set bit `p` when bit `p` of `present` is set
    rows: [u64; 64],
    /// Right-hand side bit of each stored row
    values: u64,
    /// Pivots in use
    present: u64,
}

impl LinearSystem {
    /// Create an empty system
    pub fn new() -> Self {
        Self {
            rows: [0u64; 64],
            values: 0,
            present: 0,
        }
    }

    /// Number of independent equations
    #[inline]
    #[cfg(test)]
    pub fn rank(&self) -> u32 {
        self.present.count_ones()
    }

    /// True once the system determines every unknown
    #[inline]
    pub fn is_full_rank(&self) -> bool {
        self.present == u64::MAX
    }

    /// Dimension of the solution space
    #[inline]
    pub fn free_dimensions(&self) -> u32 {
        self.present.count_zeros()
    }

    /// Insert `parity(mask & x) == value`
    #[inline]
    pub fn insert(&mut self, mut mask: u64, mut value: bool) -> Insertion {
        while mask != 0 {
            let pivot = 63 - mask.leading_zeros();
            let bit = 1u64 << pivot;
            if self.present & bit == 0 {
                self.rows[pivot as usize] = mask;
                self.values = (self.values & !bit) | (u64::from(value) << pivot);
                self.present |= bit;
                return Insertion::Added(pivot);
            }
            mask ^= self.rows[pivot as usize];
            value ^= self.values & bit != 0;
        }
        if value {
            Insertion::Conflict
        } else {
            Insertion::Redundant
        }
    }

    /// Remove a row added by the most recent matching `insert`
    #[inline]
    pub fn undo(&mut self, insertion: Insertion) {
        if let Insertion::Added(pivot) = insertion {
            self.present &= !(1u64 << pivot);
        }
    }

    /// Solution with every free unknown set to zero
    pub fn particular_solution(&self) -> u64 {
        let mut x = 0u64;
        for pivot in 0..64 {
            let bit = 1u64 << pivot;
            if self.present & bit == 0 {
                continue;
            }
            // Bits below the pivot are already final
            let parity = (self.rows[pivot] & x & !bit).count_ones() & 1 == 1;
            if parity != (self.values & bit != 0) {
                x |= bit;
            }
        }
        x
    }

    /// Basis of the homogeneous solution space, one vector per free unknown
    pub fn null_space(&self) -> Vec<u64> {
        (0..64)
            .filter(|free| self.present & (1u64 << free) == 0)
            .map(|free| {
                let mut vector = 1u64 << free;
                for pivot in free + 1..64 {
                    let bit = 1u64 << pivot;
                    if self.present & bit != 0
                        && (self.rows[pivot] & vector & !bit).count_ones() & 1 == 1
                    {
                        vector |= bit;
                    }
                }
                vector
            })
            .collect()
    }

    /// Check a concrete assignment against every stored row
    #[cfg(test)]
    pub fn is_satisfied_by(&self, x: u64) -> bool {
        (0..64).all(|pivot| {
            let bit = 1u64 << pivot;
            self.present & bit == 0
                || ((self.rows[pivot] & x).count_ones() & 1 == 1) == (self.values & bit != 0)
        })
    }
}

impl Default for LinearSystem {
    fn default() -> Self {
        Self::new()
    }
}
