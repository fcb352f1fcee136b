//! Search errors

use thiserror::Error;

use crate::constants::MAX_ROLL_POSITION;
use crate::domain::attributes::AttributeError;

/// Why a reversal could not produce a complete answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    #[error(
        "roll positions {origin} + {roll_count} exceed the supported maximum of {max}",
        max = MAX_ROLL_POSITION
    )]
    RollWindow { origin: u32, roll_count: u32 },

    /// Some candidate spaces were too large to enumerate, so seeds may be missing
    #[error("{skipped_spaces} solution spaces at roll {roll} were too large to enumerate")]
    Truncated { roll: u32, skipped_spaces: u32 },
}

/// Last roll position of `origin + 1 ..= origin + roll_count`, if supported
pub(crate) fn last_roll(origin: u32, roll_count: u32) -> Result<u32, SearchError> {
    origin
        .checked_add(roll_count)
        .filter(|&last| last <= MAX_ROLL_POSITION)
        .ok_or(SearchError::RollWindow { origin, roll_count })
}
