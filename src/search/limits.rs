use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Largest roll accepted when no limit is configured: two six-sided dice.
pub const DEFAULT_MAX_ROLL: u32 = 12;

/// Hard cap on `max_roll`. A configured limit above it is clamped.
pub const MAX_ROLL_CEILING: u32 = 16;

/// Budgets for a destination search.
///
/// Recursion depth equals the roll, so capping the roll caps both the stack depth
/// and the (exponential) number of explored paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    pub max_roll: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_roll: DEFAULT_MAX_ROLL,
        }
    }
}

impl SearchLimits {
    /// The limit actually enforced: `max_roll`, never above [`MAX_ROLL_CEILING`].
    #[inline]
    pub fn effective_max_roll(&self) -> u32 {
        self.max_roll.min(MAX_ROLL_CEILING)
    }

    #[inline]
    pub fn check_roll(&self, roll: u32) -> Result<(), BoardError> {
        let max_roll = self.effective_max_roll();
        if roll > max_roll {
            return Err(BoardError::RollLimitExceeded { roll, max_roll });
        }
        Ok(())
    }
}
