//! Dice rolling for table rulings.

use rand::Rng;

use crate::error::{ErrorSeverity, GameError};

/// Rejected dice requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    #[error("dice need between {min} and {max} sides, got {sides}", min = DiceRoll::MIN_SIDES, max = DiceRoll::MAX_SIDES)]
    InvalidSides { sides: u32 },

    #[error("between {min} and {max} dice may be rolled, got {count}", min = DiceRoll::MIN_COUNT, max = DiceRoll::MAX_COUNT)]
    InvalidCount { count: u32 },

    #[error("modifier must stay within ±{max}, got {modifier}", max = DiceRoll::MAX_MODIFIER)]
    InvalidModifier { modifier: i64 },
}

impl GameError for DiceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSides { .. } => "InvalidSides",
            Self::InvalidCount { .. } => "InvalidCount",
            Self::InvalidModifier { .. } => "InvalidModifier",
        }
    }
}

/// A validated `count`d`sides` + `modifier` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceRoll {
    sides: u32,
    count: u32,
    modifier: i64,
}

/// Result of a roll: individual dice plus the modified total.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceOutcome {
    pub sides: u32,
    pub count: u32,
    pub modifier: i64,
    pub rolls: Vec<u32>,
    pub total: i64,
}

impl DiceRoll {
    pub const MIN_SIDES: u32 = 2;
    pub const MAX_SIDES: u32 = 1000;
    pub const MIN_COUNT: u32 = 1;
    pub const MAX_COUNT: u32 = 100;
    pub const MAX_MODIFIER: i64 = 1_000_000;

    pub fn new(sides: u32, count: u32, modifier: i64) -> Result<Self, DiceError> {
        if !(Self::MIN_SIDES..=Self::MAX_SIDES).contains(&sides) {
            return Err(DiceError::InvalidSides { sides });
        }
        if !(Self::MIN_COUNT..=Self::MAX_COUNT).contains(&count) {
            return Err(DiceError::InvalidCount { count });
        }
        if !(-Self::MAX_MODIFIER..=Self::MAX_MODIFIER).contains(&modifier) {
            return Err(DiceError::InvalidModifier { modifier });
        }
        Ok(Self {
            sides,
            count,
            modifier,
        })
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn modifier(&self) -> i64 {
        self.modifier
    }

    pub fn roll<R>(&self, rng: &mut R) -> DiceOutcome
    where
        R: Rng + ?Sized,
    {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| rng.gen_range(1..=self.sides))
            .collect();
        let total = self.modifier + rolls.iter().map(|&die| i64::from(die)).sum::<i64>();

        DiceOutcome {
            sides: self.sides,
            count: self.count,
            modifier: self.modifier,
            rolls,
            total,
        }
    }
}
