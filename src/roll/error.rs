use crate::common::UInt;
use crate::config::RollLimits;
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("{count}d{sides} is out of bounds (at most {} dice of at most {} sides)", .limits.max_count, .limits.max_sides)]
    DiceSpecOutOfBounds {
        count: UInt,
        sides: UInt,
        limits: RollLimits,
    },
    #[error("{count}d{sides} is not a rollable dice spec")]
    InvalidDiceSpec { count: UInt, sides: UInt },
}
