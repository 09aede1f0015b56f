//! A chat-bot back end for dice notation: `2d4+1d20+19`, `1d20+4;fort_save`.
//!
//! The pipeline runs bottom-up through four pieces. A [`Roller`] produces
//! uniform die faces; the [`DiceBag`] turns one `NdS` spec into an ordered
//! batch of faces; the [`parse`] module turns a roll body into an immutable
//! expression tree; and a [`RollContext`] walks that tree, rolling dice and
//! doing arithmetic, into an annotated result tree that keeps every
//! individual face for display. Stringifiers render the result tree, and
//! the [`commands`] module wires it all to command lines like
//! `roll 2d4 1d20+19;x`, producing one reply per roll string.
//!
//! Configuration ([`Settings`]) and randomness are plain values handed in
//! by the caller; nothing here reads global state, so concurrent
//! invocations only need their own [`RollContext`].
//!
//! [`Roller`]: roll::Roller
//! [`DiceBag`]: roll::DiceBag
//! [`RollContext`]: roll::RollContext

pub mod commands;
mod common;
pub mod config;
mod error;
pub mod parse;
pub mod roll;

pub use common::{BinaryOperator, Int, NonEmpty, NonZeroUInt, UInt, UnaryOperator};
pub use config::{GrammarVariant, RollLimits, Settings};
pub use error::{DiceError, ERROR_DOMAIN};

pub use commands::{Command, Reply, Responder};
pub use roll::{Roll, RollTree};

/// Parses and evaluates a single roll body with default settings and the
/// thread-local RNG.
pub fn roll(body: &str) -> Result<Roll<'static>, DiceError> {
    let settings = Settings::default();
    let root = parse::parse(body, settings.variant)?;
    let tree = roll::eval(&root, settings.limits, rand::thread_rng())?;
    Ok(Roll::new(tree, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_convenience() {
        let result = roll("1d20+4").unwrap();
        assert!((5..=24).contains(&result.total()));
        assert_eq!(result.label, None);
    }
}
