use crate::common::{NonZeroUInt, UInt};
use rand::Rng;

/// A source of uniformly distributed die faces.
///
/// Implemented for every [`rand::Rng`]. The evaluator receives its roller
/// from the caller rather than reaching for ambient randomness, so tests
/// can substitute a deterministic source.
pub trait Roller {
    /// Returns a face in `[1, sides]`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;

#[cfg(test)]
mod step {
    use super::*;

    /// Deterministic roller whose faces climb by `step`, wrapping at the
    /// requested number of sides.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
    }

    impl StepRoller {
        pub fn new(initial: NonZeroUInt, step: UInt) -> Self {
            Self {
                current: initial.get(),
                step,
            }
        }
    }

    impl Roller for StepRoller {
        fn roll(&mut self, sides: NonZeroUInt) -> UInt {
            let ret = (self.current - 1) % sides.get() + 1;
            self.current += self.step;
            ret
        }
    }
}
