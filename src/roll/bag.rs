use super::{error::RollError, roller::Roller, RResult};
use crate::common::{vec1, NonEmpty, NonZeroUInt, UInt};

/// Rolls batches of dice through a [`Roller`].
///
/// The bag holds no state between calls. Bounding `count` and `sides`
/// against the configured limits is the evaluator's job; the bag only
/// refuses specs it cannot roll at all.
pub struct DiceBag;

impl DiceBag {
    /// Rolls `count` dice with `sides` faces each, preserving roll order.
    pub fn roll<R: Roller>(count: UInt, sides: UInt, roller: &mut R) -> RResult<NonEmpty<UInt>> {
        let sides = match NonZeroUInt::new(sides) {
            Some(s) if count >= 1 => s,
            _ => return Err(RollError::InvalidDiceSpec { count, sides }),
        };

        let mut faces = vec1![roller.roll(sides)];
        for _ in 1..count {
            faces.push(roller.roll(sides));
        }
        Ok(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::StepRoller;
    use rand::{rngs::StdRng, SeedableRng};

    fn nz(x: UInt) -> NonZeroUInt {
        NonZeroUInt::new(x).unwrap()
    }

    #[test]
    fn test_roll_preserves_order() {
        let mut roller = StepRoller::new(nz(10), 1);
        let faces = DiceBag::roll(4, 4, &mut roller).unwrap();
        assert_eq!(&faces[..], &[2, 3, 4, 1]);
    }

    #[test]
    fn test_roll_count_and_range() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let faces = DiceBag::roll(7, 6, &mut rng).unwrap();
            assert_eq!(faces.len(), 7);
            assert!(faces.iter().all(|&f| (1..=6).contains(&f)));
        }
    }

    #[test]
    fn test_roll_single_die() {
        let mut rng = StdRng::seed_from_u64(0);
        let faces = DiceBag::roll(1, 1, &mut rng).unwrap();
        assert_eq!(&faces[..], &[1]);
    }

    #[test]
    fn test_invalid_spec() {
        let mut roller = StepRoller::new(nz(1), 1);
        assert_eq!(
            DiceBag::roll(0, 6, &mut roller),
            Err(RollError::InvalidDiceSpec { count: 0, sides: 6 })
        );
        assert_eq!(
            DiceBag::roll(2, 0, &mut roller),
            Err(RollError::InvalidDiceSpec { count: 2, sides: 0 })
        );
    }
}
