use crate::cards::Hand;
use crate::cards::Strength;

/// Totally orders hands of five or more cards.
///
/// Higher strictly beats lower; equal values tie. The estimator relies on
/// nothing else, so any evaluator satisfying this contract can stand in.
pub trait Ranker: Sync {
    type Strength: Ord;
    fn rank(&self, hand: Hand) -> Self::Strength;
}

/// The default [`Ranker`], backed by the bitwise [`Evaluator`].
///
/// [`Evaluator`]: crate::cards::Evaluator
#[derive(Debug, Default, Clone, Copy)]
pub struct Referee;

impl Ranker for Referee {
    type Strength = Strength;
    fn rank(&self, hand: Hand) -> Self::Strength {
        Strength::from(hand)
    }
}

/// Any pure scoring function is a Ranker.
impl<F, S> Ranker for F
where
    F: Fn(Hand) -> S + Sync,
    S: Ord,
{
    type Strength = S;
    fn rank(&self, hand: Hand) -> Self::Strength {
        self(hand)
    }
}
