use crate::Chips;

/// How much money went in before the flop, seen from one seat.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Preflop {
    /// Opponent pip when preflop betting closed.
    pub pip: Chips,
    /// Sum of the opponent's leads over our pip, one per preflop action.
    pub opp_raised: Chips,
}

impl Preflop {
    /// Summarize preflop betting from the pips after each action, blinds first.
    ///
    /// The blinds themselves are not counted as a raise.
    pub fn from_history(pips: &[[Chips; 2]], active: usize) -> Self {
        let opponent = 1 - active;
        Self {
            pip: pips.last().map(|p| p[opponent]).unwrap_or_default(),
            opp_raised: pips
                .iter()
                .skip(1)
                .map(|p| (p[opponent] - p[active]).max(0))
                .sum(),
        }
    }
}
