use super::preflop::Preflop;
use crate::Chips;
use crate::cards::Street;

/// How a round ended, delivered once per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    /// Round number, starting at 1.
    pub round: usize,
    /// Index of our seat.
    pub active: usize,
    /// Street on which the round ended.
    pub street: Street,
    /// Bankroll change for each seat.
    pub deltas: [Chips; 2],
    /// Auction bids, if the round reached the auction.
    pub bids: [Option<Chips>; 2],
    /// Seat that folded, if anyone did.
    pub folder: Option<usize>,
    /// Preflop betting summary.
    pub preflop: Preflop,
}

impl Terminal {
    pub fn opponent(&self) -> usize {
        1 - self.active
    }
    pub fn opponent_bid(&self) -> Option<Chips> {
        self.bids[self.opponent()]
    }
    pub fn opponent_folded_preflop(&self) -> bool {
        self.street == Street::Pref && self.folder == Some(self.opponent())
    }
}
