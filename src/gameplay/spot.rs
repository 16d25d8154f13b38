use super::action::Choice;
use super::preflop::Preflop;
use crate::Chips;
use crate::STARTING_STACK;
use crate::Seconds;
use crate::cards::Card;
use crate::cards::Street;

/// Everything the engine tells us when it asks for an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    /// Round number, starting at 1.
    pub round: usize,
    /// Seconds left on the match clock, shared by every decision.
    pub clock: Seconds,
    /// Index of our seat.
    pub active: usize,
    /// Actions already taken this round.
    pub acted: usize,
    pub street: Street,
    /// Our hole cards: 2, or 3 once we hold the auction card.
    pub hole: Vec<Card>,
    /// Face-up community cards.
    pub board: Vec<Card>,
    /// Chips committed this betting round.
    pub pips: [Chips; 2],
    /// Chips behind.
    pub stacks: [Chips; 2],
    /// Auction bids, once the auction has happened.
    pub bids: [Option<Chips>; 2],
    /// Preflop betting summary, once the flop is out.
    pub preflop: Preflop,
    /// Smallest and largest legal raise, as total pip.
    pub raise_bounds: (Chips, Chips),
    pub legal: Vec<Choice>,
}

impl Spot {
    pub fn opponent(&self) -> usize {
        1 - self.active
    }
    pub fn can(&self, choice: Choice) -> bool {
        self.legal.contains(&choice)
    }
    /// Our first decision of the round, i.e. either blind acting for the first time.
    pub fn is_opening(&self) -> bool {
        self.acted < 2
    }
    /// Chips needed to stay in the pot.
    pub fn continue_cost(&self) -> Chips {
        self.pips[self.opponent()] - self.pips[self.active]
    }
    /// Chips we have put into the pot this round.
    pub fn my_contribution(&self) -> Chips {
        STARTING_STACK - self.stacks[self.active]
    }
    /// Chips the opponent has put into the pot this round.
    pub fn opp_contribution(&self) -> Chips {
        STARTING_STACK - self.stacks[self.opponent()]
    }
    pub fn effective_stack(&self) -> Chips {
        self.stacks[self.active].min(self.stacks[self.opponent()])
    }
    /// Largest bid worth making: one more than the opponent can match, or all we have.
    pub fn max_bid(&self) -> Chips {
        let mine = self.stacks[self.active];
        let theirs = self.stacks[self.opponent()];
        match mine > theirs {
            true => theirs + 1,
            false => mine,
        }
    }
    /// Hole cards the opponent holds after the auction.
    ///
    /// Only the strict auction winner goes without a third card for the opponent;
    /// ties award the card to both.
    pub fn opponent_cards(&self) -> usize {
        match self.bids {
            [Some(a), Some(b)] if self.active == 0 && a > b => 2,
            [Some(a), Some(b)] if self.active == 1 && b > a => 2,
            _ => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot() -> Spot {
        Spot {
            round: 1,
            clock: 30.,
            active: 0,
            acted: 0,
            street: Street::Flop,
            hole: Card::parse("As Kd").unwrap(),
            board: Card::parse("2c 7h 9s").unwrap(),
            pips: [0, 10],
            stacks: [380, 370],
            bids: [None, None],
            preflop: Preflop::default(),
            raise_bounds: (20, 380),
            legal: vec![Choice::Fold, Choice::Call, Choice::Raise],
        }
    }

    #[test]
    fn chip_accounting() {
        let spot = spot();
        assert_eq!(spot.continue_cost(), 10);
        assert_eq!(spot.my_contribution(), 20);
        assert_eq!(spot.opp_contribution(), 30);
        assert_eq!(spot.effective_stack(), 370);
        assert_eq!(spot.max_bid(), 371);
    }

    #[test]
    fn auction_winner_faces_two_cards() {
        let mut spot = spot();
        spot.bids = [Some(40), Some(12)];
        assert_eq!(spot.opponent_cards(), 2);
        spot.bids = [Some(12), Some(40)];
        assert_eq!(spot.opponent_cards(), 3);
        spot.bids = [Some(12), Some(12)];
        assert_eq!(spot.opponent_cards(), 3);
        spot.active = 1;
        spot.bids = [Some(12), Some(40)];
        assert_eq!(spot.opponent_cards(), 2);
    }

    #[test]
    fn legality() {
        let spot = spot();
        assert!(spot.can(Choice::Raise));
        assert!(!spot.can(Choice::Check));
        assert!(!spot.can(Choice::Bid));
    }
}
