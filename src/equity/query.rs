use super::error::EquityError;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Street;

/// What we know about the opponent's hole cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Villain {
    /// Hidden; this many cards are dealt from the deck every trial.
    Unknown(usize),
    /// Face up, e.g. at showdown.
    Known(Vec<Card>),
}

impl Villain {
    fn size(&self) -> usize {
        match self {
            Self::Unknown(n) => *n,
            Self::Known(cards) => cards.len(),
        }
    }
    fn cards(&self) -> &[Card] {
        match self {
            Self::Unknown(_) => &[],
            Self::Known(cards) => cards,
        }
    }
}

/// Inputs to a win/loss/tie estimate.
///
/// Own cards are 2 or 3 depending on the auction, the board shows 0, 3, 4, or
/// 5 cards, and the opponent holds 2 or 3. Dead cards are known to be out of
/// play and are simply removed from the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityQuery {
    hero: Vec<Card>,
    board: Vec<Card>,
    villain: Villain,
    dead: Vec<Card>,
    trials: usize,
}

impl EquityQuery {
    /// Two hole cards against a random two-card hand on an empty board.
    pub fn preflop(hero: Vec<Card>, trials: usize) -> Self {
        Self::round(hero, Vec::new(), Villain::Unknown(2), trials)
    }
    /// Any street, with a hidden or exposed opponent.
    pub fn round(hero: Vec<Card>, board: Vec<Card>, villain: Villain, trials: usize) -> Self {
        Self {
            hero,
            board,
            villain,
            dead: Vec::new(),
            trials,
        }
    }
    pub fn with_dead(mut self, dead: Vec<Card>) -> Self {
        self.dead = dead;
        self
    }
    pub fn hero(&self) -> &[Card] {
        &self.hero
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn villain(&self) -> &Villain {
        &self.villain
    }
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Validates the query and removes every known card from a fresh deck.
    ///
    /// Checks run in order: shape, then card membership, then pool size.
    pub(crate) fn setup(&self) -> Result<Setup, EquityError> {
        if self.trials == 0 {
            return Err(EquityError::InvalidQuery("trial count must be positive".into()));
        }
        if !matches!(self.hero.len(), 2 | 3) {
            return Err(EquityError::InvalidQuery(format!(
                "hero holds {} cards, expected 2 or 3",
                self.hero.len()
            )));
        }
        if !matches!(self.villain.size(), 2 | 3) {
            return Err(EquityError::InvalidQuery(format!(
                "villain holds {} cards, expected 2 or 3",
                self.villain.size()
            )));
        }
        let street = Street::try_from(self.board.len()).map_err(EquityError::InvalidQuery)?;
        let unknown = match self.villain {
            Villain::Unknown(n) => n,
            Villain::Known(_) => 0,
        };
        Setup::new(
            &self.hero,
            &self.board,
            self.villain.cards(),
            &self.dead,
            street.n_pending(),
            unknown,
        )
    }
}

/// Inputs to the three-way auction estimate.
///
/// Valid only on the flop with exactly two hole cards: each trial deals the
/// two unflipped board cards, the contested auction card, and two opponent
/// cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionQuery {
    hero: Vec<Card>,
    flop: Vec<Card>,
    dead: Vec<Card>,
    trials: usize,
}

impl AuctionQuery {
    pub fn new(hero: Vec<Card>, flop: Vec<Card>, trials: usize) -> Self {
        Self {
            hero,
            flop,
            dead: Vec::new(),
            trials,
        }
    }
    pub fn with_dead(mut self, dead: Vec<Card>) -> Self {
        self.dead = dead;
        self
    }
    pub fn trials(&self) -> usize {
        self.trials
    }

    pub(crate) fn setup(&self) -> Result<Setup, EquityError> {
        if self.trials == 0 {
            return Err(EquityError::InvalidQuery("trial count must be positive".into()));
        }
        if self.hero.len() != 2 {
            return Err(EquityError::InvalidQuery(format!(
                "auction needs 2 hole cards, got {}",
                self.hero.len()
            )));
        }
        if self.flop.len() != Street::Flop.n_observed() {
            return Err(EquityError::InvalidQuery(format!(
                "auction needs a 3 card flop, got {}",
                self.flop.len()
            )));
        }
        // two unflipped, one auction card, two opponent cards
        Setup::new(&self.hero, &self.flop, &[], &self.dead, Street::Flop.n_pending() + 1, 2)
    }
}

/// A validated query: known cards as Hands plus the reduced deck they leave.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Setup {
    pub hero: Hand,
    pub board: Hand,
    pub villain: Hand,
    pub deck: Deck,
    /// board cards (and for the auction, the contested card) dealt per trial
    pub pending: usize,
    /// opponent cards dealt per trial
    pub unknown: usize,
}

impl Setup {
    fn new(
        hero: &[Card],
        board: &[Card],
        villain: &[Card],
        dead: &[Card],
        pending: usize,
        unknown: usize,
    ) -> Result<Self, EquityError> {
        let mut deck = Deck::new();
        deck.remove(
            std::iter::empty()
                .chain(hero.iter())
                .chain(board.iter())
                .chain(villain.iter())
                .chain(dead.iter())
                .copied(),
        )?;
        let needed = pending + unknown;
        if deck.size() < needed {
            return Err(EquityError::InsufficientDeck {
                needed,
                available: deck.size(),
            });
        }
        Ok(Self {
            hero: Hand::from(hero),
            board: Hand::from(board),
            villain: Hand::from(villain),
            deck,
            pending,
            unknown,
        })
    }
    /// Nothing left to deal, so a single trial settles the outcome.
    pub fn is_determined(&self) -> bool {
        self.pending + self.unknown == 0
    }
}
