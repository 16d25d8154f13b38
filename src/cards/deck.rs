use super::card::Card;
use super::hand::Hand;
use crate::equity::EquityError;
use rand::Rng;

/// The cards not yet seen by anyone at the table.
///
/// Wraps a [`Hand`] of remaining cards. Because a Deck is a single word, every
/// Monte Carlo trial works on its own copy and no two trials ever draw from the
/// same instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Removes known cards from the deck.
    ///
    /// Fails on the first card that is not currently present, either because
    /// it was already removed or because it lies outside the 52-card universe.
    /// The deck is left untouched on failure.
    pub fn remove<I>(&mut self, cards: I) -> Result<(), EquityError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut rest = self.0;
        for card in cards {
            match rest.contains(&card) {
                true => rest.remove(card),
                false => return Err(EquityError::DuplicateOrUnknownCard(u8::from(card))),
            }
        }
        self.0 = rest;
        Ok(())
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        match self.size() {
            0 => None,
            n => {
                let mut bits = u64::from(self.0);
                for _ in 0..rng.random_range(0..n) {
                    bits &= bits - 1;
                }
                let card = Card::from(bits.trailing_zeros() as u8);
                self.0.remove(card);
                Some(card)
            }
        }
    }
    /// Draws `n` cards into an unordered Hand. Stops early if the deck runs out.
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Hand {
        (0..n)
            .filter_map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Draws an ordered sequence of `n` distinct cards without replacement.
    ///
    /// Every ordered `n`-subset of the remaining cards is equally likely.
    /// Returns the drawn cards together with the reduced deck.
    pub fn sample<R: Rng>(mut self, n: usize, rng: &mut R) -> Result<(Vec<Card>, Deck), EquityError> {
        if n > self.size() {
            return Err(EquityError::InsufficientDeck {
                needed: n,
                available: self.size(),
            });
        }
        let cards = (0..n).filter_map(|_| self.draw(rng)).collect::<Vec<Card>>();
        Ok((cards, self))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    #[test]
    fn full_deck() {
        let deck = Deck::new();
        assert_eq!(deck.size(), 52);
        assert!((0..52).map(Card::from).all(|c| deck.contains(&c)));
    }

    #[test]
    fn remove_known() {
        let mut deck = Deck::new();
        deck.remove(cards("As Ks Qd")).unwrap();
        assert_eq!(deck.size(), 49);
        assert!(!deck.contains(&cards("Ks")[0]));
    }

    #[test]
    fn remove_twice_fails() {
        let mut deck = Deck::new();
        deck.remove(cards("As")).unwrap();
        let err = deck.remove(cards("Kd As")).unwrap_err();
        assert!(matches!(err, EquityError::DuplicateOrUnknownCard(51)));
        assert_eq!(deck.size(), 51);
        assert!(deck.contains(&cards("Kd")[0]));
    }

    #[test]
    fn remove_outside_universe_fails() {
        let mut deck = Deck::new();
        let err = deck.remove(vec![Card::from(52)]).unwrap_err();
        assert!(matches!(err, EquityError::DuplicateOrUnknownCard(52)));
        assert_eq!(deck.size(), 52);
    }

    #[test]
    fn sample_without_replacement() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let (drawn, rest) = Deck::new().sample(52, rng).unwrap();
        assert_eq!(Hand::from(drawn.as_slice()).size(), 52);
        assert_eq!(rest.size(), 0);
        assert!(rest.sample(1, rng).is_err());
    }

    #[test]
    fn sample_reduces_deck() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let (drawn, rest) = Deck::new().sample(7, rng).unwrap();
        assert_eq!(drawn.len(), 7);
        assert_eq!(rest.size(), 45);
        assert!(drawn.iter().all(|c| !rest.contains(c)));
    }

    #[test]
    fn draw_is_uniform() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let deck = Deck::from(Hand::try_from("2c 7d Jh As").unwrap());
        let mut counts = [0usize; 52];
        for _ in 0..40_000 {
            let mut copy = deck;
            let card = copy.draw(rng).unwrap();
            counts[u8::from(card) as usize] += 1;
        }
        let seen = counts.iter().filter(|&&n| n > 0).count();
        assert_eq!(seen, 4);
        assert!(counts.iter().filter(|&&n| n > 0).all(|&n| n > 9_000 && n < 11_000));
    }

    #[test]
    fn draw_from_empty() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(Deck::from(Hand::empty()).draw(rng), None);
    }
}
