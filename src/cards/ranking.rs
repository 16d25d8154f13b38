use super::rank::Rank;

/// A poker hand's category.
///
/// This is a simplified version of the hand's value and does not include the
/// hand's kicker cards. Variants are ordered from weakest to strongest, so the
/// derived `Ord` is the showdown order. Kickers break ties within a category.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers (same suit)
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// Ranks still eligible to kick once the category's own ranks are excluded.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Flush(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..) | Ranking::StraightFlush(..) | Ranking::Straight(..) => 0,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showdown_order() {
        assert!(Ranking::Straight(Rank::Ace) < Ranking::Flush(Rank::Seven));
        assert!(Ranking::Flush(Rank::Ace) < Ranking::FullHouse(Rank::Two, Rank::Three));
        assert!(Ranking::TwoPair(Rank::Ace, Rank::Two) > Ranking::TwoPair(Rank::King, Rank::Queen));
        assert!(Ranking::FourOAK(Rank::Two) < Ranking::StraightFlush(Rank::Five));
    }
}
