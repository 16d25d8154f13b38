use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Five;

/// A lazy evaluator for a hand's strength.
///
/// Using a compact representation of the Hand, we search for the highest
/// Ranking using bitwise operations. Works for any number of cards, picking
/// the best five; the auction variant routinely evaluates eight.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_1_oak())
            .unwrap_or(Ranking::HighCard(Rank::Two)) // empty hand ranks lowest
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::default(),
            n => {
                let ranks = match ranking {
                    Ranking::Flush(_) => self
                        .find_suit_of_flush()
                        .map(|suit| u16::from(self.0.of(&suit)))
                        .unwrap_or_default(),
                    _ => u16::from(self.0),
                };
                Kickers::from(Self::highest(ranks & ranking.mask(), n))
            }
        }
    }

    /// keep only the n most significant bits
    fn highest(mut bits: u16, n: usize) -> u16 {
        while bits.count_ones() as usize > n {
            bits &= bits - 1;
        }
        bits
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let bits = u16::from(self.0.of(&suit));
            let rank = Rank::from(bits);
            Ranking::Flush(rank)
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            self.find_rank_of_straight(self.0.of(&suit))
                .map(Ranking::StraightFlush)
        })
    }

    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let ranks = u16::from(hand);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(LOWEST_STRAIGHT_RANK)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let mine = u64::from(self.0);
        (0..13u8)
            .rev()
            .map(Rank::from)
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| (mine & u64::from(*rank)).count_ones() >= n as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::from(Hand::try_from(s).unwrap());
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        (ranking, kickers)
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        let (ranking, kickers) = eval("As Kh Qd Jc 9s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[rustfmt::skip]
    #[test]
    fn one_pair() {
        let (ranking, kickers) = eval("As Ah Kd Qc Js");
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = eval("As Ah Ad Kc Qs");
        assert_eq!(ranking, Ranking::ThreeOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let (ranking, kickers) = eval("Ts Jh Qd Kc As");
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[rustfmt::skip]
    #[test]
    fn flush() {
        let (ranking, kickers) = eval("As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = eval("2s 2h 2d 3c 3s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn four_oak() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, kickers) = eval("Ts Js Qs Ks As");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn wheel_straight() {
        let (ranking, _) = eval("As 2h 3d 4c 5s");
        assert_eq!(ranking, Ranking::Straight(Rank::Five));
    }

    #[test]
    fn wheel_straight_flush() {
        let (ranking, _) = eval("As 2s 3s 4s 5s");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn seven_card_hand() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs Jh 9d");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[rustfmt::skip]
    #[test]
    fn flush_over_straight() {
        let (ranking, kickers) = eval("4h 6h 7h 8h 9h Ts");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
        assert_eq!(kickers, Kickers::from(vec![Rank::Eight, Rank::Seven, Rank::Six, Rank::Four]));
    }

    #[test]
    fn full_house_over_flush() {
        let (ranking, _) = eval("Kh Ah Ad As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak_over_full_house() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks Kh Qd");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush_over_four_oak() {
        let (ranking, _) = eval("Ts Js Qs Ks As Ah Ad Ac");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn low_straight() {
        let (ranking, _) = eval("As 2s 3h 4d 5c 6s");
        assert_eq!(ranking, Ranking::Straight(Rank::Six));
    }

    #[test]
    fn three_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs Qh Jd");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn two_three_oak() {
        let (ranking, _) = eval("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }
}
