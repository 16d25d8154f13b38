use crate::Probability;
use std::cmp::Ordering;
use std::ops::Add;

/// Win/loss/tie counts over completed trials.
///
/// Counts are kept as integers and only turned into rates on demand, so
/// `wins + losses + ties == trials` holds exactly. Merging two tallies is
/// plain addition, which lets workers combine in any order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct EquityResult {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    pub trials: usize,
}

impl EquityResult {
    pub fn win_rate(&self) -> Probability {
        Self::rate(self.wins, self.trials)
    }
    pub fn loss_rate(&self) -> Probability {
        Self::rate(self.losses, self.trials)
    }
    pub fn tie_rate(&self) -> Probability {
        Self::rate(self.ties, self.trials)
    }
    fn rate(n: usize, trials: usize) -> Probability {
        match trials {
            0 => 0.,
            t => n as Probability / t as Probability,
        }
    }
}

/// one trial's showdown, hero compared to villain
impl From<Ordering> for EquityResult {
    fn from(ord: Ordering) -> Self {
        Self {
            wins: (ord == Ordering::Greater) as usize,
            losses: (ord == Ordering::Less) as usize,
            ties: (ord == Ordering::Equal) as usize,
            trials: 1,
        }
    }
}

impl Add for EquityResult {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            losses: self.losses + rhs.losses,
            ties: self.ties + rhs.ties,
            trials: self.trials + rhs.trials,
        }
    }
}

impl std::fmt::Display for EquityResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "win {:.3} loss {:.3} tie {:.3} ({} trials)",
            self.win_rate(),
            self.loss_rate(),
            self.tie_rate(),
            self.trials
        )
    }
}

/// Three conditional win counts for the hole-card auction.
///
/// - `tied`: neither side holds the auction card. This stands in for a tied
///   auction, where in fact both sides would receive a card; the comparison
///   without the card is an approximation kept on purpose.
/// - `won`: we hold the auction card, the opponent does not.
/// - `lost`: the opponent holds the auction card, we do not.
///
/// The rates answer different questions and need not sum to one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct AuctionEquity {
    pub tied: usize,
    pub won: usize,
    pub lost: usize,
    pub trials: usize,
}

impl AuctionEquity {
    pub fn tied_rate(&self) -> Probability {
        EquityResult::rate(self.tied, self.trials)
    }
    pub fn won_rate(&self) -> Probability {
        EquityResult::rate(self.won, self.trials)
    }
    pub fn lost_rate(&self) -> Probability {
        EquityResult::rate(self.lost, self.trials)
    }
}

impl Add for AuctionEquity {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            tied: self.tied + rhs.tied,
            won: self.won + rhs.won,
            lost: self.lost + rhs.lost,
            trials: self.trials + rhs.trials,
        }
    }
}

impl std::fmt::Display for AuctionEquity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "tied {:.3} won {:.3} lost {:.3} ({} trials)",
            self.tied_rate(),
            self.won_rate(),
            self.lost_rate(),
            self.trials
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_partitions() {
        let total = [Ordering::Greater, Ordering::Less, Ordering::Equal, Ordering::Greater]
            .into_iter()
            .map(EquityResult::from)
            .fold(EquityResult::default(), Add::add);
        assert_eq!(total.wins, 2);
        assert_eq!(total.losses, 1);
        assert_eq!(total.ties, 1);
        assert_eq!(total.trials, 4);
        assert_eq!(total.win_rate(), 0.5);
        assert_eq!(total.tie_rate(), 0.25);
    }

    #[test]
    fn empty_rates() {
        let empty = AuctionEquity::default();
        assert_eq!(empty.won_rate(), 0.);
        assert_eq!(EquityResult::default().loss_rate(), 0.);
    }
}
