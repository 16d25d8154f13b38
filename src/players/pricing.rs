use crate::AUCTION_CEILING;
use crate::AUCTION_FLOOR;
use crate::Chips;
use crate::equity::AuctionEquity;
use crate::gameplay::Preflop;

/// What a pricer knows about the auction besides the equities.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AuctionContext {
    pub round: usize,
    /// Largest useful bid.
    pub max_bid: Chips,
    pub preflop: Preflop,
}

/// Turns auction equities into a sealed bid.
///
/// A learned model plugs in here. Its features are the won and lost rates
/// plus the preflop pip and opponent raises, the same fields kept in
/// [`AuctionSample`](super::stats::AuctionSample).
pub trait AuctionPricer {
    fn estimate_auction_price(&self, equity: &AuctionEquity, context: &AuctionContext) -> Chips;
}

/// Threshold bidding on the no-auction-card win rate.
///
/// Weak hands bid nothing, strong hands bid everything, and the middle bids in
/// proportion to how much the auction card swings the outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct Heuristic;

impl AuctionPricer for Heuristic {
    fn estimate_auction_price(&self, equity: &AuctionEquity, context: &AuctionContext) -> Chips {
        let max_bid = context.max_bid.max(0);
        let tied = equity.tied_rate();
        if tied < AUCTION_FLOOR {
            0
        } else if tied > AUCTION_CEILING {
            max_bid
        } else {
            let swing = 0.5 + equity.won_rate() - equity.lost_rate();
            ((swing * max_bid as f32) as Chips).clamp(0, max_bid)
        }
    }
}
