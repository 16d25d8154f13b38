use crate::Chips;
use crate::PREFLOP_CUTOFF;
use crate::PREFLOP_CUTOFF_FLOOR;
use crate::PREFLOP_CUTOFF_STEP;
use crate::Probability;
use crate::equity::AuctionEquity;
use crate::gameplay::Preflop;
use crate::gameplay::Terminal;

/// One auction we took part in, kept as training data for a learned pricer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuctionSample {
    pub round: usize,
    pub equity: AuctionEquity,
    pub preflop: Preflop,
    pub bid: Chips,
    /// The target a learned pricer fits.
    pub opponent: Chips,
}

/// Match statistics, updated at round boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    cutoff: Probability,
    folds: usize,
    preflops: usize,
    opp_folds: usize,
    opp_preflops: usize,
    auctions: Vec<AuctionSample>,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            cutoff: PREFLOP_CUTOFF,
            folds: 0,
            preflops: 0,
            opp_folds: 0,
            opp_preflops: 0,
            auctions: Vec::new(),
        }
    }
}

impl Stats {
    /// Preflop equity below which we fold.
    pub fn cutoff(&self) -> Probability {
        self.cutoff
    }
    pub fn fold_rate(&self) -> Probability {
        Self::rate(self.folds, self.preflops)
    }
    pub fn opp_fold_rate(&self) -> Probability {
        Self::rate(self.opp_folds, self.opp_preflops)
    }
    pub fn auctions(&self) -> &[AuctionSample] {
        &self.auctions
    }

    /// We faced a preflop decision with folding allowed.
    pub fn faced(&mut self) {
        self.preflops += 1;
    }
    /// We folded preflop.
    pub fn folded(&mut self) {
        self.folds += 1;
    }

    /// Step the cutoff toward the opponent's fold rate.
    ///
    /// Tighten while they fold more often than we do, otherwise loosen until
    /// the floor.
    pub fn adapt(&mut self) {
        if self.opp_fold_rate() > self.fold_rate() {
            self.cutoff += PREFLOP_CUTOFF_STEP;
        } else if self.cutoff > PREFLOP_CUTOFF_FLOOR {
            self.cutoff = (self.cutoff - PREFLOP_CUTOFF_STEP).max(PREFLOP_CUTOFF_FLOOR);
        }
    }

    /// Fold in a finished round. `opportunity` is false when the opponent
    /// never got to act preflop.
    pub fn observe(&mut self, terminal: &Terminal, opportunity: bool, auction: Option<(AuctionEquity, Chips)>) {
        if opportunity {
            self.opp_preflops += 1;
            if terminal.opponent_folded_preflop() {
                self.opp_folds += 1;
            }
        }
        if let (Some((equity, bid)), Some(opponent)) = (auction, terminal.opponent_bid()) {
            self.auctions.push(AuctionSample {
                round: terminal.round,
                equity,
                preflop: terminal.preflop,
                bid,
                opponent,
            });
        }
    }

    fn rate(n: usize, d: usize) -> Probability {
        match d {
            0 => 0.,
            d => n as Probability / d as Probability,
        }
    }
}
