use super::bot::Bot;
use super::budget::Budget;
use super::pricing::AuctionContext;
use super::pricing::AuctionPricer;
use super::pricing::Heuristic;
use super::stats::Stats;
use crate::AGGRESSION;
use crate::Chips;
use crate::PREFLOP_RAISE_OFFSET;
use crate::PREFLOP_WARMUP;
use crate::Probability;
use crate::cards::Street;
use crate::equity::AuctionEquity;
use crate::equity::EquityError;
use crate::equity::Estimator;
use crate::gameplay::Action;
use crate::gameplay::Choice;
use crate::gameplay::Spot;
use crate::gameplay::Terminal;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Per-round memory, reset at every round start.
#[derive(Debug, Clone, Copy)]
struct Memo {
    preflop: Option<Probability>,
    auction: Option<(AuctionEquity, Chips)>,
    opportunity: bool,
}

impl Default for Memo {
    fn default() -> Self {
        Self {
            preflop: None,
            auction: None,
            opportunity: true,
        }
    }
}

/// Equity-driven strategy.
///
/// Every decision samples a fresh estimate sized by the match clock. Raise
/// sizes and the postflop aggression draw come from the robot's own RNG, which
/// also seeds each estimate, so a seeded robot replays a match exactly.
#[derive(Debug)]
pub struct Robot<P = Heuristic> {
    pricer: P,
    budget: Budget,
    stats: Stats,
    memo: Memo,
    rng: SmallRng,
}

impl Robot {
    pub fn new(seed: u64) -> Self {
        Self::with_pricer(Heuristic, seed)
    }
}

impl<P: AuctionPricer> Robot<P> {
    pub fn with_pricer(pricer: P, seed: u64) -> Self {
        Self {
            pricer,
            budget: Budget::default(),
            stats: Stats::default(),
            memo: Memo::default(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    fn estimator(&mut self) -> Estimator {
        Estimator::default().seeded(self.rng.random())
    }

    fn preflop(&mut self, spot: &Spot) -> Result<Action, EquityError> {
        let p = match self.memo.preflop {
            Some(p) => p,
            None => {
                let trials = self.budget.trials(spot.clock);
                let p = self.estimator().preflop(&spot.hole, trials)?.win_rate();
                self.memo.preflop = Some(p);
                p
            }
        };
        if spot.is_opening() {
            if spot.can(Choice::Fold) {
                self.stats.faced();
            }
            if spot.round > PREFLOP_WARMUP {
                self.stats.adapt();
            }
            if p < self.stats.cutoff() && spot.can(Choice::Fold) {
                // folding first to act ends the round before the opponent moves
                if spot.acted == 0 {
                    self.memo.opportunity = false;
                }
                self.stats.folded();
                return Ok(Action::Fold);
            }
            if p >= self.stats.cutoff() && spot.can(Choice::Raise) {
                let (min, max) = Self::bounds(spot);
                let top = min + ((p - PREFLOP_RAISE_OFFSET) * (max - min) as Probability) as Chips;
                let top = top.clamp(min, max);
                return Ok(Action::Raise(self.rng.random_range(min..=top)));
            }
        }
        Ok(Self::passive(spot))
    }

    fn auction(&mut self, spot: &Spot) -> Result<Action, EquityError> {
        let trials = self.budget.trials(spot.clock);
        let equity = self.estimator().auction(&spot.hole, &spot.board, trials)?;
        let context = AuctionContext {
            round: spot.round,
            max_bid: spot.max_bid(),
            preflop: spot.preflop,
        };
        let bid = self.pricer.estimate_auction_price(&equity, &context);
        log::debug!("auction {} for max {}: bid {}", equity, context.max_bid, bid);
        self.memo.auction = Some((equity, bid));
        Ok(Action::Bid(bid))
    }

    fn postflop(&mut self, spot: &Spot) -> Result<Action, EquityError> {
        let trials = self.budget.trials(spot.clock);
        let result = self
            .estimator()
            .round(&spot.hole, &spot.board, spot.opponent_cards(), trials)?;
        let p_win = result.win_rate();
        let p_lose = result.loss_rate();
        let mine = spot.my_contribution() as Probability;
        let theirs = spot.opp_contribution() as Probability;
        let cost = spot.continue_cost() as Probability;
        if p_win * theirs - p_lose * (mine + cost) < -mine {
            return Ok(Self::fallback(spot));
        }
        if spot.can(Choice::Raise) && self.rng.random::<Probability>() + p_win > AGGRESSION {
            let (min, max) = Self::bounds(spot);
            let mut amount = (((p_win - p_lose) * spot.effective_stack() as Probability) as Chips).min(max);
            if spot.street == Street::Flop {
                amount /= 2;
            }
            return match amount < min + 1 {
                true => Ok(Action::Raise(min)),
                false => Ok(Action::Raise(self.rng.random_range(min..=amount))),
            };
        }
        Ok(Self::passive(spot))
    }

    /// Raise bounds with the upper end never below the lower.
    fn bounds(spot: &Spot) -> (Chips, Chips) {
        let (min, max) = spot.raise_bounds;
        (min, max.max(min))
    }
    /// Stay in the hand for free, or pay to continue.
    fn passive(spot: &Spot) -> Action {
        match spot.can(Choice::Check) {
            true => Action::Check,
            false => Action::Call,
        }
    }
    /// Give up as cheaply as the rules allow.
    fn fallback(spot: &Spot) -> Action {
        if spot.can(Choice::Bid) {
            Action::Bid(0)
        } else if spot.can(Choice::Check) {
            Action::Check
        } else {
            Action::Fold
        }
    }
}

impl<P: AuctionPricer> Bot for Robot<P> {
    fn on_round_start(&mut self, spot: &Spot) {
        log::debug!("round {} with {:?}", spot.round, spot.hole);
        self.memo = Memo::default();
    }
    fn on_round_end(&mut self, terminal: &Terminal) {
        self.stats.observe(terminal, self.memo.opportunity, self.memo.auction);
        log::debug!("round ended on {} for {}", terminal.street, terminal.deltas[terminal.active]);
    }
    fn choose_action(&mut self, spot: &Spot) -> Action {
        let decision = match spot.street {
            _ if spot.can(Choice::Bid) => self.auction(spot),
            Street::Pref => self.preflop(spot),
            _ => self.postflop(spot),
        };
        let action = decision.unwrap_or_else(|e| {
            log::warn!("round {} falling back: {}", spot.round, e);
            Self::fallback(spot)
        });
        log::info!("round {:>4} {:<7} {}", spot.round, spot.street, action);
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::gameplay::Preflop;

    /// Bids exactly what the opponent raised preflop.
    struct Mirror;

    impl AuctionPricer for Mirror {
        fn estimate_auction_price(&self, _: &AuctionEquity, context: &AuctionContext) -> Chips {
            context.preflop.opp_raised.min(context.max_bid)
        }
    }

    fn spot(street: Street, hole: &str, board: &str, legal: Vec<Choice>) -> Spot {
        Spot {
            round: 1,
            clock: 30.,
            active: 0,
            acted: 0,
            street,
            hole: Card::parse(hole).unwrap(),
            board: Card::parse(board).unwrap(),
            pips: [1, 2],
            stacks: [399, 398],
            bids: [None, None],
            preflop: Preflop::default(),
            raise_bounds: (4, 399),
            legal,
        }
    }

    fn terminal(folder: Option<usize>) -> Terminal {
        Terminal {
            round: 1,
            active: 0,
            street: Street::Pref,
            deltas: [-1, 1],
            bids: [None, None],
            folder,
            preflop: Preflop::default(),
        }
    }

    #[test]
    fn folds_trash_preflop() {
        let mut robot = Robot::new(7);
        let spot = spot(Street::Pref, "7c 2d", "", vec![Choice::Fold, Choice::Call, Choice::Raise]);
        robot.on_round_start(&spot);
        assert_eq!(robot.choose_action(&spot), Action::Fold);
        robot.on_round_end(&terminal(Some(0)));
        assert_eq!(robot.stats().fold_rate(), 1.);
        assert_eq!(robot.stats().opp_fold_rate(), 0.);
    }

    #[test]
    fn raises_aces_preflop() {
        let mut robot = Robot::new(7);
        let spot = spot(Street::Pref, "As Ah", "", vec![Choice::Fold, Choice::Call, Choice::Raise]);
        robot.on_round_start(&spot);
        match robot.choose_action(&spot) {
            Action::Raise(amount) => assert!((4..=399).contains(&amount)),
            action => panic!("expected a raise, got {}", action),
        }
    }

    #[test]
    fn calls_aces_after_opening() {
        let mut robot = Robot::new(7);
        let mut spot = spot(Street::Pref, "As Ah", "", vec![Choice::Fold, Choice::Call, Choice::Raise]);
        robot.on_round_start(&spot);
        robot.choose_action(&spot);
        spot.acted = 2;
        assert_eq!(robot.choose_action(&spot), Action::Call);
    }

    #[test]
    fn bids_within_ceiling() {
        let mut robot = Robot::new(7);
        let mut spot = spot(Street::Flop, "As Ah", "Ad 7c 2h", vec![Choice::Bid]);
        spot.stacks = [380, 350];
        robot.on_round_start(&spot);
        match robot.choose_action(&spot) {
            Action::Bid(amount) => assert!((0..=spot.max_bid()).contains(&amount)),
            action => panic!("expected a bid, got {}", action),
        }
    }

    #[test]
    fn pricer_sees_preflop_raises() {
        let mut robot = Robot::with_pricer(Mirror, 7);
        let mut spot = spot(Street::Flop, "As Ah", "Ad 7c 2h", vec![Choice::Bid]);
        spot.round = 12;
        spot.stacks = [386, 386];
        spot.preflop = Preflop::from_history(&[[1, 2], [1, 14], [14, 14]], 0);
        robot.on_round_start(&spot);
        assert_eq!(robot.choose_action(&spot), Action::Bid(13));
        robot.on_round_end(&Terminal {
            round: 12,
            active: 0,
            street: Street::Rive,
            deltas: [20, -20],
            bids: [Some(13), Some(5)],
            folder: None,
            preflop: spot.preflop,
        });
        let sample = robot.stats().auctions()[0];
        assert_eq!(sample.round, 12);
        assert_eq!(sample.bid, 13);
        assert_eq!(sample.opponent, 5);
        assert_eq!(sample.preflop, Preflop { pip: 14, opp_raised: 13 });
    }

    #[test]
    fn inverted_raise_bounds_do_not_panic() {
        let mut robot = Robot::new(7);
        let mut spot = spot(Street::Pref, "As Ah", "", vec![Choice::Fold, Choice::Call, Choice::Raise]);
        spot.raise_bounds = (40, 10);
        robot.on_round_start(&spot);
        assert_eq!(robot.choose_action(&spot), Action::Raise(40));
    }

    #[test]
    fn folds_board_playing_hand_to_big_bet() {
        let mut robot = Robot::new(7);
        let mut spot = spot(Street::Rive, "7c 2d", "As Kd Qh Js 9c", vec![Choice::Fold, Choice::Call]);
        spot.pips = [0, 190];
        spot.stacks = [390, 200];
        robot.on_round_start(&spot);
        assert_eq!(robot.choose_action(&spot), Action::Fold);
    }

    #[test]
    fn never_folds_quads() {
        let mut robot = Robot::new(7);
        let mut spot = spot(
            Street::Rive,
            "As Ah",
            "Ad Ac Ks 2c 3d",
            vec![Choice::Fold, Choice::Call, Choice::Raise],
        );
        spot.pips = [0, 50];
        spot.stacks = [350, 300];
        spot.bids = [Some(10), Some(5)];
        spot.raise_bounds = (100, 350);
        robot.on_round_start(&spot);
        assert_ne!(robot.choose_action(&spot), Action::Fold);
    }

    #[test]
    fn falls_back_on_bad_cards() {
        let mut robot = Robot::new(7);
        let spot = spot(Street::Flop, "As Ah", "As 7c 2h", vec![Choice::Check, Choice::Raise]);
        robot.on_round_start(&spot);
        assert_eq!(robot.choose_action(&spot), Action::Check);
        let mut spot = spot;
        spot.legal = vec![Choice::Fold, Choice::Call];
        assert_eq!(robot.choose_action(&spot), Action::Fold);
        spot.legal = vec![Choice::Bid];
        assert_eq!(robot.choose_action(&spot), Action::Bid(0));
    }

    #[test]
    fn counts_opponent_preflop_folds() {
        let mut robot = Robot::new(7);
        let spot = spot(Street::Pref, "As Ah", "", vec![Choice::Fold, Choice::Call, Choice::Raise]);
        robot.on_round_start(&spot);
        robot.choose_action(&spot);
        robot.on_round_end(&terminal(Some(1)));
        assert_eq!(robot.stats().opp_fold_rate(), 1.);
    }

    #[test]
    fn seeded_robots_agree() {
        let spot = spot(Street::Flop, "Ts 9s", "8s 7d 2c", vec![Choice::Check, Choice::Raise]);
        let mut spot = spot;
        spot.bids = [Some(3), Some(8)];
        let mut a = Robot::new(99);
        let mut b = Robot::new(99);
        a.on_round_start(&spot);
        b.on_round_start(&spot);
        assert_eq!(a.choose_action(&spot), b.choose_action(&spot));
    }
}
