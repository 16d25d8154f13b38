use super::error::EquityError;
use super::query::AuctionQuery;
use super::query::EquityQuery;
use super::query::Setup;
use super::query::Villain;
use super::ranker::Ranker;
use super::ranker::Referee;
use super::result::AuctionEquity;
use super::result::EquityResult;
use crate::CHUNK_TRIALS;
use crate::cards::Card;
use crate::cards::Hand;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;
use std::ops::Add;

/// Monte Carlo equity estimator.
///
/// Trials are split into fixed-size chunks. Each chunk deals from its own
/// copy of the reduced deck with its own [`SmallRng`], seeded by hashing the
/// top-level seed with the chunk index, and chunks run on the rayon pool.
/// Chunk counts are summed at the end. Because neither the chunking nor the
/// seeds depend on how many threads run them, a seeded estimator returns the
/// same counts on any machine.
///
/// Nothing outlives a call: no caches, no shared counters.
#[derive(Debug, Default, Clone)]
pub struct Estimator<R = Referee> {
    ranker: R,
    seed: Option<u64>,
}

impl<R: Ranker> Estimator<R> {
    pub fn new(ranker: R) -> Self {
        Self { ranker, seed: None }
    }
    /// Fix the top-level seed so repeated calls sample identical trials.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Probability of winning with two hole cards before the flop.
    pub fn preflop(&self, hero: &[Card], trials: usize) -> Result<EquityResult, EquityError> {
        self.estimate(&EquityQuery::preflop(hero.to_vec(), trials))
    }

    /// Win and loss rates once the auction is settled.
    pub fn round(
        &self,
        hero: &[Card],
        board: &[Card],
        opponent: usize,
        trials: usize,
    ) -> Result<EquityResult, EquityError> {
        self.estimate(&EquityQuery::round(
            hero.to_vec(),
            board.to_vec(),
            Villain::Unknown(opponent),
            trials,
        ))
    }

    /// Three conditional win rates on the flop, before the auction card is awarded.
    pub fn auction(&self, hero: &[Card], flop: &[Card], trials: usize) -> Result<AuctionEquity, EquityError> {
        self.contest(&AuctionQuery::new(hero.to_vec(), flop.to_vec(), trials))
    }

    /// Deal the missing board and opponent cards, then compare at showdown.
    ///
    /// When nothing is left to deal, a single trial settles the result
    /// regardless of the requested budget.
    pub fn estimate(&self, query: &EquityQuery) -> Result<EquityResult, EquityError> {
        let setup = query.setup()?;
        let trials = match setup.is_determined() {
            true => 1,
            false => query.trials(),
        };
        let result = self.simulate(trials, |rng| self.showdown(&setup, rng));
        debug_assert!(result.wins + result.losses + result.ties == result.trials);
        log::debug!("estimate {} on {} board: {}", Hand::from(query.hero()), Hand::from(query.board()), result);
        Ok(result)
    }

    /// Deal two unflipped board cards, the auction card, and two opponent cards,
    /// then score the four hero/villain combinations with and without the auction card.
    pub fn contest(&self, query: &AuctionQuery) -> Result<AuctionEquity, EquityError> {
        let setup = query.setup()?;
        let result = self.simulate(query.trials(), |rng| self.auctioned(&setup, rng));
        log::debug!("auction {} on {}: {}", setup.hero, setup.board, result);
        Ok(result)
    }

    fn showdown(&self, setup: &Setup, rng: &mut SmallRng) -> EquityResult {
        let mut deck = setup.deck;
        let board = Hand::add(setup.board, deck.deal(setup.pending, rng));
        let villain = Hand::add(setup.villain, deck.deal(setup.unknown, rng));
        let hero = self.ranker.rank(Hand::add(setup.hero, board));
        let opponent = self.ranker.rank(Hand::add(villain, board));
        EquityResult::from(hero.cmp(&opponent))
    }

    fn auctioned(&self, setup: &Setup, rng: &mut SmallRng) -> AuctionEquity {
        let mut deck = setup.deck;
        let board = Hand::add(setup.board, deck.deal(setup.pending - 1, rng));
        let extra = deck.deal(1, rng);
        let villain = deck.deal(setup.unknown, rng);
        let hero = Hand::add(setup.hero, board);
        let opponent = Hand::add(villain, board);
        let hero2 = self.ranker.rank(hero);
        let hero3 = self.ranker.rank(Hand::add(hero, extra));
        let opp2 = self.ranker.rank(opponent);
        let opp3 = self.ranker.rank(Hand::add(opponent, extra));
        AuctionEquity {
            tied: (hero2 > opp2) as usize,
            won: (hero3 > opp2) as usize,
            lost: (hero2 > opp3) as usize,
            trials: 1,
        }
    }

    /// Run `trials` independent trials across chunks and sum their outcomes.
    fn simulate<T, F>(&self, trials: usize, trial: F) -> T
    where
        T: Default + Add<Output = T> + Send,
        F: Fn(&mut SmallRng) -> T + Sync,
    {
        let seed = self.seed.unwrap_or_else(rand::random);
        (0..trials.div_ceil(CHUNK_TRIALS))
            .into_par_iter()
            .map(|chunk| {
                let ref mut rng = Self::substream(seed, chunk);
                let n = CHUNK_TRIALS.min(trials - chunk * CHUNK_TRIALS);
                log::trace!("chunk {} running {} trials", chunk, n);
                (0..n).map(|_| trial(rng)).fold(T::default(), T::add)
            })
            .reduce(T::default, T::add)
    }

    /// generate seed for PRNG. hashing the chunk index yields independent,
    /// reproducible streams for every chunk of one call.
    fn substream(seed: u64, chunk: usize) -> SmallRng {
        let ref mut hasher = DefaultHasher::new();
        seed.hash(hasher);
        chunk.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }
}
