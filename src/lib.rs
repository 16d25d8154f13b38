//! Monte Carlo equity estimation for heads-up hold'em with a hole-card auction.
//!
//! After the flop, both players bid for one extra hole card. The winner of the
//! auction plays the rest of the hand with three private cards.
//!
//! - [`cards`] — cards, decks, and the default hand evaluator
//! - [`equity`] — the sampling estimator and its three query shapes
//! - [`gameplay`] — per-decision state handed over by the game engine
//! - [`players`] — the decision policy consuming the estimator

pub mod cards;
pub mod equity;
pub mod gameplay;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, pips, and bids in chips.
pub type Chips = i32;
/// Win rates, cutoffs, and sampling probabilities.
pub type Probability = f32;
/// Seconds remaining on the shared match clock.
pub type Seconds = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Number of rounds in a match.
pub const NUM_ROUNDS: usize = 1000;
/// Starting stack at the beginning of every round.
pub const STARTING_STACK: Chips = 400;
/// Big blind amount.
pub const BIG_BLIND: Chips = 2;
/// Small blind amount.
pub const SMALL_BLIND: Chips = 1;

// ============================================================================
// SAMPLING
// Trials are grouped into chunks; each chunk owns one RNG substream.
// ============================================================================
/// Trials per chunk. Fixed so seeded results never depend on thread count.
pub const CHUNK_TRIALS: usize = 32;
/// Default iteration budget per estimate.
pub const DEFAULT_TRIALS: usize = 150;
/// Smallest iteration budget used when the clock runs low.
pub const MINIMUM_TRIALS: usize = 25;
/// Below this many seconds left on the match clock, trial counts shrink.
pub const CLOCK_LOW_WATER: Seconds = 10.0;

// ============================================================================
// PREFLOP POLICY
// ============================================================================
/// Initial equity below which we fold preflop.
pub const PREFLOP_CUTOFF: Probability = 0.575;
/// Lowest the adaptive preflop cutoff may go.
pub const PREFLOP_CUTOFF_FLOOR: Probability = 0.55;
/// Adaptive cutoff step per round.
pub const PREFLOP_CUTOFF_STEP: Probability = 0.01;
/// Rounds of observation before the cutoff starts adapting.
pub const PREFLOP_WARMUP: usize = 200;
/// Equity offset subtracted before scaling preflop raises.
pub const PREFLOP_RAISE_OFFSET: Probability = 0.4;

// ============================================================================
// AUCTION POLICY
// ============================================================================
/// Tie-proxy equity below which we bid nothing.
pub const AUCTION_FLOOR: Probability = 0.35;
/// Tie-proxy equity above which we bid everything.
pub const AUCTION_CEILING: Probability = 0.65;

// ============================================================================
// POSTFLOP POLICY
// ============================================================================
/// Raise when a uniform draw plus win rate exceeds this.
pub const AGGRESSION: Probability = 0.8;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
