//! Monte Carlo equity estimation.
//!
//! An [`Estimator`] answers "how often do I win from here" by repeatedly
//! dealing the unseen cards at random and asking a [`Ranker`] who holds the
//! better hand. Three query shapes share the same trial loop:
//!
//! - [`EquityQuery::preflop`] — two hole cards, nothing on the board
//! - [`AuctionQuery`] — on the flop, before the extra hole card is awarded
//! - [`EquityQuery::round`] — after the auction, with a 2 or 3 card opponent
mod error;
mod estimator;
mod query;
mod ranker;
mod result;

pub use error::*;
pub use estimator::*;
pub use query::*;
pub use ranker::*;
pub use result::*;
