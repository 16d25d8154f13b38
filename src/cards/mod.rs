//! Card representation, decks, and hand evaluation.
//!
//! ## Core Types
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` tuple encoded in one byte
//! - [`Hand`] — An unordered set of cards as a 64-bit bitmask
//! - [`Deck`] — The unseen cards, with uniform random draws
//! - [`Street`] — How much of the board is visible
//!
//! ## Evaluation
//!
//! - [`Evaluator`] — Bitwise best-five-card search over any number of cards
//! - [`Strength`] — Evaluated hand ranking with kicker resolution
//! - [`Ranking`] — Hand category (high card through straight flush)
mod card;
mod deck;
mod evaluator;
mod hand;
mod kicks;
mod rank;
mod ranking;
mod street;
mod strength;
mod suit;

pub use card::*;
pub use deck::*;
pub use evaluator::*;
pub use hand::*;
pub use kicks::*;
pub use rank::*;
pub use ranking::*;
pub use street::*;
pub use strength::*;
pub use suit::*;
