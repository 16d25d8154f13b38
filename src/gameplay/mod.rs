//! Values handed over by the game engine.
//!
//! The engine protocol itself lives elsewhere; these types only carry what a
//! decision needs: the legal moves, chip counts, and the cards in view.
mod action;
mod preflop;
mod spot;
mod terminal;

pub use action::*;
pub use preflop::*;
pub use spot::*;
pub use terminal::*;
