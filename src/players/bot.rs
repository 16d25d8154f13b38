use crate::gameplay::Action;
use crate::gameplay::Spot;
use crate::gameplay::Terminal;

/// The capabilities the game engine drives a bot through.
pub trait Bot {
    fn on_round_start(&mut self, spot: &Spot);
    fn on_round_end(&mut self, terminal: &Terminal);
    fn choose_action(&mut self, spot: &Spot) -> Action;
}
