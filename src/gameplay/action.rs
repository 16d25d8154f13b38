use crate::Chips;

/// A move the engine will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Call,
    Check,
    /// Raise the pip to this many chips.
    Raise(Chips),
    /// Sealed bid for the auction card.
    Bid(Chips),
}

/// The kinds of moves, used to describe which ones are legal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Choice {
    Fold,
    Call,
    Check,
    Raise,
    Bid,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Call => write!(f, "CALL"),
            Action::Check => write!(f, "CHECK"),
            Action::Raise(amount) => write!(f, "RAISE {}", amount),
            Action::Bid(amount) => write!(f, "BID   {}", amount),
        }
    }
}
