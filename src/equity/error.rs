/// Reasons an estimate cannot be produced.
///
/// Every variant is raised before the first trial runs.
/// Callers should treat any of them as "no estimate available".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquityError {
    /// A card appears twice across the known sets, or lies outside the 52-card universe.
    DuplicateOrUnknownCard(u8),
    /// The unseen pool cannot supply one complete trial.
    InsufficientDeck { needed: usize, available: usize },
    /// Out-of-range card counts, board size, or trial budget.
    InvalidQuery(String),
}

impl std::fmt::Display for EquityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateOrUnknownCard(n) => {
                write!(f, "duplicate or unknown card: {}", crate::cards::Card::from(*n))
            }
            Self::InsufficientDeck { needed, available } => write!(
                f,
                "insufficient deck: need {} cards, {} remain",
                needed, available
            ),
            Self::InvalidQuery(s) => write!(f, "invalid query: {}", s),
        }
    }
}

impl std::error::Error for EquityError {}
