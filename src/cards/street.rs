/// A betting round, identified by how many board cards are face up.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    /// Board cards visible on this street.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// Board cards still face down on this street.
    pub const fn n_pending(&self) -> usize {
        5 - self.n_observed()
    }
}

/// board size isomorphism
impl TryFrom<usize> for Street {
    type Error = String;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            _ => Err(format!("no street shows {} board cards", n)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

impl crate::Arbitrary for Street {
    fn random() -> Self {
        use rand::Rng;
        match rand::rng().random_range(0..4) {
            0 => Self::Pref,
            1 => Self::Flop,
            2 => Self::Turn,
            _ => Self::Rive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_board_size() {
        let street = Street::random();
        assert_eq!(street, Street::try_from(street.n_observed()).unwrap());
    }

    #[test]
    fn invalid_board_sizes() {
        assert!(Street::try_from(1).is_err());
        assert!(Street::try_from(2).is_err());
        assert!(Street::try_from(6).is_err());
    }

    #[test]
    fn pending_cards() {
        assert_eq!(Street::Pref.n_pending(), 5);
        assert_eq!(Street::Turn.n_pending(), 1);
        assert_eq!(Street::Rive.n_pending(), 0);
    }
}
