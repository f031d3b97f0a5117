/// The outcome of one trial, seen from the simulated player's side.
/// A Tie carries how many players share the pot, the simulated player
/// included; the constructor enforces the 2..=23 range at the boundary.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Showdown {
    Win,
    Loss,
    Tie(u8),
}

impl Showdown {
    pub fn tie(n: usize) -> Self {
        assert!((2..=23).contains(&n), "tie between {} players", n);
        Self::Tie(n as u8)
    }

    /// how many players share the pot: 1 for a win, 0 for a loss
    pub fn split(&self) -> u64 {
        match self {
            Self::Win => 1,
            Self::Loss => 0,
            Self::Tie(n) => u64::from(*n),
        }
    }
}

impl std::fmt::Display for Showdown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Tie(n) => write!(f, "tie {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits() {
        assert!(Showdown::Win.split() == 1);
        assert!(Showdown::Loss.split() == 0);
        assert!(Showdown::tie(3).split() == 3);
        assert!(Showdown::tie(23).split() == 23);
    }

    #[test]
    #[should_panic]
    fn tie_of_one() {
        let _ = Showdown::tie(1);
    }

    #[test]
    #[should_panic]
    fn tie_of_twenty_four() {
        let _ = Showdown::tie(24);
    }
}
