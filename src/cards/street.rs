#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Street {
    Pref,
    Flop,
    Turn,
    Rive,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
}

impl From<usize> for Street {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Pref,
            3 => Self::Flop,
            4 => Self::Turn,
            5 => Self::Rive,
            _ => panic!("no other usizes"),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_usize() {
        for street in Street::all() {
            assert!(*street == Street::from(street.n_observed()));
        }
    }
}
