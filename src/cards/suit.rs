#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> &'static [Self] {
        &[Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
/// each suit owns a contiguous 13-bit block of the 52-bit card set
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x1FFF << (13 * u8::from(s))
    }
}

/// str isomorphism
impl From<&str> for Suit {
    fn from(s: &str) -> Self {
        match s {
            "c" => Suit::Club,
            "d" => Suit::Diamond,
            "h" => Suit::Heart,
            "s" => Suit::Spade,
            _ => panic!("Invalid suit str: {}", s),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..4u8 {
            assert!(n == u8::from(Suit::from(n)));
        }
    }

    #[test]
    fn disjoint_blocks() {
        let blocks = Suit::all().iter().fold(0u64, |a, s| {
            assert!(a & u64::from(*s) == 0);
            a | u64::from(*s)
        });
        assert!(blocks == (1 << 52) - 1);
    }
}
