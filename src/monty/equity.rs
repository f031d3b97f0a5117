use super::monty::Monty;
use super::showdown::Showdown;

/// The reducer over trial outcomes. Shares are exact integers over a pot
/// sized as lcm(1..=23), so every legal split divides evenly and neither
/// accumulation order nor merge order can change the result; that is what
/// lets the work tree evaluate in parallel with no fixed merge order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Equity {
    winnings: u64,
    trials: u64,
}

impl Equity {
    /// divisible by every possible split, 1 through 23
    pub const POT: u64 = 5_354_228_880;

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// field-wise sum; commutative and associative
    pub fn combine(a: Self, b: Self) -> Self {
        Self {
            winnings: a.winnings + b.winnings,
            trials: a.trials + b.trials,
        }
    }

    /// Reduce a bounded unit on the calling thread, through the same
    /// structural split recursion as the parallel driver. The lineage tree
    /// is a pure function of the trial count, and every child generator
    /// derives deterministically at its split, so both drivers bank
    /// identical sums for a given seed.
    pub fn serial(mut monty: Monty) -> Self {
        assert!(monty.remaining() < usize::MAX, "limit() the unit first");
        match monty.try_split() {
            None => monty.collect(),
            Some(rest) => Self::combine(Self::serial(monty), Self::serial(rest)),
        }
    }

    /// the same recursion, with the halves joined under rayon
    pub fn parallel(mut monty: Monty) -> Self {
        assert!(monty.remaining() < usize::MAX, "limit() the unit first");
        match monty.try_split() {
            None => monty.collect(),
            Some(rest) => {
                let (a, b) = rayon::join(|| Self::parallel(monty), || Self::parallel(rest));
                Self::combine(a, b)
            }
        }
    }

    /// winnings over trials x pot, rounded half-up at `precision` decimals;
    /// exact integer arithmetic until the final conversion
    pub fn equity(&self, precision: u32) -> f64 {
        assert!(precision <= 18, "precision beyond decimal support");
        match self.trials {
            0 => 0.0,
            trials => {
                let scale = 10u128.pow(precision);
                let num = self.winnings as u128 * scale;
                let den = trials as u128 * Self::POT as u128;
                ((num + den / 2) / den) as f64 / scale as f64
            }
        }
    }

    /// the value of calling `raise` to win `pot` plus the raise back
    pub fn expected_value(&self, pot: u64, raise: u64, precision: u32) -> anyhow::Result<f64> {
        anyhow::ensure!(pot > 0, "pot must be positive");
        anyhow::ensure!(raise > 0, "raise must be positive");
        let value = self.equity(precision) * (pot + raise) as f64 - raise as f64;
        let scale = 10f64.powi(precision as i32);
        Ok((value * scale).round() / scale)
    }

    fn absorb(&mut self, showdown: Showdown) {
        self.trials += 1;
        match showdown.split() {
            0 => {}
            n => self.winnings += Self::POT / n,
        }
    }
}

/// accumulate any finite prefix of an outcome sequence
impl FromIterator<Showdown> for Equity {
    fn from_iter<T: IntoIterator<Item = Showdown>>(iter: T) -> Self {
        iter.into_iter().fold(Self::default(), |mut equity, showdown| {
            equity.absorb(showdown);
            equity
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::board::Board;
    use crate::cards::card::Card;
    use crate::cards::pocket::Pocket;
    use crate::monty::monty::simulate;

    fn pocket() -> Pocket {
        Pocket::new(Card::from("8c"), Card::from("9c")).unwrap()
    }

    fn board() -> Board {
        Board::flop(Card::from("7c"), Card::from("Tc"), Card::from("Ah")).unwrap()
    }

    #[test]
    fn pot_divides_every_split() {
        for n in 1..=23u64 {
            assert!(Equity::POT % n == 0);
        }
    }

    #[test]
    fn three_way_chop_is_lossless() {
        let share = Equity::POT / Showdown::tie(3).split();
        assert!(share * 3 == Equity::POT);
    }

    #[test]
    fn combine_is_commutative() {
        let a = [Showdown::Win, Showdown::tie(2)].into_iter().collect();
        let b = [Showdown::Loss].into_iter().collect::<Equity>();
        assert!(Equity::combine(a, b) == Equity::combine(b, a));
    }

    #[test]
    fn deterministic_under_splitting() {
        let trials = 1 << 16;
        let monty = || simulate(2_018, 3, pocket(), board()).unwrap().limit(trials);
        let serial = Equity::serial(monty());
        let parallel = Equity::parallel(monty());
        assert!(serial == parallel);
        assert!(Equity::parallel(monty()) == parallel);
        assert!(serial.trials() == trials as u64);
        assert!(serial.equity(6) == parallel.equity(6));
    }

    #[test]
    #[ignore]
    fn deterministic_at_full_size() {
        let trials = 1 << 20;
        let monty = || simulate(2_018, 3, pocket(), board()).unwrap().limit(trials);
        let parallel = Equity::parallel(monty());
        assert!(Equity::serial(monty()) == parallel);
        assert!(Equity::parallel(monty()) == parallel);
    }

    #[test]
    fn chopped_board_equity_is_exact() {
        // royal flush on board: every trial is a three way chop
        let board = Board::river(
            Card::from("Ts"),
            Card::from("Js"),
            Card::from("Qs"),
            Card::from("Ks"),
            Card::from("As"),
        )
        .unwrap();
        let monty = simulate(7, 2, Pocket::new(Card::from("2h"), Card::from("7d")).unwrap(), board)
            .unwrap();
        assert!(monty.equity(1 << 10, 6) == 0.333333);
    }

    #[test]
    fn unbeatable_pocket_equity_is_whole() {
        let board = Board::flop(Card::from("Qs"), Card::from("Js"), Card::from("Ts")).unwrap();
        let monty = simulate(7, 3, Pocket::new(Card::from("As"), Card::from("Ks")).unwrap(), board)
            .unwrap();
        let equity = Equity::parallel(monty.limit(1 << 10));
        assert!(equity.equity(6) == 1.0);
        assert!(equity.expected_value(100, 50, 6).unwrap() == 100.0);
    }

    #[test]
    fn expected_value_rejects_empty_stakes() {
        let equity = [Showdown::Win].into_iter().collect::<Equity>();
        assert!(equity.expected_value(0, 1, 6).is_err());
        assert!(equity.expected_value(1, 0, 6).is_err());
        assert!(equity.expected_value(1, 1, 6).is_ok());
    }

    #[test]
    fn equity_stays_in_unit_interval() {
        let monty = simulate(11, 5, pocket(), board()).unwrap();
        let equity = Equity::parallel(monty.limit(1 << 12)).equity(4);
        assert!((0.0..=1.0).contains(&equity));
    }
}
