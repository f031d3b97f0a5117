use super::equity::Equity;
use super::showdown::Showdown;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::pocket::Pocket;

/// Seed a simulation of the pocket against `opponents` random hands on the
/// given board. Input validation happens here, before any trial runs; the
/// returned unit produces outcomes forever until limit() bounds it.
pub fn simulate(
    seed: u64,
    opponents: usize,
    pocket: Pocket,
    board: Board,
) -> anyhow::Result<Monty> {
    anyhow::ensure!(
        (1..=22).contains(&opponents),
        "opponents must be within 1..=22, got {}",
        opponents
    );
    let mine = u64::from(Hand::from(pocket));
    let public = u64::from(Hand::from(board));
    anyhow::ensure!(mine & public == 0, "pocket and board overlap");
    log::debug!("{:<32}{:<8}{:<8}{}", "seeding simulation", pocket, board, opponents);
    Ok(Monty {
        pocket: pocket.cards(),
        common: Hand::from(board),
        hidden: 5 - board.size(),
        opponents,
        deck: Deck::new(seed, Hand::from(mine | public)),
        remaining: usize::MAX,
    })
}

/// A recursively splittable unit of simulation work: the fixed pocket, the
/// board-seeded partial Hand shared by every player of a trial, a private
/// Deck, and a remaining-trial counter. Fan-out happens only through
/// try_split(); siblings share nothing mutable afterwards.
#[derive(Debug, Clone)]
pub struct Monty {
    pocket: (Card, Card),
    common: Hand,
    hidden: usize,
    opponents: usize,
    deck: Deck,
    remaining: usize,
}

impl Monty {
    /// bound the trials this unit and its future splits will run
    pub fn limit(mut self, trials: usize) -> Self {
        self.remaining = trials;
        self
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Hand the second half of the remaining trials, with a split deck, to
    /// a new sibling; keep the first half. Terminal below 2 trials.
    pub fn try_split(&mut self) -> Option<Self> {
        if self.remaining < 2 {
            return None;
        }
        let give = self.remaining / 2;
        self.remaining -= give;
        Some(Self {
            pocket: self.pocket,
            common: self.common,
            hidden: self.hidden,
            opponents: self.opponents,
            deck: self.deck.split(),
            remaining: give,
        })
    }

    /// parallel-reduce `trials` outcomes down to a decimal equity
    pub fn equity(self, trials: usize, precision: u32) -> f64 {
        Equity::parallel(self.limit(trials)).equity(precision)
    }

    /// One deal-out. Reshuffle, complete the board once, evaluate the hero
    /// once, then race each opponent against that value on a copy of the
    /// common Hand; one stronger opponent ends the trial immediately.
    fn trial(&mut self) -> Showdown {
        self.deck.shuffle();
        let mut common = self.common;
        for _ in 0..self.hidden {
            common = common.deal(self.deck.deal());
        }
        let hero = common.deal(self.pocket.0).deal(self.pocket.1).evaluate();
        let mut split = 1usize;
        for _ in 0..self.opponents {
            let villain = self.deck.deal();
            let villain = common.deal(villain).deal(self.deck.deal()).evaluate();
            match villain as i64 - hero as i64 {
                1.. => return Showdown::Loss,
                0 => split += 1,
                _ => {}
            }
        }
        match split {
            1 => Showdown::Win,
            n => Showdown::tie(n),
        }
    }
}

/// exactly one outcome per trial, until the counter is exhausted
impl Iterator for Monty {
    type Item = Showdown;
    fn next(&mut self) -> Option<Self::Item> {
        match self.remaining {
            0 => None,
            _ => {
                self.remaining -= 1;
                Some(self.trial())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pocket(a: &str, b: &str) -> Pocket {
        Pocket::new(Card::from(a), Card::from(b)).unwrap()
    }

    fn royal_board() -> Board {
        Board::river(
            Card::from("Ts"),
            Card::from("Js"),
            Card::from("Qs"),
            Card::from("Ks"),
            Card::from("As"),
        )
        .unwrap()
    }

    #[test]
    fn opponent_boundaries() {
        let pocket = pocket("8c", "9c");
        let board = Board::preflop();
        assert!(simulate(0, 0, pocket, board).is_err());
        assert!(simulate(0, 23, pocket, board).is_err());
        assert!(simulate(0, 1, pocket, board).is_ok());
        assert!(simulate(0, 22, pocket, board).is_ok());
    }

    #[test]
    fn overlap_rejected() {
        let board = Board::flop(Card::from("8c"), Card::from("Tc"), Card::from("Ah")).unwrap();
        assert!(simulate(0, 3, pocket("8c", "9c"), board).is_err());
        assert!(simulate(0, 3, pocket("7c", "9c"), board).is_ok());
    }

    #[test]
    fn one_outcome_per_trial() {
        let board = Board::preflop();
        let monty = simulate(0, 22, pocket("2c", "7d"), board).unwrap();
        assert!(monty.limit(100).count() == 100);
    }

    #[test]
    fn board_plays_for_everyone() {
        // the board is a royal flush, so every trial is an n+1 way chop
        let monty = simulate(42, 2, pocket("2h", "7d"), royal_board()).unwrap();
        for showdown in monty.limit(500) {
            assert!(showdown == Showdown::tie(3));
        }
    }

    #[test]
    fn unbeatable_pocket_never_loses() {
        let board = Board::flop(Card::from("Qs"), Card::from("Js"), Card::from("Ts")).unwrap();
        let monty = simulate(42, 3, pocket("As", "Ks"), board).unwrap();
        for showdown in monty.limit(500) {
            assert!(showdown == Showdown::Win);
        }
    }

    #[test]
    fn splitting_conserves_trials() {
        let monty = simulate(0, 3, pocket("8c", "9c"), Board::preflop()).unwrap();
        let mut keep = monty.limit(101);
        let gave = keep.try_split().unwrap();
        assert!(keep.remaining() + gave.remaining() == 101);
        let mut last = keep.limit(1);
        assert!(last.try_split().is_none());
    }

    #[test]
    fn stronger_hand_never_loses_head_to_head() {
        use crate::Arbitrary;
        for _ in 0..1000 {
            let a = Hand::random();
            let b = Hand::random();
            let (hero, villain) = (a.evaluate(), b.evaluate());
            if hero > villain {
                // the trial's comparison rule, applied deterministically
                let beaten = (villain as i64 - hero as i64) > 0;
                assert!(!beaten);
            }
        }
    }
}
