//! Game constants.
//!
//! Everything the validation, generation and scoring stages need to know about
//! the game lives in `LottoConfig`, which is passed to them explicitly.

use crate::domain::rank::{PrizeRule, Rank};

pub const TICKET_PRICE: u64 = 1_000;
pub const NUMBERS_PER_TICKET: usize = 6;
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LottoConfig {
    /// Price of a single ticket; purchases must be a positive multiple of it.
    pub ticket_price: u64,
    /// How many distinct numbers make up a ticket or a winning set.
    pub numbers_per_ticket: usize,
    pub min_number: u8,
    pub max_number: u8,
    /// Evaluated top to bottom; the first matching rule decides the rank.
    pub prize_rules: Vec<PrizeRule>,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            ticket_price: TICKET_PRICE,
            numbers_per_ticket: NUMBERS_PER_TICKET,
            min_number: MIN_NUMBER,
            max_number: MAX_NUMBER,
            prize_rules: vec![
                PrizeRule::new(Rank::First, 6, false, 2_000_000_000),
                // Must precede Third: both need five matches.
                PrizeRule::new(Rank::Second, 5, true, 30_000_000),
                PrizeRule::new(Rank::Third, 5, false, 1_500_000),
                PrizeRule::new(Rank::Fourth, 4, false, 50_000),
                PrizeRule::new(Rank::Fifth, 3, false, 5_000),
            ],
        }
    }
}

impl LottoConfig {
    pub fn contains(&self, number: i64) -> bool {
        (i64::from(self.min_number)..=i64::from(self.max_number)).contains(&number)
    }

    pub fn prize_of(&self, rank: Rank) -> u64 {
        self.prize_rules
            .iter()
            .find(|rule| rule.rank == rank)
            .map_or(0, |rule| rule.prize)
    }
}
