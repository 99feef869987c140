use super::purchase::PurchaseAmount;
use super::rank::Rank;
use crate::config::LottoConfig;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// Number of tickets per rank. Every rank is present, zero or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTally {
    counts: BTreeMap<Rank, usize>,
}

impl Default for ResultTally {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultTally {
    pub fn new() -> Self {
        Self {
            counts: Rank::ALL.iter().map(|&rank| (rank, 0)).collect(),
        }
    }

    pub fn record(&mut self, rank: Rank) {
        *self.counts.entry(rank).or_insert(0) += 1;
    }

    pub fn count(&self, rank: Rank) -> usize {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, usize)> + '_ {
        self.counts.iter().map(|(&rank, &count)| (rank, count))
    }

    pub fn total_prize(&self, config: &LottoConfig) -> u64 {
        self.iter()
            .map(|(rank, count)| count as u64 * config.prize_of(rank))
            .sum()
    }

    /// Payout as a percentage of `purchase`, rounded half-up to one decimal
    /// place and always carrying exactly one fractional digit.
    pub fn profit_rate(&self, purchase: PurchaseAmount, config: &LottoConfig) -> Decimal {
        let payout = Decimal::from(self.total_prize(config));
        let mut rate = (payout * dec!(100) / Decimal::from(purchase.value()))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        rate.rescale(1);
        rate
    }
}

impl FromIterator<Rank> for ResultTally {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        let mut tally = Self::new();
        for rank in iter {
            tally.record(rank);
        }
        tally
    }
}
