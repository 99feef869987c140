/// Prize tier a ticket lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    None,
}

impl Rank {
    pub const ALL: [Rank; 6] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::None,
    ];
}

/// One row of the prize table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrizeRule {
    pub rank: Rank,
    pub match_count: usize,
    /// The ticket must also hold the bonus number.
    pub bonus_required: bool,
    pub prize: u64,
}

impl PrizeRule {
    pub const fn new(rank: Rank, match_count: usize, bonus_required: bool, prize: u64) -> Self {
        Self {
            rank,
            match_count,
            bonus_required,
            prize,
        }
    }

    pub fn matches(&self, match_count: usize, bonus_match: bool) -> bool {
        self.match_count == match_count && (!self.bonus_required || bonus_match)
    }
}

/// Resolves a ticket's rank by walking `rules` in order.
///
/// Rule order is significant: a five-match ticket holding the bonus number
/// satisfies both the bonus rule and the plain five-match rule, and the one
/// listed first wins.
pub fn classify(rules: &[PrizeRule], match_count: usize, bonus_match: bool) -> Rank {
    rules
        .iter()
        .find(|rule| rule.matches(match_count, bonus_match))
        .map_or(Rank::None, |rule| rule.rank)
}
