use crate::config::LottoConfig;
use crate::domain::rank::{Rank, classify};
use crate::domain::tally::ResultTally;
use crate::domain::ticket::Ticket;
use crate::domain::winning::{BonusNumber, WinningNumbers};
use tracing::debug;

/// Ranks a single ticket against the draw.
pub fn rank_ticket(
    ticket: &Ticket,
    winning: &WinningNumbers,
    bonus: BonusNumber,
    config: &LottoConfig,
) -> Rank {
    let match_count = ticket.match_count(winning.numbers());
    let bonus_match = ticket.contains(bonus.value());
    classify(&config.prize_rules, match_count, bonus_match)
}

/// Ranks every ticket and counts the results per rank.
pub fn score_tickets(
    tickets: &[Ticket],
    winning: &WinningNumbers,
    bonus: BonusNumber,
    config: &LottoConfig,
) -> ResultTally {
    let tally: ResultTally = tickets
        .iter()
        .map(|ticket| rank_ticket(ticket, winning, bonus, config))
        .collect();
    debug!(
        tickets = tickets.len(),
        winners = tickets.len() - tally.count(Rank::None),
        "scored tickets"
    );
    tally
}
