//! Output formatting for purchased tickets and the winning statistics.

use crate::config::LottoConfig;
use crate::domain::purchase::PurchaseAmount;
use crate::domain::rank::PrizeRule;
use crate::domain::tally::ResultTally;
use crate::domain::ticket::Ticket;
use std::io::{self, Write};

pub fn write_tickets<W: Write>(out: &mut W, tickets: &[Ticket]) -> io::Result<()> {
    writeln!(out, "{}개를 구매했습니다.", tickets.len())?;
    for ticket in tickets {
        writeln!(out, "{ticket}")?;
    }
    Ok(())
}

pub fn rank_line(rule: &PrizeRule, count: usize) -> String {
    if rule.bonus_required {
        format!(
            "{}개 일치, 보너스 볼 일치 ({}원) - {}개",
            rule.match_count, rule.prize, count
        )
    } else {
        format!("{}개 일치 ({}원) - {}개", rule.match_count, rule.prize, count)
    }
}

/// Writes one line per prize tier, in table order, followed by the profit rate.
pub fn write_statistics<W: Write>(
    out: &mut W,
    tally: &ResultTally,
    purchase: PurchaseAmount,
    config: &LottoConfig,
) -> io::Result<()> {
    writeln!(out, "당첨 통계")?;
    writeln!(out, "---")?;
    for rule in &config.prize_rules {
        writeln!(out, "{}", rank_line(rule, tally.count(rule.rank)))?;
    }
    writeln!(
        out,
        "총 수익률은 {}%입니다.",
        tally.profit_rate(purchase, config)
    )
}
