use super::machine::TicketMachine;
use super::scoring::score_tickets;
use crate::config::LottoConfig;
use crate::domain::ports::NumberPicker;
use crate::domain::purchase::PurchaseAmount;
use crate::domain::tally::ResultTally;
use crate::domain::ticket::Ticket;
use crate::error::Result;
use crate::interfaces::console::Console;
use std::io::{BufRead, Write};
use tracing::info;

/// Everything a finished game produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub purchase: PurchaseAmount,
    pub tickets: Vec<Ticket>,
    pub tally: ResultTally,
}

/// Runs one game from purchase to report.
///
/// Purchase, ticket listing, winning numbers, bonus number, scoring, report.
/// Each stage hands its validated result to the next.
pub struct LottoSession<P: NumberPicker> {
    config: LottoConfig,
    picker: P,
}

impl<P: NumberPicker> LottoSession<P> {
    pub fn new(config: LottoConfig, picker: P) -> Self {
        Self { config, picker }
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionOutcome> {
        let config = &self.config;

        let purchase = console.read_purchase_amount(config)?;
        info!(amount = purchase.value(), "purchase accepted");

        let tickets = TicketMachine::new(&mut self.picker, config).issue_for(purchase)?;
        console.print_tickets(&tickets)?;

        let winning = console.read_winning_numbers(config)?;
        let bonus = console.read_bonus_number(config)?;
        info!(winning = ?winning.numbers(), bonus = bonus.value(), "draw entered");

        let tally = score_tickets(&tickets, &winning, bonus, config);
        console.print_report(&tally, purchase, config)?;

        Ok(SessionOutcome {
            purchase,
            tickets,
            tally,
        })
    }
}
