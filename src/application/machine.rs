use crate::config::LottoConfig;
use crate::domain::ports::NumberPicker;
use crate::domain::purchase::PurchaseAmount;
use crate::domain::ticket::Ticket;
use crate::error::Result;
use tracing::debug;

/// Issues tickets from a number source.
pub struct TicketMachine<'a, P: NumberPicker> {
    picker: P,
    config: &'a LottoConfig,
}

impl<'a, P: NumberPicker> TicketMachine<'a, P> {
    pub fn new(picker: P, config: &'a LottoConfig) -> Self {
        Self { picker, config }
    }

    /// Draws one ticket. Fails if the picker hands back an invalid set.
    pub fn issue(&mut self) -> Result<Ticket> {
        let numbers = self.picker.pick_unique(
            self.config.min_number,
            self.config.max_number,
            self.config.numbers_per_ticket,
        );
        Ticket::new(numbers, self.config)
    }

    /// Issues as many tickets as `purchase` pays for, in draw order.
    pub fn issue_for(&mut self, purchase: PurchaseAmount) -> Result<Vec<Ticket>> {
        let count = purchase.ticket_count(self.config);
        let tickets = (0..count)
            .map(|_| self.issue())
            .collect::<Result<Vec<_>>>()?;
        debug!(count, amount = purchase.value(), "issued tickets");
        Ok(tickets)
    }
}
