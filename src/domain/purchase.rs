use crate::config::LottoConfig;
use crate::error::{AmountViolation, LottoError, Result};

/// Money spent on tickets, always a positive multiple of the ticket price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseAmount(u64);

impl PurchaseAmount {
    /// Accepts a signed value so that zero and negative input are reported
    /// as falling below the minimum rather than as unreadable.
    pub fn new(amount: i64, config: &LottoConfig) -> Result<Self> {
        let price = config.ticket_price;
        let amount = match u64::try_from(amount) {
            Ok(amount) if amount >= price => amount,
            _ => {
                return Err(LottoError::InvalidAmount(AmountViolation::BelowMinimum {
                    price,
                }));
            }
        };
        if amount % price != 0 {
            return Err(LottoError::InvalidAmount(AmountViolation::NotMultiple {
                price,
            }));
        }
        Ok(Self(amount))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn ticket_count(&self, config: &LottoConfig) -> usize {
        (self.0 / config.ticket_price) as usize
    }
}
