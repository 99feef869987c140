use crate::config::LottoConfig;
use crate::error::{LottoError, Result};
use std::fmt;

/// Range-checks a single number typed or drawn for the game.
pub fn check_number(value: i64, config: &LottoConfig) -> Result<u8> {
    if !config.contains(value) {
        return Err(LottoError::InvalidRange {
            value,
            min: config.min_number,
            max: config.max_number,
        });
    }
    u8::try_from(value).map_err(|_| LottoError::InvalidRange {
        value,
        min: config.min_number,
        max: config.max_number,
    })
}

/// Checks that `numbers` is a full set of distinct, in-range lotto numbers.
pub(crate) fn validate_numbers(numbers: &[u8], config: &LottoConfig) -> Result<()> {
    if numbers.len() != config.numbers_per_ticket {
        return Err(LottoError::InvalidFormat {
            expected: config.numbers_per_ticket,
            actual: numbers.len(),
        });
    }
    for (i, &number) in numbers.iter().enumerate() {
        check_number(i64::from(number), config)?;
        if numbers[..i].contains(&number) {
            return Err(LottoError::DuplicateNumber(number));
        }
    }
    Ok(())
}

/// A purchased ticket.
///
/// Numbers are kept in the order they were drawn; `sorted` gives the display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    numbers: Vec<u8>,
}

impl Ticket {
    pub fn new(numbers: Vec<u8>, config: &LottoConfig) -> Result<Self> {
        validate_numbers(&numbers, config)?;
        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    /// How many of `numbers` appear on this ticket.
    pub fn match_count(&self, numbers: &[u8]) -> usize {
        self.numbers.iter().filter(|n| numbers.contains(n)).count()
    }

    pub fn sorted(&self) -> Vec<u8> {
        let mut numbers = self.numbers.clone();
        numbers.sort_unstable();
        numbers
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, number) in self.sorted().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{number}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_keeps_draw_order() {
        let config = LottoConfig::default();
        let ticket = Ticket::new(vec![43, 8, 21, 42, 23, 41], &config).unwrap();
        assert_eq!(ticket.numbers(), &[43, 8, 21, 42, 23, 41]);
        assert_eq!(ticket.sorted(), vec![8, 21, 23, 41, 42, 43]);
    }

    #[test]
    fn test_ticket_display_is_sorted() {
        let config = LottoConfig::default();
        let ticket = Ticket::new(vec![43, 8, 21, 42, 23, 41], &config).unwrap();
        assert_eq!(ticket.to_string(), "[8, 21, 23, 41, 42, 43]");
    }

    #[test]
    fn test_ticket_rejects_wrong_count() {
        let config = LottoConfig::default();
        assert!(matches!(
            Ticket::new(vec![1, 2, 3, 4, 5], &config),
            Err(LottoError::InvalidFormat {
                expected: 6,
                actual: 5
            })
        ));
        assert!(matches!(
            Ticket::new(vec![1, 2, 3, 4, 5, 6, 7], &config),
            Err(LottoError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_ticket_rejects_out_of_range() {
        let config = LottoConfig::default();
        assert!(matches!(
            Ticket::new(vec![0, 2, 3, 4, 5, 6], &config),
            Err(LottoError::InvalidRange { value: 0, .. })
        ));
        assert!(matches!(
            Ticket::new(vec![1, 2, 3, 4, 5, 46], &config),
            Err(LottoError::InvalidRange { value: 46, .. })
        ));
    }

    #[test]
    fn test_ticket_rejects_duplicates() {
        let config = LottoConfig::default();
        assert!(matches!(
            Ticket::new(vec![1, 2, 3, 4, 5, 5], &config),
            Err(LottoError::DuplicateNumber(5))
        ));
    }

    #[test]
    fn test_match_count_and_contains() {
        let config = LottoConfig::default();
        let ticket = Ticket::new(vec![1, 2, 3, 4, 5, 7], &config).unwrap();
        assert_eq!(ticket.match_count(&[1, 2, 3, 4, 5, 6]), 5);
        assert_eq!(ticket.match_count(&[10, 20, 30, 40, 41, 42]), 0);
        assert!(ticket.contains(7));
        assert!(!ticket.contains(6));
    }
}
