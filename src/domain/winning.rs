use super::ticket::{check_number, validate_numbers};
use crate::config::LottoConfig;
use crate::error::Result;

/// The drawn combination tickets are scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningNumbers(Vec<u8>);

impl WinningNumbers {
    pub fn new(numbers: Vec<u8>, config: &LottoConfig) -> Result<Self> {
        validate_numbers(&numbers, config)?;
        Ok(Self(numbers))
    }

    pub fn numbers(&self) -> &[u8] {
        &self.0
    }
}

/// Only range-checked. It may coincide with one of the winning numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusNumber(u8);

impl BonusNumber {
    pub fn new(number: i64, config: &LottoConfig) -> Result<Self> {
        check_number(number, config).map(Self)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LottoError;

    #[test]
    fn test_winning_numbers_validation() {
        let config = LottoConfig::default();
        assert!(WinningNumbers::new(vec![1, 2, 3, 4, 5, 6], &config).is_ok());
        assert!(matches!(
            WinningNumbers::new(vec![1, 2, 3, 4, 5], &config),
            Err(LottoError::InvalidFormat { .. })
        ));
        assert!(matches!(
            WinningNumbers::new(vec![1, 2, 3, 4, 6, 6], &config),
            Err(LottoError::DuplicateNumber(6))
        ));
    }

    #[test]
    fn test_bonus_number_range() {
        let config = LottoConfig::default();
        assert_eq!(BonusNumber::new(7, &config).unwrap().value(), 7);
        assert_eq!(BonusNumber::new(45, &config).unwrap().value(), 45);
        assert!(matches!(
            BonusNumber::new(50, &config),
            Err(LottoError::InvalidRange { value: 50, .. })
        ));
        assert!(matches!(
            BonusNumber::new(0, &config),
            Err(LottoError::InvalidRange { value: 0, .. })
        ));
    }

    #[test]
    fn test_bonus_may_repeat_a_winning_number() {
        let config = LottoConfig::default();
        let winning = WinningNumbers::new(vec![1, 2, 3, 4, 5, 6], &config).unwrap();
        let bonus = BonusNumber::new(6, &config).unwrap();
        assert!(winning.numbers().contains(&bonus.value()));
    }
}
