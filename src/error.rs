use std::fmt;
use thiserror::Error;

/// Which prompt a non-numeric value was typed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberField {
    Amount,
    LottoNumber,
}

impl fmt::Display for NumberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberField::Amount => f.write_str("금액은 숫자로 입력해 주세요."),
            NumberField::LottoNumber => f.write_str("번호는 숫자로 입력해 주세요."),
        }
    }
}

/// Why a purchase amount was refused.
///
/// The console text names the fixed 1,000 won ticket price.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountViolation {
    #[error("구입 금액은 최소 1,000원 이상이어야 합니다.")]
    BelowMinimum { price: u64 },
    #[error("구입 금액은 1,000원 단위여야 합니다.")]
    NotMultiple { price: u64 },
}

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("[ERROR] {0}")]
    NumberFormat(NumberField),
    #[error("[ERROR] {0}")]
    InvalidAmount(AmountViolation),
    #[error("[ERROR] 당첨 번호는 {expected}개여야 합니다.")]
    InvalidFormat { expected: usize, actual: usize },
    #[error("[ERROR] 번호는 {min}부터 {max} 사이의 숫자여야 합니다.")]
    InvalidRange { value: i64, min: u8, max: u8 },
    #[error("[ERROR] 중복된 번호는 입력할 수 없습니다.")]
    DuplicateNumber(u8),
    #[error("input closed before a valid value was entered")]
    InputClosed,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LottoError {
    /// Errors caused by what the user typed; the prompt asks again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LottoError::NumberFormat(_)
                | LottoError::InvalidAmount(_)
                | LottoError::InvalidFormat { .. }
                | LottoError::InvalidRange { .. }
                | LottoError::DuplicateNumber(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LottoError>;
