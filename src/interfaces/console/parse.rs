//! Turns raw console lines into validated domain values.

use crate::config::LottoConfig;
use crate::domain::purchase::PurchaseAmount;
use crate::domain::ticket::check_number;
use crate::domain::winning::{BonusNumber, WinningNumbers};
use crate::error::{LottoError, NumberField, Result};

fn parse_integer(raw: &str, field: NumberField) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| LottoError::NumberFormat(field))
}

/// Splits a comma-separated line into trimmed fields.
///
/// Quotes carry no meaning, so every comma separates. Trailing empty fields
/// are dropped, which lets `1,2,3,4,5,6,` through.
fn split_fields(line: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(line.trim().as_bytes());
    let mut fields: Vec<String> = match reader.records().next() {
        Some(record) => record?.iter().map(str::to_owned).collect(),
        None => Vec::new(),
    };
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    Ok(fields)
}

pub fn parse_purchase_amount(line: &str, config: &LottoConfig) -> Result<PurchaseAmount> {
    let amount = parse_integer(line, NumberField::Amount)?;
    PurchaseAmount::new(amount, config)
}

/// Fields are checked one at a time, left to right, so the first bad field
/// decides which error is reported.
pub fn parse_winning_numbers(line: &str, config: &LottoConfig) -> Result<WinningNumbers> {
    let fields = split_fields(line)?;
    if fields.len() != config.numbers_per_ticket {
        return Err(LottoError::InvalidFormat {
            expected: config.numbers_per_ticket,
            actual: fields.len(),
        });
    }

    let mut numbers: Vec<u8> = Vec::with_capacity(fields.len());
    for field in &fields {
        let number = check_number(parse_integer(field, NumberField::LottoNumber)?, config)?;
        if numbers.contains(&number) {
            return Err(LottoError::DuplicateNumber(number));
        }
        numbers.push(number);
    }
    WinningNumbers::new(numbers, config)
}

pub fn parse_bonus_number(line: &str, config: &LottoConfig) -> Result<BonusNumber> {
    let number = parse_integer(line, NumberField::LottoNumber)?;
    BonusNumber::new(number, config)
}
