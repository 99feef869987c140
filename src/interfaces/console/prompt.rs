use super::parse::{parse_bonus_number, parse_purchase_amount, parse_winning_numbers};
use super::report;
use crate::config::LottoConfig;
use crate::domain::purchase::PurchaseAmount;
use crate::domain::tally::ResultTally;
use crate::domain::ticket::Ticket;
use crate::domain::winning::{BonusNumber, WinningNumbers};
use crate::error::{LottoError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const PURCHASE_PROMPT: &str = "구입금액을 입력해 주세요.";
const WINNING_PROMPT: &str = "당첨 번호를 입력해 주세요.";
const BONUS_PROMPT: &str = "보너스 번호를 입력해 주세요.";

/// Line-based console over any reader/writer pair.
///
/// Prompts, error messages and the report all go to `output`.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Bytes that are not UTF-8 become replacement characters, which the
    /// parsers then reject like any other typo.
    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(LottoError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Prompts until `parse` accepts a line. Input mistakes are printed and
    /// the prompt is shown again; anything else ends the loop.
    fn prompt_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            writeln!(self.output, "{prompt}")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    debug!(input = line.trim(), error = ?e, "rejected input");
                    writeln!(self.output, "{e}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn read_purchase_amount(&mut self, config: &LottoConfig) -> Result<PurchaseAmount> {
        self.prompt_until_valid(PURCHASE_PROMPT, |line| parse_purchase_amount(line, config))
    }

    pub fn read_winning_numbers(&mut self, config: &LottoConfig) -> Result<WinningNumbers> {
        self.prompt_until_valid(WINNING_PROMPT, |line| parse_winning_numbers(line, config))
    }

    pub fn read_bonus_number(&mut self, config: &LottoConfig) -> Result<BonusNumber> {
        self.prompt_until_valid(BONUS_PROMPT, |line| parse_bonus_number(line, config))
    }

    pub fn print_tickets(&mut self, tickets: &[Ticket]) -> Result<()> {
        report::write_tickets(&mut self.output, tickets)?;
        Ok(())
    }

    pub fn print_report(
        &mut self,
        tally: &ResultTally,
        purchase: PurchaseAmount,
        config: &LottoConfig,
    ) -> Result<()> {
        report::write_statistics(&mut self.output, tally, purchase, config)?;
        self.output.flush()?;
        Ok(())
    }
}
