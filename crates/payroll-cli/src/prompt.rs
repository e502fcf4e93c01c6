//! Line-oriented console prompts
//!
//! Input is consumed one whole line at a time, so a malformed answer never
//! leaves stray tokens behind for the next read. Every prompt returns
//! `Ok(None)` once input is exhausted.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use payroll_core::rules::max_amount;
use payroll_core::EmployeeId;
use rust_decimal::Decimal;

pub struct Console<R, W> {
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

    /// Write a full line
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Write text verbatim (no trailing newline added)
    pub fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    /// Print `label` and read one trimmed line
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read a non-blank name, re-prompting on blank input
    pub fn prompt_name(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            match self.prompt(label)? {
                None => return Ok(None),
                Some(name) if name.is_empty() => self.say("Name cannot be empty.")?,
                Some(name) => return Ok(Some(name)),
            }
        }
    }

    /// Read a decimal within `0..=max_amount()`, re-prompting otherwise
    pub fn prompt_amount(&mut self, label: &str) -> io::Result<Option<Decimal>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match Decimal::from_str(answer.trim_start_matches('$')) {
                Ok(value) if value.is_sign_negative() && !value.is_zero() => {
                    self.say("Amount cannot be negative.")?
                }
                Ok(value) if value > max_amount() => {
                    self.say(&format!("Amount cannot exceed {}.", max_amount()))?
                }
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Read an employee id, re-prompting on non-numeric input
    pub fn prompt_id(&mut self, label: &str) -> io::Result<Option<EmployeeId>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match answer.parse::<i64>() {
                Ok(raw) => return Ok(Some(EmployeeId::new(raw))),
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }
}
