use std::io::{BufRead, Write};

use chrono::NaiveDate;
use log::debug;

use crate::clients::errors::{DateError, Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const PROMPT: &str = "Enter the date you want to check (YYYY-MM-DD): ";

/// Parse a chart date, rejecting anything after `today`.
pub fn parse_chart_date(input: &str, today: NaiveDate) -> std::result::Result<NaiveDate, DateError> {
    let input = input.trim();
    let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| DateError::Malformed(input.to_string()))?;
    if date > today {
        return Err(DateError::InFuture(date));
    }
    Ok(date)
}

/// Where the date prompt stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptState {
    /// Waiting for a line of input
    AwaitingInput,
    /// Holding input that has not been checked yet
    Validating(String),
    /// A usable chart date
    Validated(NaiveDate),
}

impl PromptState {
    /// Hand a line of input to a prompt that is waiting for one.
    #[must_use]
    pub fn receive(self, line: &str) -> Self {
        match self {
            PromptState::AwaitingInput => PromptState::Validating(line.trim().to_string()),
            other => other,
        }
    }

    /// Check the pending input. On rejection the prompt goes back to
    /// [`PromptState::AwaitingInput`].
    pub fn validate(self, today: NaiveDate) -> std::result::Result<Self, DateError> {
        match self {
            PromptState::Validating(input) => parse_chart_date(&input, today).map(PromptState::Validated),
            other => Ok(other),
        }
    }
}

/// Interactive date entry over any reader and writer.
pub struct DatePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> DatePrompt<R, W> {
    /// Prompt reading from `input` and writing to `output`
    pub fn new(input: R, output: W) -> Self {
        DatePrompt { input, output }
    }

    /// Ask until a valid, non-future date is entered.
    pub fn read_date(&mut self, today: NaiveDate) -> Result<NaiveDate> {
        let mut state = PromptState::AwaitingInput;
        loop {
            state = match state {
                PromptState::AwaitingInput => {
                    let line = self.next_line()?;
                    PromptState::AwaitingInput.receive(&line)
                }
                pending @ PromptState::Validating(_) => match pending.validate(today) {
                    Ok(next) => next,
                    Err(err) => {
                        debug!("Rejected date input: {err:?}");
                        writeln!(self.output, "{err}")?;
                        PromptState::AwaitingInput
                    }
                },
                PromptState::Validated(date) => return Ok(date),
            };
        }
    }

    fn next_line(&mut self) -> Result<String> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line)
    }
}
