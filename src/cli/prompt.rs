//! Terminal prompt.
//!
//! [`Prompt`] backed by dialoguer. Hidden input falls back to reading a
//! line from stdin when stdin is piped; an empty line or EOF is rejected.

use std::io::{self, IsTerminal, Read};

use dialoguer::{Confirm, Input, MultiSelect, Password};
use tracing::debug;

use crate::cli::output;
use crate::core::prompt::Prompt;
use crate::error::{Result, ValidationError};

/// Interactive prompt on the controlling terminal.
pub struct Terminal {
    assume_yes: bool,
}

impl Terminal {
    /// `assume_yes` answers every confirmation with yes without asking.
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for Terminal {
    fn present(&self, heading: &str, rows: &[String]) {
        output::blank();
        output::header(heading);
        output::rule();
        for row in rows {
            output::list_item(row);
        }
        output::blank();
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        if self.assume_yes {
            debug!(message, "confirmed by --yes");
            return Ok(true);
        }

        Ok(Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?)
    }

    fn select_many(&self, message: &str, options: &[String]) -> Result<Vec<String>> {
        let picked = MultiSelect::new()
            .with_prompt(message)
            .items(options)
            .interact()?;

        Ok(picked.into_iter().map(|i| options[i].clone()).collect())
    }

    fn read_line(&self, message: &str) -> Result<String> {
        let line: String = Input::new().with_prompt(message).interact_text()?;
        Ok(line.trim().to_string())
    }

    fn read_secret(&self, message: &str) -> Result<String> {
        if !io::stdin().is_terminal() {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            let value = input.trim_end_matches(['\r', '\n']);
            if value.is_empty() {
                return Err(ValidationError::EmptyValue(message.to_string()).into());
            }
            return Ok(value.to_string());
        }

        Ok(Password::new().with_prompt(message).interact()?)
    }

    fn read_all(&self, message: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            eprintln!("{}", message);
        }

        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        Ok(input)
    }
}
