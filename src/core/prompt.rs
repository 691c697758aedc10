//! User interaction capability.
//!
//! The reconciliation flow asks for confirmations and selections through
//! this trait so it can be driven by a terminal or a scripted double.

use crate::error::Result;

/// Blocking, single-shot interactions with the user.
pub trait Prompt {
    /// Show a heading followed by rows the next question is about.
    fn present(&self, heading: &str, rows: &[String]);

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns `Error::Prompt` if the terminal interaction fails.
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Let the user pick any number of `options`.
    ///
    /// # Returns
    ///
    /// The chosen options, in display order.
    ///
    /// # Errors
    ///
    /// Returns `Error::Prompt` if the terminal interaction fails.
    fn select_many(&self, message: &str, options: &[String]) -> Result<Vec<String>>;

    /// Read one line of visible input.
    ///
    /// # Errors
    ///
    /// Returns `Error::Prompt` if the terminal interaction fails.
    fn read_line(&self, message: &str) -> Result<String>;

    /// Read one line of hidden input.
    ///
    /// # Errors
    ///
    /// Returns `Error::Prompt` if the terminal interaction fails.
    fn read_secret(&self, message: &str) -> Result<String>;

    /// Read everything until end of input.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails.
    fn read_all(&self, message: &str) -> Result<String>;
}
