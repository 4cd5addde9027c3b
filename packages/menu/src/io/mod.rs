//! I/O abstraction for the menu session.
//!
//! This module defines the interface between the session core and its host
//! environment. The core interacts only through the [`IoHost`] trait, so a
//! real terminal and the in-memory test host are interchangeable.

pub mod types;

#[cfg(test)]
pub mod test_host;

pub use types::*;

#[cfg(test)]
pub use test_host::TestHost;

/// Error type for I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(String),
}

/// Host interface for session I/O.
///
/// The session core calls these methods to interact with the user.
pub trait IoHost {
    /// Wait for input to become available.
    ///
    /// This may block (for terminal hosts) or return immediately (for test
    /// hosts). After this returns, `read_input()` should return
    /// `Some(InputLine)` if input is ready, or `read_signal()` should return
    /// `Some(Signal)` if a signal was received.
    fn wait_for_input(&mut self) -> Result<(), IoError>;

    /// Read the next input line, if available.
    fn read_input(&mut self) -> Result<Option<InputLine>, IoError>;

    /// Read any pending signal (Ctrl+C, Ctrl+D).
    fn read_signal(&mut self) -> Result<Option<Signal>, IoError>;

    /// Write output to the user.
    fn write_output(&mut self, output: Output) -> Result<(), IoError>;

    /// Update the prompt configuration.
    ///
    /// The host uses this to render the prompt before the next input.
    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError>;

    /// Clear the screen before redrawing the menu.
    fn clear_screen(&mut self) -> Result<(), IoError> {
        Ok(())
    }

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), IoError> {
        Ok(())
    }
}

/// Outcome of a single prompt round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The user answered with a line of text (possibly empty).
    Line(String),
    /// The user interrupted the prompt (Ctrl+C).
    Interrupted,
    /// The input stream ended (Ctrl+D or closed stdin).
    Eof,
}

/// Show `config` as the next prompt and block for one line of input.
///
/// A host that reports neither input nor a signal has run out of input,
/// which counts as end of stream.
pub fn ask(io: &mut impl IoHost, config: PromptConfig) -> Result<Answer, IoError> {
    io.write_prompt(config)?;
    io.wait_for_input()?;

    if let Some(signal) = io.read_signal()? {
        return Ok(match signal {
            Signal::Interrupt => Answer::Interrupted,
            Signal::Eof => Answer::Eof,
        });
    }

    match io.read_input()? {
        Some(input) => Ok(Answer::Line(input.line)),
        None => Ok(Answer::Eof),
    }
}
