//! I/O types for the menu session.
//!
//! These types define the interface between the session core and its host
//! environment.

use serde::{Deserialize, Serialize};

/// A line of input from the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLine {
    pub line: String,
}

/// A signal from the host (Ctrl+C, Ctrl+D, closed input stream).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "lowercase")]
pub enum Signal {
    /// User pressed Ctrl+C (interrupt).
    Interrupt,
    /// User pressed Ctrl+D or the input stream ended.
    Eof,
}

/// Output to be written by the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub text: String,
    #[serde(default)]
    pub style: OutputStyle,
}

impl Output {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Normal,
        }
    }

    pub fn menu(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Menu,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Error,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Warning,
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Notice,
        }
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Content,
        }
    }
}

/// Style hint for output rendering.
///
/// Styling is cosmetic; hosts may render all of these the same way.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Plain output.
    #[default]
    Normal,
    /// A numbered menu row.
    Menu,
    /// Successful operation result (host may render green).
    Success,
    /// Operation failure (host may add a red prefix).
    Error,
    /// Session-ending notice such as the exit or invalid-option message.
    Warning,
    /// Safe no-op notice such as a declined confirmation.
    Notice,
    /// File contents echoed back to the user.
    Content,
}

/// Prompt configuration sent from the session core to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    /// The question text, shown verbatim before the cursor.
    pub text: String,
    #[serde(default)]
    pub style: PromptStyle,
}

impl PromptConfig {
    /// A question prompt.
    pub fn ask(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: PromptStyle::Ask,
        }
    }

    /// A low-emphasis prompt, e.g. "press enter to continue".
    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: PromptStyle::Muted,
        }
    }
}

/// Style hint for prompt rendering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    #[default]
    Ask,
    Muted,
}

/// Reason the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// User selected the exit option.
    UserExit,
    /// User entered an unrecognized option.
    InvalidOption,
    /// User pressed Ctrl+D or the input stream ended.
    Eof,
}
