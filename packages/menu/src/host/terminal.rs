//! Terminal host implementation using Reedline.

use std::borrow::Cow;
use std::io::{self, Write};

use nu_ansi_term::{Color, Style};
use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline,
    Signal as ReedlineSignal,
};

use crate::io::{
    InputLine, IoError, IoHost, Output, OutputStyle, PromptConfig, PromptStyle, Signal,
};

/// Terminal host using Reedline for line input.
pub struct TerminalHost {
    line_editor: Reedline,
    pending_input: Option<InputLine>,
    pending_signal: Option<Signal>,
    current_prompt: PromptConfig,
}

impl TerminalHost {
    /// Create a new terminal host.
    pub fn new() -> Self {
        Self {
            line_editor: Reedline::create(),
            pending_input: None,
            pending_signal: None,
            current_prompt: PromptConfig::default(),
        }
    }
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl IoHost for TerminalHost {
    fn wait_for_input(&mut self) -> Result<(), IoError> {
        let prompt = TerminalPrompt::from_config(&self.current_prompt);

        match self.line_editor.read_line(&prompt) {
            Ok(ReedlineSignal::Success(line)) => {
                self.pending_input = Some(InputLine { line });
            }
            Ok(ReedlineSignal::CtrlC) => {
                self.pending_signal = Some(Signal::Interrupt);
            }
            Ok(ReedlineSignal::CtrlD) => {
                self.pending_signal = Some(Signal::Eof);
            }
            Err(e) => {
                return Err(IoError::Io(format!("Reedline error: {}", e)));
            }
        }

        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<InputLine>, IoError> {
        Ok(self.pending_input.take())
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        Ok(self.pending_signal.take())
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        let styled = match output.style {
            OutputStyle::Normal => output.text,
            OutputStyle::Menu => render_menu_row(&output.text),
            OutputStyle::Success => Color::Green.paint(&output.text).to_string(),
            OutputStyle::Error => format!(
                "{} {}",
                Color::Red.bold().paint("Error:"),
                Color::Red.paint(&output.text)
            ),
            OutputStyle::Warning => Color::Red.paint(&output.text).to_string(),
            OutputStyle::Notice => Color::Blue.paint(&output.text).to_string(),
            OutputStyle::Content => Style::new()
                .on(Color::White)
                .fg(Color::Black)
                .paint(&output.text)
                .to_string(),
        };
        println!("{}", styled);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.current_prompt = config;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), IoError> {
        print!("\x1B[2J\x1B[H");
        io::stdout().flush().map_err(|e| IoError::Io(e.to_string()))
    }

    fn flush(&mut self) -> Result<(), IoError> {
        io::stdout().flush().map_err(|e| IoError::Io(e.to_string()))
    }
}

/// Paint a menu row: blue index, magenta label.
fn render_menu_row(text: &str) -> String {
    match text.split_once(' ') {
        Some((index, label)) => format!(
            "{} {}",
            Color::Blue.paint(index),
            Color::Magenta.paint(label)
        ),
        None => Color::Blue.paint(text).to_string(),
    }
}

/// Prompt implementation for the terminal.
struct TerminalPrompt {
    text: String,
    style: PromptStyle,
}

impl TerminalPrompt {
    fn from_config(config: &PromptConfig) -> Self {
        Self {
            text: config.text.clone(),
            style: config.style,
        }
    }
}

impl Prompt for TerminalPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        let painted = match self.style {
            PromptStyle::Ask => Color::Green.paint(&self.text),
            PromptStyle::Muted => Style::new().fg(Color::LightGray).dimmed().paint(&self.text),
        };
        Cow::Owned(painted.to_string())
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        // The question text is the whole prompt.
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(": ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}
