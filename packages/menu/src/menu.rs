//! Platform-independent menu session core.
//!
//! Drives the select / act / continue loop over an [`IoHost`]. The loop ends
//! when the user picks the exit option, enters an unrecognized option, or
//! the input stream ends.

use crate::actions::{self, Flow};
use crate::host::TerminalHost;
use crate::io::{ask, Answer, ExitReason, IoError, IoHost, Output, PromptConfig};
use crate::options::MenuOption;

/// Run the interactive menu on the terminal host until the session ends.
pub fn run() -> Result<ExitReason, IoError> {
    let mut host = TerminalHost::new();
    run_session(&mut host)
}

/// Drive one whole menu session over the given I/O host.
pub fn run_session(io: &mut impl IoHost) -> Result<ExitReason, IoError> {
    loop {
        io.clear_screen()?;
        render_menu(io)?;

        let selection = match ask(io, PromptConfig::ask("Select an Option: "))? {
            Answer::Line(line) => line,
            Answer::Interrupted => continue,
            Answer::Eof => return Ok(ExitReason::Eof),
        };

        let flow = match MenuOption::from_selection(&selection) {
            Some(MenuOption::Exit) => {
                io.write_output(Output::warning("Exiting..."))?;
                io.flush()?;
                return Ok(ExitReason::UserExit);
            }
            Some(option) => actions::run(option, io)?,
            None => {
                io.write_output(Output::warning("Invalid option."))?;
                io.flush()?;
                return Ok(ExitReason::InvalidOption);
            }
        };

        match flow {
            Flow::Continue => {}
            Flow::Interrupted => continue,
            Flow::Eof => return Ok(ExitReason::Eof),
        }

        if let Answer::Eof = ask(io, PromptConfig::muted("Press enter to continue..."))? {
            return Ok(ExitReason::Eof);
        }
        io.flush()?;
    }
}

fn render_menu(io: &mut impl IoHost) -> Result<(), IoError> {
    for (index, option) in MenuOption::ALL.iter().enumerate() {
        io.write_output(Output::menu(format!("{} {}", index + 1, option.label())))?;
    }
    io.write_output(Output::normal(""))?;
    Ok(())
}
