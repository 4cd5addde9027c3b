//! Per-option prompt sequences and outcome reporting.
//!
//! Each action prompts for its arguments, performs exactly one filesystem
//! call through `fsmenu-ops`, and reports the outcome through the host.
//! Filesystem failures never escape an action; they are written as error
//! output and the session carries on.

use fsmenu_ops::{dir, file, Category, OpError, Operation};

use crate::io::{ask, Answer, IoError, IoHost, Output, PromptConfig};
use crate::options::MenuOption;

/// An action's effect on the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Action finished (success or handled failure); continue to the
    /// "press enter" step.
    Continue,
    /// The user interrupted a prompt; go straight back to the menu.
    Interrupted,
    /// The input stream ended; end the session.
    Eof,
}

/// Prompt for a line, bailing out of the action on interrupt or EOF.
macro_rules! ask_line {
    ($io:expr, $text:expr) => {
        match ask($io, PromptConfig::ask($text))? {
            Answer::Line(line) => line,
            Answer::Interrupted => return Ok(Flow::Interrupted),
            Answer::Eof => return Ok(Flow::Eof),
        }
    };
}

/// Run the prompt sequence for `option`.
pub fn run(option: MenuOption, io: &mut impl IoHost) -> Result<Flow, IoError> {
    match option {
        MenuOption::CreateFile => create_file(io),
        MenuOption::ReadFile => read_file(io),
        MenuOption::DeleteFile => delete_file(io),
        MenuOption::WriteFile => write_file(io),
        MenuOption::CreateFolder => create_folder(io),
        MenuOption::DeleteFolder => delete_folder(io),
        MenuOption::ListItems => list_items(io),
        // Exit never reaches the action layer; the session loop handles it.
        MenuOption::Exit => Ok(Flow::Continue),
    }
}

fn create_file(io: &mut impl IoHost) -> Result<Flow, IoError> {
    let path = ask_line!(io, "Enter the filepath: ");
    let wants_content = ask_line!(io, "Do you want initial content? (y/n): ");
    let content = if confirmed(&wants_content) {
        ask_line!(io, "Enter the content: ")
    } else {
        String::new()
    };

    report(
        io,
        Category::File,
        Operation::Creation,
        file::create(&path, &content),
    )?;
    Ok(Flow::Continue)
}

fn read_file(io: &mut impl IoHost) -> Result<Flow, IoError> {
    let path = ask_line!(io, "Enter the filepath: ");

    match file::read(&path) {
        Ok(content) => {
            io.write_output(Output::success("Fetched your file content ✅"))?;
            io.write_output(Output::content(content))?;
            io.write_output(Output::success(success_message(
                Category::File,
                Operation::Reading,
            )))?;
        }
        Err(err) => io.write_output(Output::error(err.to_string()))?,
    }
    Ok(Flow::Continue)
}

fn delete_file(io: &mut impl IoHost) -> Result<Flow, IoError> {
    let path = ask_line!(io, "Enter the filepath: ");
    let confirm = ask_line!(io, "Confirm delete? (y/n): ");

    if confirmed(&confirm) {
        report(io, Category::File, Operation::Deletion, file::delete(&path))?;
    } else {
        io.write_output(Output::notice("Action stopped."))?;
    }
    Ok(Flow::Continue)
}

fn write_file(io: &mut impl IoHost) -> Result<Flow, IoError> {
    let path = ask_line!(io, "Enter the filepath: ");
    let content = ask_line!(io, "Enter the content: ");

    report(
        io,
        Category::File,
        Operation::Writing,
        file::append(&path, &content),
    )?;
    Ok(Flow::Continue)
}

fn create_folder(io: &mut impl IoHost) -> Result<Flow, IoError> {
    let path = ask_line!(io, "Enter the folder path: ");

    report(io, Category::Folder, Operation::Creation, dir::create(&path))?;
    Ok(Flow::Continue)
}

fn delete_folder(io: &mut impl IoHost) -> Result<Flow, IoError> {
    let path = ask_line!(io, "Enter the folder path: ");
    let confirm = ask_line!(io, "Confirm delete? (y/n): ");

    if confirmed(&confirm) {
        report(io, Category::Folder, Operation::Deletion, dir::delete(&path))?;
    } else {
        io.write_output(Output::notice("Action stopped."))?;
    }
    Ok(Flow::Continue)
}

fn list_items(io: &mut impl IoHost) -> Result<Flow, IoError> {
    let input = ask_line!(io, "Enter the list path: (current path) ");
    let path = if input.is_empty() { "./" } else { input.as_str() };

    match dir::list(path) {
        Ok(entries) => {
            for entry in &entries {
                io.write_output(Output::normal(entry.to_string()))?;
            }
        }
        Err(err) => io.write_output(Output::error(err.to_string()))?,
    }
    Ok(Flow::Continue)
}

/// An affirmative confirmation is a case-insensitive `y`; anything else
/// declines.
fn confirmed(input: &str) -> bool {
    input.eq_ignore_ascii_case("y")
}

fn success_message(category: Category, operation: Operation) -> String {
    format!("{} {} successful ✅", category, operation)
}

/// Write the success or failure message for a completed operation.
fn report(
    io: &mut impl IoHost,
    category: Category,
    operation: Operation,
    result: Result<(), OpError>,
) -> Result<(), IoError> {
    match result {
        Ok(()) => io.write_output(Output::success(success_message(category, operation))),
        Err(err) => io.write_output(Output::error(err.to_string())),
    }
}
