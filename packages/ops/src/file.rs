//! Whole-file operations.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{Category, OpError, Operation};

fn fail(operation: Operation) -> impl FnOnce(std::io::Error) -> OpError {
    move |source| OpError::new(Category::File, operation, source)
}

/// Create the file at `path` with `content`, overwriting any existing file.
pub fn create(path: impl AsRef<Path>, content: &str) -> Result<(), OpError> {
    fs::write(path, content).map_err(fail(Operation::Creation))
}

/// Read the entire file at `path` as UTF-8 text.
pub fn read(path: impl AsRef<Path>) -> Result<String, OpError> {
    fs::read_to_string(path).map_err(fail(Operation::Reading))
}

/// Delete the file at `path`.
pub fn delete(path: impl AsRef<Path>) -> Result<(), OpError> {
    fs::remove_file(path).map_err(fail(Operation::Deletion))
}

/// Append `content` to the end of the file at `path`, creating it if absent.
pub fn append(path: impl AsRef<Path>, content: &str) -> Result<(), OpError> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(fail(Operation::Writing))
}
