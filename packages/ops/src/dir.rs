//! Folder operations and directory listings.

use std::fs;
use std::path::Path;

use crate::entry::{Entry, EntryKind};
use crate::error::{Category, OpError, Operation};

fn fail(operation: Operation) -> impl FnOnce(std::io::Error) -> OpError {
    move |source| OpError::new(Category::Folder, operation, source)
}

/// Create the folder at `path`, including any missing parents.
///
/// Succeeds without error if the folder already exists.
pub fn create(path: impl AsRef<Path>) -> Result<(), OpError> {
    fs::create_dir_all(path).map_err(fail(Operation::Creation))
}

/// Recursively delete the folder at `path` and everything under it.
pub fn delete(path: impl AsRef<Path>) -> Result<(), OpError> {
    fs::remove_dir_all(path).map_err(fail(Operation::Deletion))
}

/// List the direct children of the directory at `path`, non-recursively.
///
/// Entry paths are resolved against the canonicalized listing directory.
pub fn list(path: impl AsRef<Path>) -> Result<Vec<Entry>, OpError> {
    let path = path.as_ref();
    let resolved = fs::canonicalize(path).map_err(fail(Operation::Listing))?;

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(path).map_err(fail(Operation::Listing))? {
        let dir_entry = dir_entry.map_err(fail(Operation::Listing))?;
        let file_type = dir_entry.file_type().map_err(fail(Operation::Listing))?;
        let kind = if file_type.is_dir() {
            EntryKind::Folder
        } else {
            EntryKind::File
        };
        entries.push(Entry {
            name: dir_entry.file_name().to_string_lossy().into_owned(),
            kind,
            path: resolved.join(dir_entry.file_name()),
        });
    }

    Ok(entries)
}
