//! Error type shared by all filesystem operations.

use std::fmt;
use std::io;

/// Which kind of target an operation acted on.
///
/// Selects the wording of success and failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    File,
    Folder,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::File => write!(f, "File"),
            Category::Folder => write!(f, "Folder"),
        }
    }
}

/// The logical operation that was being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Creation,
    Reading,
    Deletion,
    Writing,
    Listing,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Creation => write!(f, "creation"),
            Operation::Reading => write!(f, "reading"),
            Operation::Deletion => write!(f, "deletion"),
            Operation::Writing => write!(f, "writing"),
            Operation::Listing => write!(f, "listing"),
        }
    }
}

/// A failed filesystem operation.
///
/// The `Display` output is the user-facing failure message body, e.g.
/// `File creation failed: permission denied`.
#[derive(Debug, thiserror::Error)]
#[error("{category} {operation} failed: {source}")]
pub struct OpError {
    pub category: Category,
    pub operation: Operation,
    #[source]
    pub source: io::Error,
}

impl OpError {
    pub fn new(category: Category, operation: Operation, source: io::Error) -> Self {
        Self {
            category,
            operation,
            source,
        }
    }
}
