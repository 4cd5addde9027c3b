//! Directory listing entries.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The entry's own name, without any leading directory.
    pub name: String,
    pub kind: EntryKind,
    /// Absolute path, resolved against the listed directory.
    pub path: PathBuf,
}

/// Whether an entry is a file or a folder.
///
/// Anything that is not a directory (regular files, symlinks, devices)
/// counts as a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    /// Marker shown in front of the entry name in listings.
    pub fn marker(self) -> &'static str {
        match self {
            EntryKind::File => "📄",
            EntryKind::Folder => "📁",
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.marker(), self.name)
    }
}
