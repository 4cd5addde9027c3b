//! # fsmenu-ops
//!
//! The filesystem operation layer behind the fsmenu interactive menu.
//!
//! Every operation is a single call against the real filesystem; failures
//! come back as [`OpError`], labeled with the operation category (file or
//! folder) and the logical operation, so the interactive layer can report
//! them without inspecting the underlying I/O error.
//!
//! ## Operations
//!
//! ```text
//! file::create    create or overwrite a file with given content
//! file::read      read a whole file as UTF-8 text
//! file::delete    remove a file
//! file::append    append to a file, creating it if absent
//! dir::create     create a directory tree (idempotent)
//! dir::delete     remove a directory tree recursively
//! dir::list       enumerate the direct children of a directory
//! ```

pub mod dir;
pub mod entry;
pub mod error;
pub mod file;

pub use entry::{Entry, EntryKind};
pub use error::{Category, OpError, Operation};
