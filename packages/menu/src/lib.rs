//! # fsmenu-menu
//!
//! An interactive menu over basic filesystem operations.
//!
//! The session renders a numbered list of operations, prompts for a
//! selection and per-operation arguments, performs the filesystem action
//! through `fsmenu-ops`, reports the outcome, and loops until the user
//! exits, enters an unrecognized option, or closes the input stream.
//!
//! The session core is host-agnostic: it talks to the terminal only through
//! the [`io::IoHost`] trait, so tests drive whole sessions through an
//! in-memory host.
//!
//! ## Usage
//!
//! ```bash
//! fsmenu
//!
//! # Inside the session:
//! 1 CREATE_FILE
//! 2 READ_FILE
//! 3 DELETE_FILE
//! 4 WRITE_FILE
//! 5 CREATE_FOLDER
//! 6 DELETE_FOLDER
//! 7 LIST_ITEMS
//! 8 EXIT
//!
//! Select an Option:
//! ```

pub mod actions;
pub mod host;
pub mod io;
pub mod menu;
pub mod options;

pub use io::ExitReason;
pub use menu::{run, run_session};
pub use options::MenuOption;
