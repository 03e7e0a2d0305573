//! File operations engine for dirscope.
//!
//! This crate provides the synchronous copy, move, delete and create
//! primitives, and the [`Dispatcher`] that applies a [`FileOperation`] to the
//! current selection and reports a single [`Outcome`].
//!
//! # Example
//!
//! ```rust,no_run
//! use dirscope_core::Selection;
//! use dirscope_ops::{Dispatcher, FileOperation};
//!
//! let dispatcher = Dispatcher::new(".");
//! let mut selection = Selection::new();
//! selection.select("notes.txt");
//!
//! let outcome = dispatcher.dispatch(FileOperation::Copy, &mut selection);
//! println!("{}", outcome.notice.message);
//! assert!(selection.is_empty());
//! ```

mod conflict;
mod copy;
mod create;
mod delete;
mod dispatcher;
mod error;
mod move_op;
mod operation;
mod outcome;

pub use conflict::{ensure_vacant, is_occupied, sibling_target};
pub use copy::copy_entry;
pub use create::{create_directory, create_file};
pub use delete::delete_entry;
pub use dispatcher::Dispatcher;
pub use error::{OpsError, OpsResult};
pub use move_op::move_entry;
pub use operation::{
    COPY_SUFFIX, FileOperation, MOVE_SUFFIX, NEW_DIRECTORY_NAME, NEW_FILE_NAME,
};
pub use outcome::{Notice, Outcome, Severity};
