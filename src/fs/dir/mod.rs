//! Callback-driven directory traversal.
//!
//! [`File::iterate_directory`](crate::fs::file::File::iterate_directory) enumerates the
//! non-trivial entries of a directory (everything except `.` and `..`), handing each one to a
//! caller-supplied [`DirVisitor`] as a ready-to-query [`File`](crate::fs::file::File). Entry
//! order is whatever the OS returns: not alphabetical, not stable.
//!
//! One child handle is reused for every entry of a traversal: its path is truncated back to
//! the parent text and its stat cache reset between callbacks. The flip side of that
//! optimization is a contract the visitor must honor: the entry handle and its path are valid
//! only for the duration of one call. A visitor that wants to keep either must clone it.

mod dir;
mod iter;
mod visitor;

pub(crate) use dir::*;
pub use visitor::*;
