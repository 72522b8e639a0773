//! The [`Path`] type: a mutable, owned, *unnormalized* filesystem path string.
//!
//! Unlike [`std::path::Path`], this type is a thin byte string with POSIX `/` separators and
//! no opinion about the bytes between them: repeated slashes, `.` and `..` components all
//! survive every operation verbatim. Everything here is pure in-memory string algebra;
//! [`Path::set_absolute`] is the single exception, reading (only) the current working
//! directory.

mod path;
mod tests;

pub use path::*;
