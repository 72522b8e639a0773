use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::io;

use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

use crate::fs::syscall;

/// An unexpected failure reported by the operating system, carrying the raw error code.
///
/// This is the catch-all for conditions the crate has no better answer for: permission
/// denied, I/O errors, exhausted storage, over-long names, and so on. Conditions with
/// dedicated meaning ([`AlreadyExistsError`], [`NotFoundError`], and the "missing"
/// classification) never surface through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub struct SystemError(#[error(not(source))] pub c_int);

impl SystemError {
    /// Captures the errno of the system call that just failed.
    pub(crate) fn last_os() -> SystemError {
        SystemError(syscall::err_no())
    }

    /// The raw OS error code.
    pub const fn code(&self) -> c_int {
        self.0
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // io::Error renders "<strerror text> (os error <code>)".
        write!(f, "{}", io::Error::from_raw_os_error(self.0))
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("target already exists")]
pub struct AlreadyExistsError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("no such file or directory")]
pub struct NotFoundError;

/// Failures of [`File::mkdir`](crate::fs::file::File::mkdir).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum MkdirError {
    AlreadyExists(AlreadyExistsError),
    System(SystemError),
}

/// Failures of [`File::remove`](crate::fs::file::File::remove).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum RemoveError {
    NotFound(NotFoundError),
    System(SystemError),
}

/// Failures of [`File::iterate_directory`](crate::fs::file::File::iterate_directory).
///
/// A visitor failure is carried verbatim; this crate never reinterprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterateError<E> {
    /// Opening, reading or closing the directory failed, or a child entry could not be
    /// stat'd.
    System(SystemError),
    /// The visitor aborted the walk.
    Visitor(E),
}

impl<E> IterateError<E> {
    /// Returns true for the [`System`](Self::System) variant.
    pub const fn is_system(&self) -> bool {
        matches!(self, IterateError::System(_))
    }

    /// Unwraps a visitor failure, discarding the variant distinction.
    pub fn into_visitor(self) -> Option<E> {
        match self {
            IterateError::System(_) => None,
            IterateError::Visitor(error) => Some(error),
        }
    }
}

impl<E> From<SystemError> for IterateError<E> {
    fn from(value: SystemError) -> Self {
        IterateError::System(value)
    }
}

impl<E: Display> Display for IterateError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IterateError::System(error) => write!(f, "{error}"),
            IterateError::Visitor(error) => write!(f, "{error}"),
        }
    }
}

impl<E: Debug + Display> Error for IterateError<E> {}
