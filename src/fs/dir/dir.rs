use std::ffi::{CStr, OsStr};
use std::mem;
use std::os::unix::ffi::OsStrExt;
use std::ptr::NonNull;

use crate::fs::path::Path;
use crate::fs::{SystemError, syscall};

/// An open directory stream. Closed exactly once: by [`close`](Self::close) where the
/// outcome matters, by [`Drop`] on every other exit path.
#[derive(Debug)]
pub(crate) struct Dir {
    handle: NonNull<libc::DIR>,
}

impl Dir {
    pub(crate) fn open(dir_path: &Path) -> Result<Dir, SystemError> {
        let pathname = dir_path.to_c_string()?;
        // SAFETY: pathname is NUL-terminated; opendir copies what it needs.
        match NonNull::new(unsafe { libc::opendir(pathname.as_ptr()) }) {
            None => Err(SystemError::last_os()),
            Some(handle) => Ok(Dir { handle }),
        }
    }

    /// Reads the next entry name, or [`None`] at the natural end of the stream.
    ///
    /// `readdir` signals both end-of-stream and failure by returning null, so errno has to
    /// be cleared beforehand to tell the two apart afterwards.
    pub(crate) fn next_entry(&mut self) -> Result<Option<&OsStr>, SystemError> {
        syscall::clear_err_no();
        // SAFETY: the handle came from opendir and has not been closed.
        let entry = unsafe { libc::readdir(self.handle.as_ptr()) };
        if entry.is_null() {
            return match syscall::err_no() {
                0 => Ok(None),
                code => Err(SystemError(code)),
            };
        }

        // SAFETY: readdir returned non-null, so entry points at a valid dirent whose d_name
        // is NUL-terminated. The borrow is tied to &mut self, which keeps it from outliving
        // the next readdir call on this stream.
        let name = unsafe { CStr::from_ptr((*entry).d_name.as_ptr()) };
        Ok(Some(OsStr::from_bytes(name.to_bytes())))
    }

    /// Closes the stream, reporting the outcome. Consumes self so the handle cannot be used
    /// (or double-closed by [`Drop`]) afterwards.
    pub(crate) fn close(self) -> Result<(), SystemError> {
        let handle = self.handle;
        mem::forget(self);
        // SAFETY: self was forgotten above, so this is the only close of the handle.
        if unsafe { libc::closedir(handle.as_ptr()) } == -1 {
            return Err(SystemError::last_os());
        }
        Ok(())
    }
}

impl Drop for Dir {
    fn drop(&mut self) {
        // A close failure cannot be reported from here; whenever a Dir is dropped rather
        // than closed, an error is already on its way to the caller.
        // SAFETY: drop runs at most once and close() forgets self before closing.
        unsafe { libc::closedir(self.handle.as_ptr()) };
    }
}
