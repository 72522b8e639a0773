use std::io;

use libc::c_int;

pub(crate) fn err_no() -> c_int {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

/// Resets the thread-local errno to 0, for calls like `readdir` that overload their return
/// value and can only signal failure through errno.
pub(crate) fn clear_err_no() {
    // SAFETY: __errno_location returns a valid pointer into the calling thread's state.
    unsafe { *libc::__errno_location() = 0 };
}
