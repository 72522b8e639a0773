use std::ffi::{CString, OsStr};
use std::fmt::{self, Debug, Display, Formatter};
use std::os::unix::ffi::OsStrExt;

use crate::fs::SystemError;

/// A mutable, owned filesystem path, stored as a plain byte string.
///
/// The buffer is never normalized: `"a//b"`, `"a/./b"` and `"a/../a/b"` are three different
/// `Path`s as far as this type is concerned, and stay that way through every operation. The
/// derivation operations ([`join`](Self::join), [`basename`](Self::basename),
/// [`dirname`](Self::dirname), [`absolute`](Self::absolute)) always return a new,
/// independently-owned `Path`; the `set_*` family mutates in place.
///
/// `basename` and `dirname` work on the in-memory text only. They never touch the filesystem
/// and never resolve symlinks.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Path {
    buf: Vec<u8>,
}

impl Path {
    /// Creates a path holding a copy of `source`.
    pub fn new<S: AsRef<OsStr>>(source: S) -> Path {
        Path {
            buf: source.as_ref().as_bytes().to_vec(),
        }
    }

    /// Creates an empty path.
    pub const fn empty() -> Path {
        Path { buf: Vec::new() }
    }

    /// Borrows the current text. Zero-copy.
    pub fn as_os_str(&self) -> &OsStr {
        OsStr::from_bytes(&self.buf)
    }

    /// Borrows the current text as raw bytes. Zero-copy.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the length of the path text in bytes.
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the path holds no text at all.
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Shortens the path text to `len` bytes. No-op if the text is already that short.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Empties the path text, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Rewrites the path to `cwd + "/" + self`, reading the process current working
    /// directory.
    ///
    /// A path that already ends in `/` is taken to be absolute already and left untouched.
    /// That sentinel applies to *any* trailing separator, including on relative text like
    /// `"foo/"` (historical behavior, kept for compatibility). No `.`/`..` normalization
    /// happens either way.
    ///
    /// Fails with [`SystemError`] if the working directory cannot be read (it may have been
    /// removed, or exceed the system path-length limit).
    pub fn set_absolute(&mut self) -> Result<(), SystemError> {
        if self.buf.last() == Some(&b'/') {
            return Ok(());
        }

        let cwd = cwd()?;
        let mut buf = Vec::with_capacity(cwd.len() + 1 + self.buf.len());
        buf.extend_from_slice(&cwd);
        buf.push(b'/');
        buf.extend_from_slice(&self.buf);
        self.buf = buf;
        Ok(())
    }

    /// Clones, then [`set_absolute`](Self::set_absolute)s the clone.
    pub fn absolute(&self) -> Result<Path, SystemError> {
        let mut path = self.clone();
        path.set_absolute()?;
        Ok(path)
    }

    /// Concatenates `more` onto the path.
    ///
    /// Empty `more` is a true no-op (not even a separator is added). `more` starting with `/`
    /// is absolute and *replaces* the whole path. Anything else is appended, with a `/`
    /// inserted only if the current text is non-empty and does not already end in one.
    pub fn append<S: AsRef<OsStr>>(&mut self, more: S) {
        let more = more.as_ref().as_bytes();
        if more.is_empty() {
            return;
        }

        if more[0] == b'/' {
            self.buf.clear();
            self.buf.extend_from_slice(more);
        } else {
            if self.buf.last().is_some_and(|last| *last != b'/') {
                self.buf.push(b'/');
            }
            self.buf.extend_from_slice(more);
        }
    }

    /// Clones, then [`append`](Self::append)s `more` to the clone.
    ///
    /// `Path` itself is `AsRef<OsStr>`, so joining one path onto another needs no separate
    /// entry point.
    pub fn join<S: AsRef<OsStr>>(&self, more: S) -> Path {
        let mut path = self.clone();
        path.append(more);
        path
    }

    /// Truncates to the text after the last `/`. No-op if there is no separator.
    pub fn set_basename(&mut self) {
        if let Some(last_slash) = self.buf.iter().rposition(|byte| *byte == b'/') {
            self.buf.drain(..=last_slash);
        }
    }

    /// Clones, then [`set_basename`](Self::set_basename)s the clone.
    pub fn basename(&self) -> Path {
        let mut path = self.clone();
        path.set_basename();
        path
    }

    /// Truncates to the text before the last `/`.
    ///
    /// With no separator present the result is the empty path, meaning "no parent": the
    /// filesystem root if the original was absolute, the current directory if it was
    /// relative. The caller gets to pick the interpretation.
    pub fn set_dirname(&mut self) {
        match self.buf.iter().rposition(|byte| *byte == b'/') {
            Some(last_slash) => self.buf.truncate(last_slash),
            None => self.buf.clear(),
        }
    }

    /// Clones, then [`set_dirname`](Self::set_dirname)s the clone.
    pub fn dirname(&self) -> Path {
        let mut path = self.clone();
        path.set_dirname();
        path
    }

    /// Copies the text into a NUL-terminated string for syscall use.
    ///
    /// A path with an interior NUL byte cannot name anything on a POSIX system, so that case
    /// fails up front rather than silently truncating at the NUL.
    pub(crate) fn to_c_string(&self) -> Result<CString, SystemError> {
        CString::new(self.buf.clone()).map_err(|_| SystemError(libc::EINVAL))
    }
}

fn cwd() -> Result<Vec<u8>, SystemError> {
    let mut buf = [0u8; libc::PATH_MAX as usize];
    // SAFETY: the buffer outlives the call and its real size is passed alongside it.
    if unsafe { libc::getcwd(buf.as_mut_ptr().cast(), buf.len()) }.is_null() {
        return Err(SystemError::last_os());
    }
    let len = buf.iter().position(|byte| *byte == 0).unwrap_or(buf.len());
    Ok(buf[..len].to_vec())
}

impl AsRef<OsStr> for Path {
    fn as_ref(&self) -> &OsStr {
        self.as_os_str()
    }
}

impl From<&OsStr> for Path {
    fn from(value: &OsStr) -> Path {
        Path::new(value)
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Path {
        Path::new(value)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_os_str().to_string_lossy())
    }
}

impl Debug for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.as_os_str()).finish()
    }
}
