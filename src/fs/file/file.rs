use std::ffi::OsStr;
use std::mem::MaybeUninit;

use libc::mode_t;
use log::debug;

use super::{MkdirOptions, RemoveOptions};
use crate::fs::path::Path;
use crate::fs::{
    AlreadyExistsError, FileType, IterateError, Metadata, MkdirError, NotFoundError,
    RemoveError, SystemError, syscall,
};

/// One filesystem entry: an owned [`Path`] plus a lazily-populated metadata cache.
///
/// The handle touches the filesystem only when a query forces it to; the resulting
/// [`Metadata`] (or the fact that the entry is missing) is then cached until
/// [`reset`](Self::reset). Mutating the path through [`path_mut`](Self::path_mut) does *not*
/// invalidate the cache; callers repurposing a handle for a different entry must reset it
/// themselves. Directory iteration relies on exactly that contract to reuse one child handle
/// across all entries of a traversal.
#[derive(Debug)]
pub struct File {
    path: Path,
    cached: Option<Stat>,
}

/// Outcome of one stat, as cached on a [`File`]. A missing entry is an answer, not an error.
#[derive(Debug, Clone)]
pub(crate) enum Stat {
    Missing,
    Present(Metadata),
}

impl File {
    /// Creates a handle for the given path text. No filesystem access happens yet.
    pub fn new<S: AsRef<OsStr>>(path: S) -> File {
        File::from_path(Path::new(path))
    }

    /// Creates a handle owning an existing [`Path`] value. No filesystem access happens yet.
    pub const fn from_path(path: Path) -> File {
        File { path, cached: None }
    }

    /// Borrows the handle's path.
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Mutably borrows the handle's path.
    ///
    /// The metadata cache is *not* invalidated by path edits; call [`reset`](Self::reset)
    /// when the handle is being repurposed for a different entry.
    pub const fn path_mut(&mut self) -> &mut Path {
        &mut self.path
    }

    /// Consumes the handle, returning the owned path.
    pub fn into_path(self) -> Path {
        self.path
    }

    /// Drops the metadata cache without touching the path. The next query will stat again.
    pub fn reset(&mut self) {
        self.cached = None;
    }

    /// Populates the cache if it is empty; a cache hit returns immediately.
    ///
    /// `ENOENT` and `ENOTDIR` are successful outcomes (the entry is classified as missing).
    /// Any other failure leaves the cache unpopulated and surfaces the OS error code.
    pub(crate) fn ensure_stat(&mut self) -> Result<(), SystemError> {
        if self.cached.is_some() {
            return Ok(());
        }

        let pathname = self.path.to_c_string()?;
        let mut raw: MaybeUninit<libc::stat> = MaybeUninit::uninit();
        // SAFETY: pathname is NUL-terminated and the stat buffer outlives the call. lstat is
        // used rather than stat so that symlinks classify as themselves.
        if unsafe { libc::lstat(pathname.as_ptr(), raw.as_mut_ptr()) } == -1 {
            return match syscall::err_no() {
                libc::ENOENT | libc::ENOTDIR => {
                    self.cached = Some(Stat::Missing);
                    Ok(())
                }
                code => Err(SystemError(code)),
            };
        }

        // SAFETY: lstat returned 0, so the buffer is fully initialized.
        let raw = unsafe { raw.assume_init() };
        self.cached = Some(Stat::Present(Metadata::from_raw(&raw)));
        Ok(())
    }

    /// Returns true if the entry exists in any form (including as a dangling symlink).
    pub fn exists(&mut self) -> Result<bool, SystemError> {
        Ok(!self.file_type()?.is_missing())
    }

    /// Returns the entry's classification, stat'ing on the first call.
    pub fn file_type(&mut self) -> Result<FileType, SystemError> {
        self.ensure_stat()?;
        match &self.cached {
            Some(Stat::Present(metadata)) => Ok(metadata.file_type),
            _ => Ok(FileType::Missing),
        }
    }

    /// Returns the entry's full metadata record, or [`None`] for a missing entry.
    pub fn metadata(&mut self) -> Result<Option<&Metadata>, SystemError> {
        self.ensure_stat()?;
        match &self.cached {
            Some(Stat::Present(metadata)) => Ok(Some(metadata)),
            _ => Ok(None),
        }
    }

    /// Creates the directory at this handle's path with the given mode bits.
    ///
    /// See [`MkdirOptions`] for the `permissive` and `recursive` semantics. With `recursive`,
    /// missing ancestors are created first (idempotently, so an ancestor appearing
    /// concurrently is fine); an empty [`dirname`](Path::dirname) means the target sits at
    /// the filesystem root or is a bare relative name, and the parent is assumed to exist.
    ///
    /// The stat-then-create window is not closed: if another actor wins the creation race,
    /// the loss surfaces as the `EEXIST` the OS reports, as a [`SystemError`].
    pub fn mkdir(&mut self, mode: mode_t, options: MkdirOptions) -> Result<(), MkdirError> {
        debug!("mkdir {}", self.path);

        match self.file_type()? {
            FileType::Directory => {
                return if options.permissive {
                    Ok(())
                } else {
                    Err(AlreadyExistsError.into())
                };
            }
            FileType::Missing => {}
            // Occupied by something that is not a directory; permissive does not cover this.
            _ => return Err(AlreadyExistsError.into()),
        }

        if options.recursive {
            let parent = self.path.dirname();
            if !parent.is_empty() {
                File::from_path(parent).mkdir(mode, options.permissive(true))?;
            }
        }

        let pathname = self.path.to_c_string()?;
        // SAFETY: pathname is NUL-terminated; no memory is handed to the OS beyond the call.
        if unsafe { libc::mkdir(pathname.as_ptr(), mode) } == -1 {
            return Err(SystemError::last_os().into());
        }
        Ok(())
    }

    /// Removes the entry at this handle's path.
    ///
    /// See [`RemoveOptions`] for the `permissive` and `recursive` semantics. Directories are
    /// removed with `rmdir` (after their contents, when `recursive`); everything else
    /// (regular files, symlinks which are never followed, sockets, devices) is unlinked.
    ///
    /// A directory cycle encountered during recursive removal (possible under concurrent
    /// renames or bind mounts) fails with `ELOOP` instead of recursing forever.
    pub fn remove(&mut self, options: RemoveOptions) -> Result<(), RemoveError> {
        self.remove_inner(options, &mut Vec::new())
    }

    fn remove_inner(
        &mut self,
        options: RemoveOptions,
        removal_stack: &mut Vec<(u64, u64)>,
    ) -> Result<(), RemoveError> {
        debug!("remove {}", self.path);

        let (file_type, dir_id) = match self.metadata()? {
            Some(metadata) => (metadata.file_type, (metadata.device, metadata.inode)),
            None => (FileType::Missing, (0, 0)),
        };

        match file_type {
            FileType::Missing => {
                if options.permissive {
                    Ok(())
                } else {
                    Err(NotFoundError.into())
                }
            }
            FileType::Directory => {
                if options.recursive {
                    if removal_stack.contains(&dir_id) {
                        return Err(SystemError(libc::ELOOP).into());
                    }
                    removal_stack.push(dir_id);
                    let result = self.iterate_directory(&mut |child: &mut File, _: &OsStr| {
                        child.remove_inner(options, &mut *removal_stack)
                    });
                    removal_stack.pop();
                    match result {
                        Ok(()) => {}
                        Err(IterateError::System(error)) => return Err(error.into()),
                        Err(IterateError::Visitor(error)) => return Err(error),
                    }
                }

                let pathname = self.path.to_c_string()?;
                // SAFETY: pathname is NUL-terminated; rmdir takes no memory beyond the call.
                if unsafe { libc::rmdir(pathname.as_ptr()) } == -1 {
                    return Err(SystemError::last_os().into());
                }
                Ok(())
            }
            _ => {
                let pathname = self.path.to_c_string()?;
                // SAFETY: pathname is NUL-terminated; unlink takes no memory beyond the call.
                if unsafe { libc::unlink(pathname.as_ptr()) } == -1 {
                    return Err(SystemError::last_os().into());
                }
                Ok(())
            }
        }
    }
}

impl From<Path> for File {
    fn from(value: Path) -> File {
        File::from_path(value)
    }
}
