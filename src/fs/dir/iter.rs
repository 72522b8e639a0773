use std::os::unix::ffi::OsStrExt;

use super::{Dir, DirVisitor};
use crate::fs::IterateError;
use crate::fs::file::File;

impl File {
    /// Feeds every non-trivial entry of the directory at this handle's path to `visitor`.
    ///
    /// The pseudo-entries `.` and `..` are skipped. Each remaining entry arrives as a child
    /// [`File`] whose metadata is already populated, together with its bare name; entry order
    /// is OS-defined. The child handle is one reused allocation; see [`DirVisitor`] for the
    /// lifetime contract on it.
    ///
    /// Failure to open the directory (not found, not a directory, permission denied) surfaces
    /// immediately as [`IterateError::System`] with no entries visited. A visitor failure
    /// stops the walk at once and propagates verbatim as [`IterateError::Visitor`]. In every
    /// case the directory stream is released exactly once before returning.
    pub fn iterate_directory<V: DirVisitor>(
        &self,
        visitor: &mut V,
    ) -> Result<(), IterateError<V::Error>> {
        let mut dir = Dir::open(self.path())?;
        let mut child = File::from_path(self.path().clone());
        let parent_len = self.path().len();

        loop {
            let name = match dir.next_entry() {
                Ok(Some(name)) => name,
                Ok(None) => break,
                Err(error) => return Err(IterateError::System(error)),
            };
            if name.as_bytes() == b"." || name.as_bytes() == b".." {
                continue;
            }

            child.path_mut().append(name);
            if let Err(error) = child.ensure_stat() {
                return Err(IterateError::System(error));
            }
            visitor.visit(&mut child, name).map_err(IterateError::Visitor)?;

            // Wind the shared handle back for the next entry: drop the name from the path
            // and invalidate the stat that went with it.
            child.path_mut().truncate(parent_len);
            child.reset();
        }

        dir.close().map_err(IterateError::System)
    }
}
