use derive_more::IsVariant;
use libc::mode_t;

/// Classification of a filesystem entry, derived from the type bits of its metadata.
///
/// `Missing` is a successful answer, not an error: the leaf does not exist, or one of the
/// parent components is not a directory. Classification is taken at the link layer (`lstat`),
/// so a symbolic link reports `Symlink` regardless of what it points at; this crate never
/// resolves link targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum FileType {
    Regular,
    Directory,
    Symlink,
    /// Something that exists but is none of the above: a socket, FIFO or device node.
    Unknown,
    Missing,
}

impl FileType {
    pub(crate) const fn from_mode(mode: mode_t) -> FileType {
        match mode & libc::S_IFMT {
            libc::S_IFREG => FileType::Regular,
            libc::S_IFDIR => FileType::Directory,
            libc::S_IFLNK => FileType::Symlink,
            _ => FileType::Unknown,
        }
    }
}
