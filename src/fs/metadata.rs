use libc::{mode_t, stat};

use crate::fs::FileType;

/// A snapshot of one entry's metadata, captured by [`File`](crate::fs::file::File) on its
/// first query and held until an explicit reset.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub file_type: FileType,       // st_mode (type bits)
    pub mode: mode_t,              // st_mode (permission bits included)
    pub size: i64,                 // st_size
    pub uid: u32,                  // st_uid
    pub gid: u32,                  // st_gid
    pub device: u64,               // st_dev
    pub raw_device: u64,           // st_rdev
    pub inode: u64,                // st_ino
    pub links: u64,                // st_nlink
    pub time_accessed: (i64, i64), // st_atime, st_atime_nsec
    pub time_modified: (i64, i64), // st_mtime, st_mtime_nsec
    pub time_changed: (i64, i64),  // st_ctime, st_ctime_nsec
    pub block_size: i64,           // st_blksize
    pub blocks: i64,               // st_blocks
}

impl Metadata {
    #[allow(clippy::unnecessary_cast)]
    pub(crate) fn from_raw(raw: &stat) -> Metadata {
        Metadata {
            file_type: FileType::from_mode(raw.st_mode),
            mode: raw.st_mode,
            size: raw.st_size as i64,
            uid: raw.st_uid,
            gid: raw.st_gid,
            device: raw.st_dev as u64,
            raw_device: raw.st_rdev as u64,
            inode: raw.st_ino as u64,
            links: raw.st_nlink as u64,
            time_accessed: (raw.st_atime as i64, raw.st_atime_nsec as i64),
            time_modified: (raw.st_mtime as i64, raw.st_mtime_nsec as i64),
            time_changed: (raw.st_ctime as i64, raw.st_ctime_nsec as i64),
            block_size: raw.st_blksize as i64,
            blocks: raw.st_blocks as i64,
        }
    }
}
