//! The [`File`] type: a path paired with a lazily-populated metadata cache, and the
//! directory creation/removal operations built on it.
//!
//! # Caching
//! The first metadata query (`exists`, `file_type`, `metadata`) issues one `lstat`; the
//! answer is cached on the handle and reused until [`File::reset`]. There is deliberately no
//! automatic invalidation, not even when the handle itself mutates the filesystem:
//! directory iteration repurposes a single child handle per entry, and the explicit-reset
//! contract is what makes that reuse cheap.
//!
//! # Options
//! [`MkdirOptions`] and [`RemoveOptions`] carry the `permissive`/`recursive` pair of flags
//! as small copyable builders.

mod file;
mod options;

pub use file::*;
pub use options::*;
