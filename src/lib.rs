//! Filesystem primitives built directly on POSIX system calls, plus a small ring buffer.
//!
//! # Purpose
//! This crate is the path-and-file core of a larger toolkit: a mutable, deliberately
//! *unnormalized* [`Path`](fs::path::Path) value type, a [`File`](fs::file::File) handle that
//! caches one `stat` result lazily, callback-driven directory iteration, and recursive
//! directory creation and removal on top of those. The point of the design is that the string
//! algebra (join, basename, dirname, absolutization) stays pure and cheap, while everything
//! that actually touches the filesystem reports precise, recoverable errors instead of
//! panicking or guessing.
//!
//! # Error Handling
//! Every operation that can fail returns a [`Result`], in a strongly typed manner: small
//! condition structs (one per distinct failure) grouped into per-operation enums for static
//! dispatch. A "missing" file is *not* a failure: it is a successful classification, because
//! callers routinely probe paths that may not exist. Only genuinely unexpected syscall
//! failures surface, carrying their raw OS error code via [`SystemError`](fs::SystemError).
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers, providing strong typing
//! over `lstat`, `mkdir`, `rmdir`, `unlink` and the `opendir` family, and on the `log` facade
//! for debug records at the mutation entry points. Derive macros from `derive_more` remove
//! some very repetitive error-type programming. The collections have no dependencies at all.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "fs")]
pub mod fs;
