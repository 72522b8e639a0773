//! General-purpose collection types.
//!
//! Currently this is only the fixed-capacity [`RingBuffer`](ring::RingBuffer); it shares a
//! crate with the filesystem types for packaging convenience, not because it depends on them
//! (it doesn't, in either direction).

#[cfg(feature = "ring")]
pub mod ring;
