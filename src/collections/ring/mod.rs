//! A fixed-capacity circular FIFO queue, the [`RingBuffer`].
//!
//! The storage is one boxed slice allocated at construction; the capacity never changes for
//! the lifetime of the buffer. Adding to a full buffer is a distinct, recoverable condition
//! ([`FullError`]) that hands the rejected element back rather than dropping it.

mod ring_buffer;
mod tests;

pub use ring_buffer::*;
