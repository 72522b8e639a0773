use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter;

/// A fixed-capacity circular queue with first-in-first-out ordering.
///
/// Elements are stored by value; ownership transfers into the buffer on [`add`](Self::add) and
/// back out on [`pop`](Self::pop). The backing storage is allocated once at construction and
/// never resized, so `add` on a full buffer is an error instead of a reallocation.
///
/// # Examples
/// ```
/// # use filekit::collections::ring::RingBuffer;
/// let mut ring = RingBuffer::with_cap(2);
/// ring.add(1).unwrap();
/// ring.add(2).unwrap();
/// assert!(ring.add(3).is_err());
/// assert_eq!(ring.pop(), Some(1));
/// assert_eq!(ring.peek(), Some(&2));
/// assert_eq!(ring.pop(), Some(2));
/// assert_eq!(ring.pop(), None);
/// ```
pub struct RingBuffer<T> {
    elements: Box<[Option<T>]>,
    read: usize,
    write: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a new RingBuffer with capacity exactly equal to the provided value. The storage
    /// is allocated here and lives until the buffer is dropped.
    ///
    /// A capacity of zero is allowed; such a buffer is permanently both empty and full.
    pub fn with_cap(cap: usize) -> RingBuffer<T> {
        RingBuffer {
            elements: iter::repeat_with(|| None).take(cap).collect(),
            read: 0,
            write: 0,
            len: 0,
        }
    }

    /// Returns the fixed capacity of the buffer.
    pub const fn cap(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements currently held.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the buffer holds `cap` elements, so that the next [`add`](Self::add)
    /// would fail.
    pub const fn is_full(&self) -> bool {
        self.len == self.elements.len()
    }

    /// Appends an element at the write cursor.
    ///
    /// If the buffer is already full, nothing is mutated and the rejected element is handed
    /// back inside the error.
    pub fn add(&mut self, element: T) -> Result<(), FullError<T>> {
        if self.is_full() {
            return Err(FullError(element));
        }

        self.elements[self.write] = Some(element);
        self.write += 1;
        if self.write == self.elements.len() {
            self.write = 0;
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest element, or [`None`] if the buffer is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let element = self.elements[self.read].take()?;
        self.read += 1;
        if self.read == self.elements.len() {
            self.read = 0;
        }
        self.len -= 1;
        Some(element)
    }

    /// Returns the oldest element without removing it, or [`None`] if the buffer is empty.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.elements[self.read].as_ref()
    }
}

impl<T: Debug> Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len).map(|i| {
                let index = (self.read + i) % self.elements.len();
                &self.elements[index]
            }))
            .finish()
    }
}

/// Error returned by [`RingBuffer::add`] when the buffer is at capacity, carrying the rejected
/// element so the caller keeps ownership of it.
pub struct FullError<T>(pub T);

impl<T> Debug for FullError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("FullError(..)")
    }
}

impl<T> Display for FullError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("ring buffer is full")
    }
}

impl<T> Error for FullError<T> {}
