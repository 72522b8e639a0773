#![cfg(test)]

use super::*;

#[test]
fn test_fifo_ordering() {
    let mut ring = RingBuffer::with_cap(3);

    assert!(ring.add(1).is_ok());
    assert!(ring.add(2).is_ok());

    assert_eq!(ring.pop(), Some(1), "The first element added should pop first.");
    assert_eq!(
        ring.peek(),
        Some(&2),
        "After popping, the next element should be visible to peek."
    );
    assert_eq!(ring.len(), 1);

    assert_eq!(ring.pop(), Some(2));
    assert_eq!(ring.pop(), None, "Popping an empty buffer should return None.");
}

#[test]
fn test_full_buffer_rejects_without_mutating() {
    let mut ring = RingBuffer::with_cap(2);
    ring.add("a").expect("buffer should have room");
    ring.add("b").expect("buffer should have room");

    let rejected = ring.add("c");
    assert!(matches!(rejected, Err(FullError("c"))), "A full buffer should reject the element.");
    assert_eq!(ring.len(), 2, "A rejected add should not change the length.");
    assert_eq!(ring.peek(), Some(&"a"), "A rejected add should not disturb the read cursor.");

    assert_eq!(ring.pop(), Some("a"));
    assert!(
        ring.add("c").is_ok(),
        "Space freed by pop should be reusable for a subsequent add."
    );
    assert_eq!(ring.pop(), Some("b"));
    assert_eq!(ring.pop(), Some("c"));
}

#[test]
fn test_cursor_wrapping() {
    let mut ring = RingBuffer::with_cap(2);

    // Cycle enough elements through to wrap both cursors several times.
    for i in 0..10 {
        ring.add(i).expect("buffer should have room");
        assert_eq!(ring.pop(), Some(i), "FIFO order should survive cursor wrap-around.");
    }
    assert!(ring.is_empty());
}

#[test]
fn test_empty_and_full_flags() {
    let mut ring = RingBuffer::with_cap(1);
    assert!(ring.is_empty());
    assert!(!ring.is_full());
    assert_eq!(ring.peek(), None, "Peeking an empty buffer should return None.");

    ring.add(7).expect("buffer should have room");
    assert!(!ring.is_empty());
    assert!(ring.is_full());

    let mut zero: RingBuffer<u8> = RingBuffer::with_cap(0);
    assert!(zero.is_empty() && zero.is_full(), "A zero-capacity buffer is both empty and full.");
    assert_eq!(zero.pop(), None);
    assert!(zero.add(1).is_err());
}

#[test]
fn test_ownership_returned_on_full() {
    let mut ring = RingBuffer::with_cap(1);
    let kept = String::from("kept");
    let rejected = String::from("rejected");

    ring.add(kept).expect("buffer should have room");
    match ring.add(rejected) {
        Err(FullError(element)) => {
            assert_eq!(element, "rejected", "The rejected element should come back intact.");
        }
        Ok(()) => panic!("adding to a full buffer should fail"),
    }
}
