use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};

use parking_lot::Mutex;
use thiserror::Error;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Direction

/// The directions a stream handle may be used in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Both,
    Recv,
    Send,
}

impl Direction {
    /// Returns `true` if values can be received.
    #[inline]
    pub const fn can_recv(self) -> bool {
        matches!(self, Self::Both | Self::Recv)
    }

    /// Returns `true` if values can be sent.
    #[inline]
    pub const fn can_send(self) -> bool {
        matches!(self, Self::Both | Self::Send)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Both => "chan",
            Self::Recv => "<-chan",
            Self::Send => "chan<-",
        })
    }
}

// -----------------------------------------------------------------------------
// StreamError

/// A enumeration of all error outcomes of stream operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StreamError {
    #[error("stream is nil")]
    Nil,
    #[error("stream is closed")]
    Closed,
    #[error("stream direction `{0}` does not allow this operation")]
    Direction(Direction),
    #[error("stream of `{expected}` cannot carry `{found}`")]
    ItemType {
        expected: &'static str,
        found: &'static str,
    },
}

// -----------------------------------------------------------------------------
// Stream

/// A trait used to power channel-like operations via reflection.
///
/// Receiving blocks the calling thread until a value arrives or the
/// stream is closed; there is no timeout.
pub trait Stream: Reflect {
    /// Returns the direction of this handle.
    fn direction(&self) -> Direction;

    /// Returns `true` if there is no underlying channel.
    fn is_nil(&self) -> bool;

    /// Receives one value, `None` once closed and drained or when nil.
    fn recv(&self) -> Option<Box<dyn Reflect>>;

    /// Sends one value, blocking while the buffer is full.
    fn send(&self, value: Box<dyn Reflect>) -> Result<(), StreamError>;

    /// Replaces this handle with a fresh channel buffering `capacity` values.
    fn open(&mut self, capacity: usize);
}

// -----------------------------------------------------------------------------
// Chan

struct Channel<T> {
    capacity: usize,
    tx: Mutex<Option<SyncSender<T>>>,
    rx: Mutex<Receiver<T>>,
}

/// A bounded, closable FIFO channel handle.
///
/// Clones share the same channel. The default value is nil.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::Chan;
///
/// let chan = Chan::<u32>::new(2);
/// chan.send(1).unwrap();
/// chan.send(2).unwrap();
/// chan.close();
///
/// let rx = chan.receiver();
/// assert_eq!(rx.recv(), Some(1));
/// assert_eq!(rx.recv(), Some(2));
/// assert_eq!(rx.recv(), None);
/// ```
pub struct Chan<T> {
    inner: Option<Arc<Channel<T>>>,
    dir: Direction,
}

impl<T> Chan<T> {
    /// Creates a nil handle.
    #[inline]
    pub const fn nil() -> Self {
        Self {
            inner: None,
            dir: Direction::Both,
        }
    }

    /// Creates a channel buffering up to `capacity` values.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = sync_channel(capacity);
        Self {
            inner: Some(Arc::new(Channel {
                capacity,
                tx: Mutex::new(Some(tx)),
                rx: Mutex::new(rx),
            })),
            dir: Direction::Both,
        }
    }

    /// Returns the direction of this handle.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.dir
    }

    /// Returns `true` if there is no underlying channel.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns the number of values the channel buffers, `None` if nil.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.inner.as_ref().map(|inner| inner.capacity)
    }

    /// Returns a receive-only handle to the same channel.
    #[inline]
    pub fn receiver(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            dir: Direction::Recv,
        }
    }

    /// Returns a send-only handle to the same channel.
    #[inline]
    pub fn sender(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            dir: Direction::Send,
        }
    }

    /// Sends a value, blocking while the buffer is full.
    pub fn send(&self, value: T) -> Result<(), StreamError> {
        if !self.dir.can_send() {
            return Err(StreamError::Direction(self.dir));
        }
        let inner = self.inner.as_ref().ok_or(StreamError::Nil)?;
        let tx = inner.tx.lock().clone().ok_or(StreamError::Closed)?;
        tx.send(value).map_err(|_| StreamError::Closed)
    }

    /// Receives a value, blocking until one arrives.
    ///
    /// Returns `None` once the channel is closed and drained, on nil
    /// handles, and on send-only handles.
    pub fn recv(&self) -> Option<T> {
        if !self.dir.can_recv() {
            return None;
        }
        let inner = self.inner.as_ref()?;
        inner.rx.lock().recv().ok()
    }

    /// Closes the channel.
    ///
    /// Buffered values can still be received. Closing twice is a no-op.
    pub fn close(&self) {
        if let Some(inner) = &self.inner {
            inner.tx.lock().take();
        }
    }
}

impl<T> Clone for Chan<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            dir: self.dir,
        }
    }
}

impl<T> Default for Chan<T> {
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> fmt::Debug for Chan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => write!(f, "{}({:p})", self.dir, Arc::as_ptr(inner)),
            None => write!(f, "{}(nil)", self.dir),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Chan, Direction, StreamError};

    #[test]
    fn nil_handle() {
        let chan = Chan::<u8>::default();
        assert!(chan.is_nil());
        assert_eq!(chan.capacity(), None);
        assert_eq!(chan.recv(), None);
        assert_eq!(chan.send(1), Err(StreamError::Nil));
    }

    #[test]
    fn views_restrict_direction() {
        let chan = Chan::<u8>::new(1);
        assert_eq!(
            chan.receiver().send(1),
            Err(StreamError::Direction(Direction::Recv))
        );

        chan.sender().send(3).unwrap();
        assert_eq!(chan.sender().recv(), None);
        assert_eq!(chan.receiver().recv(), Some(3));
    }

    #[test]
    fn send_after_close_fails() {
        let chan = Chan::<u8>::new(1);
        chan.close();
        chan.close();
        assert_eq!(chan.send(1), Err(StreamError::Closed));
        assert_eq!(chan.recv(), None);
    }

    #[test]
    fn clones_share_buffer() {
        let a = Chan::<u8>::new(4);
        let b = a.clone();
        assert_eq!(b.receiver().capacity(), Some(4));
        a.send(7).unwrap();
        assert_eq!(b.recv(), Some(7));
    }
}
